//! Teletext value types
//!
//! Strictly parsed values used by the VBIT configuration: page addresses,
//! subcodes, network identification codes, broadcast service data reserved
//! bytes, magazine priorities and the output packet format.

pub mod error;
pub mod format;
pub mod network;
pub mod page;
pub mod priority;
pub mod reserved;
pub mod text;

pub use error::CodeError;
pub use format::OutputFormat;
pub use network::NetworkCode;
pub use page::{InitialPage, PageAddress, Subcode};
pub use priority::MagazinePriority;
pub use reserved::ReservedBytes;
pub use text::fit_width;

/// Parse exactly `digits` hexadecimal characters.
///
/// Unlike `u16::from_str_radix` this rejects signs, prefixes and any length
/// other than `digits`.
pub(crate) fn parse_hex_exact(value: &str, digits: usize) -> Result<u16, CodeError> {
    if value.len() != digits {
        return Err(CodeError::DigitCount {
            expected: digits,
            got: value.len(),
        });
    }
    if !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodeError::InvalidHex(value.to_string()));
    }
    u16::from_str_radix(value, 16).map_err(|_| CodeError::InvalidHex(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_exact() {
        assert_eq!(parse_hex_exact("FA6F", 4).unwrap(), 0xFA6F);
        assert_eq!(parse_hex_exact("1ff", 3).unwrap(), 0x1FF);
    }

    #[test]
    fn test_parse_hex_exact_rejects_sign_and_length() {
        assert!(matches!(
            parse_hex_exact("+FA6", 4),
            Err(CodeError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_hex_exact("FA6", 4),
            Err(CodeError::DigitCount { expected: 4, got: 3 })
        ));
        assert!(matches!(
            parse_hex_exact("12G4", 4),
            Err(CodeError::InvalidHex(_))
        ));
    }
}
