//! Header line encoding.
//!
//! The `header_template` directive hands its value to a [`LineEncoder`]
//! which turns it into a displayable teletext line. The encoder used in the
//! broadcast pipeline lives outside this crate; [`PassthroughEncoder`] is used
//! when none is supplied.

use thiserror::Error;

/// Encoder failure, reported against the config line that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EncodeError(pub String);

/// Turns a header template into a teletext line.
pub trait LineEncoder: Send + Sync {
    fn encode(&self, template: &str) -> Result<String, EncodeError>;
}

/// Returns the template unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEncoder;

impl LineEncoder for PassthroughEncoder {
    fn encode(&self, template: &str) -> Result<String, EncodeError> {
        Ok(template.to_string())
    }
}

impl<F> LineEncoder for F
where
    F: Fn(&str) -> Result<String, EncodeError> + Send + Sync,
{
    fn encode(&self, template: &str) -> Result<String, EncodeError> {
        self(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(PassthroughEncoder.encode("VBIT2 %H").unwrap(), "VBIT2 %H");
    }

    #[test]
    fn test_closure_encoder() {
        let upper = |s: &str| -> Result<String, EncodeError> { Ok(s.to_uppercase()) };
        assert_eq!(upper.encode("abc").unwrap(), "ABC");
    }
}
