//! Error types for teletext value parsing.

use thiserror::Error;

/// Reasons a teletext value failed to parse or validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("expected {expected} digits, got {got}")]
    DigitCount { expected: usize, got: usize },

    #[error("invalid hexadecimal value: {0}")]
    InvalidHex(String),

    #[error("page code {0:#05X} is outside 0x100..=0x8FF")]
    PageOutOfRange(u16),

    #[error("page number 0xFF is reserved")]
    ReservedPageNumber,

    #[error("magazine {0} is outside 1..=8")]
    MagazineOutOfRange(u8),

    #[error("missing ':' between page and subcode")]
    MissingSubcodeSeparator,

    #[error("subcode {0:#06X} is outside 0x0000..=0x3F7F or has reserved bits set")]
    InvalidSubcode(u16),

    #[error("reserved bytes must be a 32-bit hexadecimal value: {0}")]
    InvalidReserved(String),

    #[error("magazine priority needs exactly 8 values, got {0}")]
    PriorityCount(usize),

    #[error("magazine priority {0} is outside 1..=9")]
    PriorityOutOfRange(String),

    #[error("unknown output format '{0}' (expected t42, raw or PES)")]
    UnknownFormat(String),
}
