//! Reserved bytes of the broadcast service data packet.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

/// Hamming 8/4 encoding of zero.
pub const HAMMING_8_4_ZERO: u8 = 0x15;

/// The four reserved bytes, in transmission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedBytes([u8; 4]);

impl ReservedBytes {
    /// Split a 32-bit value most significant byte first, so the digits read
    /// left to right in the same order as the bytes are sent.
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    pub fn bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl Default for ReservedBytes {
    fn default() -> Self {
        Self([HAMMING_8_4_ZERO; 4])
    }
}

impl fmt::Display for ReservedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl Serialize for ReservedBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses up to eight hex digits, with an optional `0x` prefix.
impl FromStr for ReservedBytes {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty()
            || digits.len() > 8
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(CodeError::InvalidReserved(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| CodeError::InvalidReserved(s.to_string()))
    }
}
