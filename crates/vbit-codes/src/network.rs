//! Network identification codes carried in packet 8/30.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;
use crate::parse_hex_exact;

/// A 16-bit network or country-network identification code.
///
/// Written as exactly four hex digits, e.g. `FA6F`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NetworkCode(u16);

impl NetworkCode {
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for NetworkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl FromStr for NetworkCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_exact(s, 4).map(Self)
    }
}
