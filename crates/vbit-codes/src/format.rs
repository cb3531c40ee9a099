//! Output packet format.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;

/// How generated packets are written to the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum OutputFormat {
    /// 42-byte teletext packets. The only format that supports bit reversal.
    #[default]
    T42,
    /// Raw VBI lines.
    Raw,
    /// Packetised elementary stream.
    #[serde(rename = "PES")]
    Pes,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::T42 => write!(f, "t42"),
            Self::Raw => write!(f, "raw"),
            Self::Pes => write!(f, "PES"),
        }
    }
}

/// Matches the command line spelling exactly: `t42`, `raw` or `PES`.
impl FromStr for OutputFormat {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t42" => Ok(Self::T42),
            "raw" => Ok(Self::Raw),
            "PES" => Ok(Self::Pes),
            other => Err(CodeError::UnknownFormat(other.to_string())),
        }
    }
}
