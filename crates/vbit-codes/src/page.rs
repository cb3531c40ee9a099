//! Teletext page addressing.
//!
//! A page is addressed by magazine (1-8) and a two hex digit page number.
//! In configuration files the pair is written as a three hex digit code
//! `MPP`, optionally followed by `:SSSS` to select the subcode.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CodeError;
use crate::parse_hex_exact;

/// Bits of a subcode that must always be zero.
pub const SUBCODE_RESERVED_MASK: u16 = 0xC080;

/// Largest subcode value.
pub const SUBCODE_MAX: u16 = 0x3F7F;

/// Magazine and page number of a teletext page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageAddress {
    magazine: u8,
    page: u8,
}

impl PageAddress {
    /// Create an address from magazine (1-8) and page number.
    ///
    /// Page number 0xFF is reserved and rejected.
    pub fn new(magazine: u8, page: u8) -> Result<Self, CodeError> {
        if !(1..=8).contains(&magazine) {
            return Err(CodeError::MagazineOutOfRange(magazine));
        }
        if page == 0xFF {
            return Err(CodeError::ReservedPageNumber);
        }
        Ok(Self { magazine, page })
    }

    /// Create an address from a combined `0xMPP` code.
    pub fn from_code(code: u16) -> Result<Self, CodeError> {
        if !(0x100..=0x8FF).contains(&code) {
            return Err(CodeError::PageOutOfRange(code));
        }
        // Both halves fit in a byte once the range check has passed.
        Self::new((code / 0x100) as u8, (code % 0x100) as u8)
    }

    pub fn magazine(&self) -> u8 {
        self.magazine
    }

    pub fn page(&self) -> u8 {
        self.page
    }

    /// The combined `0xMPP` code.
    pub fn code(&self) -> u16 {
        u16::from(self.magazine) * 0x100 + u16::from(self.page)
    }
}

impl Default for PageAddress {
    fn default() -> Self {
        Self {
            magazine: 1,
            page: 0x00,
        }
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03X}", self.code())
    }
}

impl FromStr for PageAddress {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(parse_hex_exact(s, 3)?)
    }
}

/// Page subcode with the reserved bit groups clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Subcode(u16);

impl Subcode {
    pub fn new(value: u16) -> Result<Self, CodeError> {
        if value > SUBCODE_MAX || value & SUBCODE_RESERVED_MASK != 0 {
            return Err(CodeError::InvalidSubcode(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Default for Subcode {
    fn default() -> Self {
        Self(SUBCODE_MAX)
    }
}

impl fmt::Display for Subcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl FromStr for Subcode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_hex_exact(s, 4)?)
    }
}

/// The `initial_teletext_page` value: `MPP` or `MPP:SSSS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialPage {
    pub address: PageAddress,
    /// Present only when the value carried a subcode.
    pub subcode: Option<Subcode>,
}

impl FromStr for InitialPage {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 3 || !s.is_char_boundary(3) {
            return Err(CodeError::DigitCount {
                expected: 3,
                got: s.len(),
            });
        }
        let (page, rest) = s.split_at(3);
        let address: PageAddress = page.parse()?;

        if rest.is_empty() {
            return Ok(Self {
                address,
                subcode: None,
            });
        }

        let subcode = rest
            .strip_prefix(':')
            .ok_or(CodeError::MissingSubcodeSeparator)?;
        Ok(Self {
            address,
            subcode: Some(subcode.parse()?),
        })
    }
}
