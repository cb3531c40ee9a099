//! Magazine transmission priorities.

use serde::Serialize;
use std::str::FromStr;

use crate::error::CodeError;

/// Number of magazines.
pub const MAGAZINES: usize = 8;

/// Per-magazine priority, 1 = highest, 9 = lowest.
///
/// Index 0 holds magazine 8; indices 1-7 hold magazines 1-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MagazinePriority([u8; MAGAZINES]);

impl MagazinePriority {
    pub fn new(priorities: [u8; MAGAZINES]) -> Result<Self, CodeError> {
        if let Some(bad) = priorities.iter().find(|p| !(1..=9).contains(*p)) {
            return Err(CodeError::PriorityOutOfRange(bad.to_string()));
        }
        Ok(Self(priorities))
    }

    pub fn as_array(&self) -> [u8; MAGAZINES] {
        self.0
    }
}

impl Default for MagazinePriority {
    fn default() -> Self {
        Self([9, 3, 3, 6, 3, 3, 5, 6])
    }
}

/// Parses exactly eight comma-separated decimal values in 1..=9.
impl FromStr for MagazinePriority {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(',').map(str::trim).collect();
        if tokens.len() != MAGAZINES {
            return Err(CodeError::PriorityCount(tokens.len()));
        }

        let mut priorities = [0u8; MAGAZINES];
        for (slot, token) in priorities.iter_mut().zip(&tokens) {
            *slot = match token.parse::<u8>() {
                Ok(p) if (1..=9).contains(&p) && token.bytes().all(|b| b.is_ascii_digit()) => p,
                _ => return Err(CodeError::PriorityOutOfRange(token.to_string())),
            };
        }
        Ok(Self(priorities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_order() {
        let priority: MagazinePriority = "1,2,3,4,5,6,7,8".parse().unwrap();
        assert_eq!(priority.as_array(), [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_trims_tokens() {
        let priority: MagazinePriority = "9, 3, 3, 6, 3, 3, 5, 6".parse().unwrap();
        assert_eq!(priority, MagazinePriority::default());
    }

    #[test]
    fn test_count_must_be_eight() {
        assert_eq!(
            "1,2,3".parse::<MagazinePriority>(),
            Err(CodeError::PriorityCount(3))
        );
        assert_eq!(
            "1,2,3,4,5,6,7,8,9".parse::<MagazinePriority>(),
            Err(CodeError::PriorityCount(9))
        );
    }

    #[test]
    fn test_values_must_be_one_to_nine() {
        assert!("0,2,3,4,5,6,7,8".parse::<MagazinePriority>().is_err());
        assert!("1,2,3,4,5,6,7,10".parse::<MagazinePriority>().is_err());
        assert!("1,2,3,x,5,6,7,8".parse::<MagazinePriority>().is_err());
        assert!("1,2,3,+4,5,6,7,8".parse::<MagazinePriority>().is_err());
        assert!(MagazinePriority::new([1, 1, 1, 1, 1, 1, 1, 0]).is_err());
    }
}
