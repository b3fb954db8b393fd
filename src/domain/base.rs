//! Output base validation

use std::fmt;

use crate::domain::{parse_decimal, DomainError, DomainResult};

/// A supported output base: 2 through 10, or 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base(u32);

impl Base {
    pub const BINARY: Base = Base(2);
    pub const DECIMAL: Base = Base(10);
    pub const HEX: Base = Base(16);

    /// Parse the base argument as a decimal literal.
    ///
    /// Only the lower bound is checked here; see [`Base::new`] for the rest.
    /// An empty argument counts as base 0.
    pub fn parse_arg(text: &str) -> DomainResult<i64> {
        if text.is_empty() {
            return Err(DomainError::BaseTooSmall(0));
        }
        let value = match parse_decimal(text) {
            Err(DomainError::OutOfRange(_)) | Err(DomainError::LiteralTooLong { .. }) => {
                return Err(DomainError::UnsupportedBase(text.to_string()))
            }
            other => other?,
        };
        if value < 2 {
            return Err(DomainError::BaseTooSmall(value));
        }
        Ok(value)
    }

    pub fn new(value: i64) -> DomainResult<Self> {
        match value {
            i64::MIN..=1 => Err(DomainError::BaseTooSmall(value)),
            2..=10 | 16 => Ok(Base(value as u32)),
            _ => Err(DomainError::UnsupportedBase(value.to_string())),
        }
    }

    /// Parse and fully validate a base argument in one step.
    pub fn from_arg(text: &str) -> DomainResult<Self> {
        Self::new(Self::parse_arg(text)?)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn is_hex(&self) -> bool {
        self.0 == 16
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_bounds() {
        assert_eq!(Base::new(2), Ok(Base::BINARY));
        assert_eq!(Base::new(16), Ok(Base::HEX));
        assert_eq!(Base::new(1), Err(DomainError::BaseTooSmall(1)));
        assert_eq!(
            Base::new(12),
            Err(DomainError::UnsupportedBase("12".into()))
        );
    }

    #[test]
    fn test_empty_base_arg_is_too_small() {
        assert_eq!(Base::from_arg(""), Err(DomainError::BaseTooSmall(0)));
    }

    #[test]
    fn test_base_arg_too_large_is_unsupported() {
        assert_eq!(
            Base::from_arg("99999999999999999999"),
            Err(DomainError::UnsupportedBase("99999999999999999999".into()))
        );
    }
}
