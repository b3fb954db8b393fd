//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::Radix;

/// Domain errors represent malformed literals and unusable bases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("NaN: '{literal}' is not a valid {radix} literal")]
    NotANumber { literal: String, radix: Radix },

    #[error("{radix} literal too long: {len} characters, at most {max} allowed")]
    LiteralTooLong { radix: Radix, max: usize, len: usize },

    #[error("binary literal without trailing 'b' marker: {0}")]
    MissingBinaryMarker(String),

    #[error("value out of 64-bit range: {0}")]
    OutOfRange(String),

    /// Reported without a diagnostic, only the exit status signals it.
    #[error("base {0} is below 2")]
    BaseTooSmall(i64),

    #[error("unsupported numeric base {0}, symbols are not defined for it")]
    UnsupportedBase(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub(crate) fn nan(literal: &str, radix: Radix) -> Self {
        DomainError::NotANumber {
            literal: literal.to_string(),
            radix,
        }
    }
}
