//! Input literals and radix classification

use std::fmt;

use tracing::instrument;

use crate::domain::{DomainError, DomainResult};

/// Longest literal accepted on the command line.
pub const MAX_LITERAL_LEN: usize = 128;

/// Number of leading characters scanned for hex letters.
const HEX_SCAN_LEN: usize = 16;

/// Source radix guessed from the shape of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Hexadecimal,
    Binary,
}

impl Radix {
    pub fn name(&self) -> &'static str {
        match self {
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
            Radix::Binary => "binary",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw numeric literal as given by the caller.
///
/// Construction only checks that the text is non-empty and within
/// [`MAX_LITERAL_LEN`]; radix-specific checks happen in the parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(String);

impl Literal {
    pub fn new(text: &str) -> DomainResult<Self> {
        let len = text.chars().count();
        if len == 0 {
            return Err(DomainError::nan(text, Radix::Decimal));
        }
        if len > MAX_LITERAL_LEN {
            return Err(DomainError::LiteralTooLong {
                radix: classify(text),
                max: MAX_LITERAL_LEN,
                len,
            });
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn radix(&self) -> Radix {
        classify(&self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Guess the radix of `literal`.
///
/// Rules are applied in order, first match wins:
/// 1. `0x` prefix: hexadecimal
/// 2. trailing `b` or `B`: binary
/// 3. any of the first 16 characters in `a-f` (any case): hexadecimal
/// 4. decimal
///
/// This is a heuristic only. `"10"` is valid in every radix and is
/// always read as decimal; well-formedness is left to the parsers.
#[instrument(level = "trace")]
pub fn classify(literal: &str) -> Radix {
    if literal.starts_with("0x") {
        return Radix::Hexadecimal;
    }
    if literal
        .chars()
        .last()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'b'))
    {
        return Radix::Binary;
    }
    if literal
        .chars()
        .take(HEX_SCAN_LEN)
        .any(|c| matches!(c.to_ascii_lowercase(), 'a'..='f'))
    {
        return Radix::Hexadecimal;
    }
    Radix::Decimal
}
