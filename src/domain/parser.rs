//! Per-radix literal parsers
//!
//! Every parser returns an `i64`. Decimal literals are magnitudes and must fit
//! in `i64`; hexadecimal and binary literals are 64-bit patterns read as two's
//! complement, so a set top bit yields a negative value.

use tracing::{debug, instrument};

use crate::domain::{DomainError, DomainResult, Literal, Radix};

/// Maximum number of decimal characters.
pub const MAX_DECIMAL_DIGITS: usize = 64;
/// Maximum number of hex digits after an optional `0x` prefix.
pub const MAX_HEX_DIGITS: usize = 16;
/// Maximum number of bits, not counting the trailing marker.
pub const MAX_BINARY_DIGITS: usize = 64;

/// Treatment of the trailing `b`/`B` on binary literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BinaryMarker {
    /// Reject binary literals that do not end in `b`/`B`.
    #[default]
    Required,
    /// Strip the marker when present, otherwise read every character as a bit.
    Optional,
}

/// Parse `literal` with the parser its classification selects.
///
/// Classification only yields [`Radix::Binary`] for literals ending in the
/// marker, so the binary parser always runs with [`BinaryMarker::Required`].
#[instrument(level = "debug", skip(literal), fields(literal = %literal))]
pub fn parse(literal: &Literal) -> DomainResult<(Radix, i64)> {
    let radix = literal.radix();
    debug!("classified as {}", radix);
    let value = match radix {
        Radix::Decimal => parse_decimal(literal.as_str())?,
        Radix::Hexadecimal => parse_hex(literal.as_str())?,
        Radix::Binary => parse_binary(literal.as_str(), BinaryMarker::Required)?,
    };
    Ok((radix, value))
}

/// Parse an unsigned decimal literal such as `"8192"`.
///
/// A sign is not accepted: `"-5"` is not a number.
pub fn parse_decimal(text: &str) -> DomainResult<i64> {
    let digits = check_digits(text, text, Radix::Decimal, MAX_DECIMAL_DIGITS)?;

    digits.chars().try_fold(0i64, |acc, c| {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| DomainError::nan(text, Radix::Decimal))?;
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit)))
            .ok_or_else(|| DomainError::OutOfRange(text.to_string()))
    })
}

/// Parse a hexadecimal literal, with or without `0x` prefix, any letter case.
pub fn parse_hex(text: &str) -> DomainResult<i64> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    let digits = check_digits(text, digits, Radix::Hexadecimal, MAX_HEX_DIGITS)?;

    let bits = digits.chars().try_fold(0u64, |acc, c| {
        c.to_digit(16)
            .map(|d| (acc << 4) | u64::from(d))
            .ok_or_else(|| DomainError::nan(text, Radix::Hexadecimal))
    })?;
    Ok(bits as i64)
}

/// Parse a binary literal such as `"101b"`.
pub fn parse_binary(text: &str, marker: BinaryMarker) -> DomainResult<i64> {
    let stripped = text
        .strip_suffix('b')
        .or_else(|| text.strip_suffix('B'));
    let digits = match (stripped, marker) {
        (Some(digits), _) => digits,
        (None, BinaryMarker::Optional) => text,
        (None, BinaryMarker::Required) => {
            return Err(DomainError::MissingBinaryMarker(text.to_string()))
        }
    };
    let digits = check_digits(text, digits, Radix::Binary, MAX_BINARY_DIGITS)?;

    let bits = digits.chars().try_fold(0u64, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        _ => Err(DomainError::nan(text, Radix::Binary)),
    })?;
    Ok(bits as i64)
}

/// Reject digit strings that are empty or longer than `max` characters.
fn check_digits<'a>(
    text: &str,
    digits: &'a str,
    radix: Radix,
    max: usize,
) -> DomainResult<&'a str> {
    let len = digits.chars().count();
    if len == 0 {
        return Err(DomainError::nan(text, radix));
    }
    if len > max {
        return Err(DomainError::LiteralTooLong { radix, max, len });
    }
    Ok(digits)
}
