//! Digit encoder: integer to output-base symbols

use tracing::trace;

use crate::domain::Base;

const SYMBOLS: &[u8; 16] = b"0123456789abcdef";

/// Digit symbols of a value in some base, least-significant first.
///
/// The sign is kept as a flag next to the digits and is never one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuffer {
    digits: Vec<u8>,
    negative: bool,
}

impl DigitBuffer {
    /// Number of digits, not counting the sign.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Symbols in storage order, least-significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Symbols most-significant first, ready for printing.
    pub fn most_significant_first(&self) -> impl Iterator<Item = char> + '_ {
        self.digits.iter().rev().map(|&d| char::from(d))
    }
}

/// Encode `n` in `base` by repeated division of its magnitude.
///
/// Zero yields a single `0` digit.
pub fn encode(n: i64, base: Base) -> DigitBuffer {
    let radix = u64::from(base.get());
    let mut quot = n.unsigned_abs();
    let mut digits = Vec::with_capacity(64);

    loop {
        digits.push(SYMBOLS[(quot % radix) as usize]);
        quot /= radix;
        if quot == 0 {
            break;
        }
    }
    trace!(n, base = base.get(), count = digits.len(), "encoded");

    DigitBuffer {
        digits,
        negative: n < 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_has_one_digit() {
        let buf = encode(0, Base::BINARY);
        assert_eq!(buf.digits(), b"0");
        assert!(!buf.is_negative());
    }

    #[test]
    fn test_encode_is_least_significant_first() {
        let buf = encode(6, Base::BINARY);
        assert_eq!(buf.digits(), b"011");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_encode_min_value() {
        let buf = encode(i64::MIN, Base::HEX);
        let text: String = buf.most_significant_first().collect();
        assert_eq!(text, "8000000000000000");
        assert!(buf.is_negative());
    }

    #[test]
    fn test_encode_hex_symbols() {
        let buf = encode(0xaf, Base::HEX);
        assert_eq!(buf.digits(), b"fa");
    }
}
