//! Output formatting

use serde::{Deserialize, Serialize};

use crate::domain::{Base, DigitBuffer};

/// How negative values are shown in base 16.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexSign {
    /// `-0x1` for minus one.
    #[default]
    Signed,
    /// `0x1` for minus one: only the magnitude is shown.
    Magnitude,
}

/// Render the buffer as one line of output, without the newline.
pub fn render(buf: &DigitBuffer, base: Base, hex_sign: HexSign) -> String {
    let mut out = String::with_capacity(buf.len() + 3);
    if base.is_hex() {
        if buf.is_negative() && hex_sign == HexSign::Signed {
            out.push('-');
        }
        out.push_str("0x");
    } else if buf.is_negative() {
        out.push('-');
    }
    out.extend(buf.most_significant_first());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::encode;

    #[test]
    fn test_render_hex_sign_styles() {
        let buf = encode(-255, Base::HEX);
        assert_eq!(render(&buf, Base::HEX, HexSign::Signed), "-0xff");
        assert_eq!(render(&buf, Base::HEX, HexSign::Magnitude), "0xff");
    }

    #[test]
    fn test_render_negative_decimal() {
        let buf = encode(-42, Base::DECIMAL);
        assert_eq!(render(&buf, Base::DECIMAL, HexSign::Magnitude), "-42");
    }

    #[test]
    fn test_render_zero_hex() {
        let buf = encode(0, Base::HEX);
        assert_eq!(render(&buf, Base::HEX, HexSign::Signed), "0x0");
    }
}
