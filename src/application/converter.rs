//! Conversion service
//!
//! Runs a literal through classification, parsing, base validation,
//! encoding and formatting.

use tracing::{debug, info, instrument};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{encode, parse, render, Base, Literal, Radix};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Radix the input literal was classified as
    pub radix: Radix,
    /// Parsed input value
    pub value: i64,
    /// Output base
    pub base: Base,
    /// Rendered output, without trailing newline
    pub text: String,
}

/// Service converting literals between bases.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    settings: Settings,
}

impl Converter {
    /// Create a new converter with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Convert `literal` to the base named by `base_arg`.
    ///
    /// Checks run in a fixed order: the base argument must be a number of
    /// at least 2, then the literal must parse, then the base must have
    /// symbols defined. An invalid literal is therefore reported before an
    /// unsupported base.
    #[instrument(level = "debug", skip(self))]
    pub fn convert(&self, literal: &str, base_arg: &str) -> ApplicationResult<Conversion> {
        let requested = Base::parse_arg(base_arg)?;

        let literal = Literal::new(literal)?;
        let (radix, value) = parse(&literal)?;
        debug!("parsed {} literal {} as {}", radix, literal, value);

        let base = Base::new(requested)?;
        let digits = encode(value, base);
        let text = render(&digits, base, self.settings.hex_sign);
        info!("{} -> {} (base {})", literal, text, base);

        Ok(Conversion {
            radix,
            value,
            base,
            text,
        })
    }
}
