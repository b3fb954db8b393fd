//! Domain layer: literals, parsing, encoding and formatting
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod base;
pub mod encoder;
pub mod error;
pub mod format;
pub mod literal;
pub mod parser;

pub use base::Base;
pub use encoder::{encode, DigitBuffer};
pub use error::{DomainError, DomainResult};
pub use format::{render, HexSign};
pub use literal::{classify, Literal, Radix};
pub use parser::{parse, parse_binary, parse_decimal, parse_hex, BinaryMarker};
