//! Application layer: the conversion use case
//!
//! This layer orchestrates domain logic according to the loaded settings.

pub mod converter;
pub mod error;

pub use converter::{Conversion, Converter};
pub use error::{ApplicationError, ApplicationResult};
