//! radixconv: convert decimal, hexadecimal and binary literals to bases 2-10 and 16
//!
//! Architecture:
//! - `domain`: classification, parsing, encoding and formatting (pure)
//! - `application`: the conversion use case
//! - `config`: layered settings
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
