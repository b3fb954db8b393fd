//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print usage hint (yellow "usage:" prefix) to stdout
pub fn usage(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", "usage".yellow(), msg);
}

/// Print plain output (no color, for conversion results and data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
