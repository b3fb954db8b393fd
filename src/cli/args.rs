//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use crate::config::RawSettings;
use crate::domain::HexSign;

/// Convert decimal, hexadecimal and binary literals to bases 2-10 and 16
///
/// Short flags avoid the letters a-f, b and x so that a literal such as
/// `-1a` reaches the parser instead of being read as flags.
#[derive(Parser, Debug)]
#[command(name = "radixconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Numeric literal: decimal (255), hex (0xff, 1a2f) or binary (1010b)
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Output base: 2 to 10, or 16
    #[arg(allow_hyphen_values = true)]
    pub base: Option<String>,

    /// Verbose output on stderr (repeat for more: -v -v -v)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Settings file (TOML)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Sign convention for negative base-16 output
    #[arg(long, value_enum)]
    pub hex_sign: Option<HexSignArg>,

    /// Print effective settings and exit
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

/// Command line spelling of [`HexSign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HexSignArg {
    /// -0x1 for minus one
    Signed,
    /// 0x1 for minus one
    Magnitude,
}

impl From<HexSignArg> for HexSign {
    fn from(arg: HexSignArg) -> Self {
        match arg {
            HexSignArg::Signed => HexSign::Signed,
            HexSignArg::Magnitude => HexSign::Magnitude,
        }
    }
}

impl Cli {
    /// Settings given on the command line, highest precedence.
    pub fn overrides(&self) -> RawSettings {
        RawSettings {
            hex_sign: self.hex_sign.map(HexSign::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_hyphen_literals_are_positional() {
        for literal in ["-5", "-1a", "-ff", "-0x1", "-101b"] {
            let cli = Cli::parse_from(["radixconv", literal, "10"]);
            assert_eq!(cli.input.as_deref(), Some(literal));
            assert_eq!(cli.base.as_deref(), Some("10"));
        }
    }

    #[test]
    fn test_flags_still_parse_around_positionals() {
        let cli = Cli::parse_from(["radixconv", "-vv", "255", "16", "--hex-sign", "magnitude"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.input.as_deref(), Some("255"));
        assert_eq!(
            cli.overrides(),
            RawSettings {
                hex_sign: Some(HexSign::Magnitude),
            }
        );
    }
}
