//! Command execution

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::Converter;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;

/// Hint printed when the two positional arguments are missing.
pub const USAGE_HINT: &str = "radixconv <INPUT> <BASE>: two arguments needed (input, base)";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?.merge_with(&cli.overrides());
    debug!("settings: {:?}", settings);

    if cli.show_config {
        output::info(settings.to_toml()?.trim_end());
        return Ok(());
    }

    match (cli.input.as_deref(), cli.base.as_deref()) {
        (Some(input), Some(base)) => cmd_convert(&Converter::new(settings), input, base),
        _ => Err(CliError::Usage(USAGE_HINT.to_string())),
    }
}

#[instrument(skip(converter))]
fn cmd_convert(converter: &Converter, input: &str, base: &str) -> CliResult<()> {
    let conversion = converter.convert(input, base)?;
    output::info(&conversion.text);
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
