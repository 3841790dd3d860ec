//! Invoicegen CLI entry point.
//!
//! Parses arguments, loads configuration, installs logging, dispatches to
//! the command handler, and maps errors to exit codes.

use invoicegen::cli::Cli;
use invoicegen::config::Config;
use invoicegen::error::{GenError, Result};
use invoicegen::{commands, exit_codes, logging};
use std::process::ExitCode;

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        GenError::UserError(format!("failed to determine working directory: {}", e))
    })?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    logging::init(cli.verbose, &config.log_filter);

    commands::dispatch(cli.command, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
