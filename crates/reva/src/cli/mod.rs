//! CLI support for the `reva` binary.

pub mod args;
pub mod commands;
pub mod output;
pub mod style;

use std::process::ExitCode;

use clap::Parser;

/// Parses arguments and dispatches to the selected command.
pub fn run() -> ExitCode {
    let cli = args::Cli::parse();
    commands::run(cli.command)
}
