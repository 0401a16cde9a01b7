//! Command implementations and dispatch.

pub mod ask;
pub mod inspect;
pub mod search;
mod shared;

use std::process::ExitCode;

use super::args::Commands;

/// Dispatches to the selected subcommand.
pub fn run(command: Commands) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(&cmd),
        Commands::Ask(cmd) => ask::run(&cmd),
        Commands::Inspect(cmd) => inspect::run(&cmd),
    }
}
