//! Entry point for the `reva` binary.

use std::process::ExitCode;

use reva::cli;

fn main() -> ExitCode {
    cli::run()
}
