//! Implementation of `reva ask`.

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use super::shared::load_and_fit;
use crate::cli::{
    args::{AskCommand, DEFAULT_RESULT_LIMIT},
    output,
    style::{dim, header},
};

/// Loads the corpus once and answers queries read from stdin.
pub fn run(cmd: &AskCommand) -> ExitCode {
    let (_documents, model) = match load_and_fit(&cmd.files) {
        Ok(pair) => pair,
        Err(code) => return code,
    };

    let limit = cmd.limit.unwrap_or(DEFAULT_RESULT_LIMIT);

    println!("{}", header("reva"));
    println!(
        "Loaded {} document(s), {} vocabulary terms.",
        model.num_documents(),
        model.vocabulary().len()
    );
    println!("{}", dim("Enter a query, or an empty line to exit."));
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("query> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let Some(line) = lines.next() else {
            // End of input.
            println!();
            break;
        };

        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: failed to read query: {e}");
                return ExitCode::FAILURE;
            }
        };

        let query = line.trim();
        if query.is_empty() {
            break;
        }

        let matches = match model.query(query) {
            Ok(matches) => matches,
            Err(e) => {
                eprintln!("error: query failed: {e}");
                return ExitCode::FAILURE;
            }
        };

        println!();
        output::print_ranking(&matches, limit, false);
        println!();
    }

    ExitCode::SUCCESS
}
