//! Implementation of `reva search`.

use std::process::ExitCode;

use super::shared::load_and_fit;
use crate::cli::{
    args::{DEFAULT_RESULT_LIMIT, SearchCommand},
    output,
};

/// Ranks the given documents against the query and prints the results.
pub fn run(cmd: &SearchCommand) -> ExitCode {
    let (documents, model) = match load_and_fit(&cmd.files) {
        Ok(pair) => pair,
        Err(code) => return code,
    };

    let matches = match model.query(&cmd.query) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("error: query failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let limit = cmd.limit.unwrap_or(DEFAULT_RESULT_LIMIT);

    if cmd.output.json {
        return output::print_json(&cmd.query, &matches, limit);
    }

    output::print_ranking(&matches, limit, cmd.output.list);

    if cmd.preview
        && !cmd.output.list
        && let Some(best) = matches.first()
        && best.score > 0.0
        && let Some(doc) = documents.iter().find(|d| d.name == best.name)
    {
        println!();
        output::print_preview(&doc.name, &doc.text);
    }

    ExitCode::SUCCESS
}
