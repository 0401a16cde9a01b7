//! Implementation of `reva inspect`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use super::shared::load_and_fit;
use crate::cli::{
    args::{DEFAULT_TERM_LIMIT, InspectCommand},
    style::{dim, header, subheader},
};

/// Fits the corpus and prints vocabulary statistics and top terms.
pub fn run(cmd: &InspectCommand) -> ExitCode {
    let (_documents, model) = match load_and_fit(&cmd.files) {
        Ok(pair) => pair,
        Err(code) => return code,
    };

    let terms = cmd.terms.unwrap_or(DEFAULT_TERM_LIMIT);

    println!("{}", header("Corpus"));
    println!("  Documents:        {}", model.num_documents());
    println!("  Vocabulary terms: {}", model.vocabulary().len());
    println!();

    for (index, name) in model.names().iter().enumerate() {
        println!("{}", subheader(name));

        let Some(top) = model.top_terms(index, terms) else {
            continue;
        };
        if top.is_empty() {
            println!("  {}", dim("(no terms)"));
            println!();
            continue;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_header(vec!["Term", "Weight"]);
        for term in &top {
            table.add_row(vec![
                Cell::new(&term.term),
                Cell::new(format!("{:.4}", term.weight)),
            ]);
        }
        println!("{table}");
        println!();
    }

    ExitCode::SUCCESS
}
