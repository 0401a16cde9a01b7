//! Rendering and JSON serialization for query results.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use reva_core::QueryMatch;
use serde::Serialize;

use crate::cli::style::{dim, rule, subheader};

/// Maximum characters shown by a document preview.
const PREVIEW_CHARS: usize = 500;

/// JSON output for `reva search --json`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The original query string.
    query: &'a str,
    /// Ranked matches, best first, capped at the display limit.
    matches: &'a [QueryMatch],
    /// Total documents ranked, before the display limit.
    total: usize,
}

/// Serializes the ranking as pretty JSON.
pub fn print_json(query: &str, matches: &[QueryMatch], limit: usize) -> ExitCode {
    let output = JsonSearchOutput {
        query,
        matches: &matches[..limit.min(matches.len())],
        total: matches.len(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the ranking as a best-match callout and a score table.
///
/// In list mode each match is one `score<TAB>name` line instead, for
/// scripting.
pub fn print_ranking(matches: &[QueryMatch], limit: usize, list: bool) {
    if list {
        for m in matches.iter().take(limit) {
            println!("{:.4}\t{}", m.score, m.name);
        }
        return;
    }

    let Some(best) = matches.first() else {
        println!("{}", dim("No documents ranked."));
        return;
    };

    println!("{} {}", subheader("Most relevant:"), best.name);
    println!("{} {:.4}", subheader("Score:"), best.score);
    if best.score == 0.0 {
        println!("{}", dim("(no query terms matched the corpus)"));
    }
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["#", "Document", "Score"]);
    for (position, m) in matches.iter().take(limit).enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(&m.name),
            Cell::new(format!("{:.4}", m.score)),
        ]);
    }
    println!("{table}");

    if matches.len() > limit {
        let hidden = matches.len() - limit;
        println!("{}", dim(&format!("({hidden} more not shown)")));
    }
}

/// Prints the opening of a document between rules.
pub fn print_preview(name: &str, text: &str) {
    println!("{}", subheader(&format!("Preview: {name}")));
    println!("{}", rule(60));

    let mut chars = text.chars();
    let preview: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    let truncated = chars.next().is_some();

    print!("{preview}");
    if truncated {
        println!("...");
    } else if !preview.ends_with('\n') {
        println!();
    }

    println!("{}", rule(60));
}
