//! Shared helpers for command implementations.

use std::{path::PathBuf, process::ExitCode};

use reva_core::{Document, FittedModel};
use reva_document::load_documents;

/// Loads every file and fits a model over the collection.
///
/// Prints `error:` to stderr and returns a failure exit code when a file
/// cannot be read or the fit is rejected. Empty documents load fine but get
/// a `warning:` naming them, since they can never match a query.
pub fn load_and_fit(files: &[PathBuf]) -> Result<(Vec<Document>, FittedModel), ExitCode> {
    let documents = match load_documents(files) {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!("error: {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    for doc in &documents {
        if doc.text.trim().is_empty() {
            eprintln!("warning: document is empty: {}", doc.name);
        }
    }

    let model = match FittedModel::fit(&documents) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("error: {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    Ok((documents, model))
}
