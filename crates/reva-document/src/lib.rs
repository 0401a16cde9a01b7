//! Document loading for reva.
//!
//! Reads UTF-8 text files into named [`Document`]s ready for fitting. Each
//! document is named by its file name, so two paths sharing a file name
//! collide — the model reports that as a duplicate at fit time. Empty files
//! load successfully; the core treats zero-token documents as valid.

#![warn(missing_docs)]

mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use error::LoadError;
use reva_core::Document;

/// Reads a single file into a document named by its file name.
///
/// The file must be valid UTF-8; decode failures surface as
/// [`LoadError::ReadFile`] like any other read failure.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Document::new(name, text))
}

/// Reads every path into a document, in input order.
///
/// Fails on the first unreadable file, before any fitting happens.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<Document>, LoadError> {
    paths.iter().map(|path| load_document(path)).collect()
}
