//! Error types for document loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a file as UTF-8 text.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O or decode error.
        source: io::Error,
    },
}
