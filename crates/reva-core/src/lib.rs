//! TF-IDF vectorization and cosine similarity ranking.
//!
//! This crate finds the documents in a small corpus most relevant to a
//! free-text query without any learned model or external service. Fitting a
//! collection of named documents produces a [`FittedModel`]: a vocabulary,
//! smoothed IDF weights, and one dense TF-IDF vector per document, held
//! together as a single immutable snapshot. Queries are transformed into
//! vectors over the same vocabulary and ranked against every document by
//! cosine similarity.
//!
//! The snapshot is never mutated after construction. Re-fitting builds a
//! fresh snapshot, so readers can share a `FittedModel` freely across
//! threads while a replacement is prepared. [`Retriever`] wraps the
//! fit-then-query lifecycle for callers that want a single long-lived
//! handle.

#![warn(missing_docs)]

mod error;
mod model;
mod rank;
mod retriever;
mod token;

pub use error::ModelError;
pub use model::{FittedModel, QueryMatch, TermWeight};
pub use rank::{cosine_similarity, rank};
pub use retriever::Retriever;
pub use token::tokenize;

/// A named document supplied to [`FittedModel::fit`].
///
/// Names must be unique within one fitted collection; the text is raw and
/// untokenized. Documents are immutable once loaded — a new collection
/// replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Unique name within one fitted collection.
    pub name: String,
    /// Raw text content.
    pub text: String,
}

impl Document {
    /// Creates a document from a name and raw text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
