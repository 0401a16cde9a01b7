//! Error types for fitting and ranking.

use thiserror::Error;

/// Errors reported by the vectorizer and ranker.
///
/// All of these are deterministic pure-computation failures: retrying with
/// the same input never helps, so they are returned synchronously to the
/// immediate caller.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Fit was called with zero documents.
    #[error("cannot fit an empty document collection")]
    EmptyCollection,

    /// Two documents in one fit call share a name.
    #[error("duplicate document name: {name}")]
    DuplicateName {
        /// The name that was supplied more than once.
        name: String,
    },

    /// A query was made before any successful fit.
    #[error("no fitted model: load documents first")]
    NotFitted,

    /// Two vectors of different dimensionality were compared.
    #[error("vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimensionality of the left operand.
        left: usize,
        /// Dimensionality of the right operand.
        right: usize,
    },
}
