//! Two-operation retrieval interface over a fitted snapshot.

use crate::{Document, FittedModel, ModelError, model::QueryMatch};

/// Holds the current fitted snapshot and answers queries against it.
///
/// This is the external interface for embedders that want a single
/// long-lived handle: `fit` replaces the snapshot wholesale, and a failed
/// fit leaves the previous snapshot intact. `query` reports
/// [`ModelError::NotFitted`] until the first successful fit. Callers that
/// prefer threading the snapshot explicitly can use [`FittedModel`]
/// directly.
#[derive(Debug, Default)]
pub struct Retriever {
    /// Current fitted snapshot, if any.
    model: Option<FittedModel>,
}

impl Retriever {
    /// Creates a retriever with no fitted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits a fresh snapshot over the documents, replacing any prior state.
    pub fn fit(&mut self, documents: &[Document]) -> Result<(), ModelError> {
        let model = FittedModel::fit(documents)?;
        self.model = Some(model);
        Ok(())
    }

    /// Returns the current fitted snapshot, if any.
    pub fn model(&self) -> Option<&FittedModel> {
        self.model.as_ref()
    }

    /// Ranks every fitted document against the query text, best first.
    pub fn query(&self, text: &str) -> Result<Vec<QueryMatch>, ModelError> {
        let model = self.model.as_ref().ok_or(ModelError::NotFitted)?;
        model.query(text)
    }
}
