//! Cosine similarity scoring and document ranking.

use std::cmp::Ordering;

use crate::ModelError;

/// Computes the cosine similarity between two vectors.
///
/// Returns `dot(a, b) / (‖a‖ × ‖b‖)`. TF-IDF weights are non-negative, so
/// the realizable range is [0, 1]. If either vector has zero magnitude the
/// score is defined as 0 — this covers empty documents and queries with no
/// recognized terms, and never produces NaN.
///
/// Vectors of differing lengths report
/// [`ModelError::DimensionMismatch`]; with vectors produced by one fitted
/// snapshot this cannot happen.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ModelError> {
    if a.len() != b.len() {
        return Err(ModelError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for (&left, &right) in a.iter().zip(b) {
        dot += left * right;
        norm_a += left * left;
        norm_b += right * right;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Scores every document vector against the query and sorts best-first.
///
/// Documents are scored in input order, then sorted descending by score
/// with a stable sort: equal scores keep their original relative order.
/// Returns `(original index, score)` pairs covering every document, so
/// callers can take the top result or display the full ranking.
pub fn rank(query: &[f32], documents: &[Vec<f32>]) -> Result<Vec<(usize, f32)>, ModelError> {
    let mut scored = Vec::with_capacity(documents.len());
    for (index, vector) in documents.iter().enumerate() {
        scored.push((index, cosine_similarity(query, vector)?));
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    Ok(scored)
}
