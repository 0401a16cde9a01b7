//! TF-IDF model fitting and query transformation.
//!
//! [`FittedModel::fit`] builds the vocabulary, IDF weights, and document
//! vectors for a collection in one pass and returns them as an immutable
//! snapshot. [`FittedModel::transform`] projects query text onto the same
//! vocabulary, and [`FittedModel::query`] composes transform with ranking.

use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap, HashSet},
};

use serde::Serialize;

use crate::{Document, ModelError, rank::rank, token::tokenize};

/// Immutable fitted state: vocabulary, IDF weights, and document vectors.
///
/// All fields are private and only read accessors are exposed, so a snapshot
/// can be shared across concurrent readers without locking. Re-fitting
/// produces a fresh snapshot rather than mutating this one.
#[derive(Debug, Clone)]
pub struct FittedModel {
    /// Vocabulary terms in lexicographic order; term `i` owns dimension `i`.
    vocabulary: Vec<String>,
    /// Term to vector-dimension lookup.
    term_index: HashMap<String, usize>,
    /// Smoothed IDF weight per vocabulary term.
    idf: Vec<f32>,
    /// One TF-IDF vector per document, in input order.
    vectors: Vec<Vec<f32>>,
    /// Document names, in input order.
    names: Vec<String>,
}

/// A ranked query result: document name and cosine similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct QueryMatch {
    /// Name of the matched document.
    pub name: String,
    /// Cosine similarity between the query and the document, in [0, 1].
    pub score: f32,
}

/// A vocabulary term with its TF-IDF weight in one document.
#[derive(Debug, Clone)]
pub struct TermWeight {
    /// The vocabulary term.
    pub term: String,
    /// TF-IDF weight of the term in the document.
    pub weight: f32,
}

impl FittedModel {
    /// Fits a model over a document collection.
    ///
    /// The vocabulary is the lexicographically sorted union of all tokens,
    /// so repeated fits on unchanged input are bit-identical. For each term
    /// the IDF is the smoothed `ln((1 + N) / (1 + DF)) + 1`, and each
    /// document vector entry is `TF × IDF` where TF is the term's share of
    /// the document's tokens. A document with zero tokens gets an all-zero
    /// vector.
    ///
    /// Fit is all-or-nothing: on error no snapshot is produced, leaving any
    /// previously fitted state with the caller untouched.
    pub fn fit(documents: &[Document]) -> Result<Self, ModelError> {
        if documents.is_empty() {
            return Err(ModelError::EmptyCollection);
        }

        let mut seen = HashSet::new();
        for doc in documents {
            if !seen.insert(doc.name.as_str()) {
                return Err(ModelError::DuplicateName {
                    name: doc.name.clone(),
                });
            }
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(&doc.text).collect())
            .collect();

        let mut vocab_set = BTreeSet::new();
        for tokens in &tokenized {
            for token in tokens {
                vocab_set.insert(token.clone());
            }
        }
        let vocabulary: Vec<String> = vocab_set.into_iter().collect();

        let term_index: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(dim, term)| (term.clone(), dim))
            .collect();

        // DF counts each term at most once per document.
        let mut document_frequency = vec![0u32; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                if let Some(&dim) = term_index.get(term) {
                    document_frequency[dim] += 1;
                }
            }
        }

        let total_docs = documents.len() as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((total_docs + 1.0) / (df as f32 + 1.0)).ln() + 1.0)
            .collect();

        let vectors: Vec<Vec<f32>> = tokenized
            .iter()
            .map(|tokens| weigh(tokens, &term_index, &idf, vocabulary.len()))
            .collect();

        let names = documents.iter().map(|doc| doc.name.clone()).collect();

        Ok(Self {
            vocabulary,
            term_index,
            idf,
            vectors,
            names,
        })
    }

    /// Transforms query text into a vector over the fitted vocabulary.
    ///
    /// Tokens absent from the vocabulary are ignored; they contribute no
    /// dimension and never extend the vocabulary. A query with no known
    /// tokens yields the zero vector, which downstream scores 0 against
    /// every document.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let tokens: Vec<String> = tokenize(text).collect();
        weigh(&tokens, &self.term_index, &self.idf, self.vocabulary.len())
    }

    /// Ranks every fitted document against the query text, best first.
    ///
    /// Ties keep their original document order.
    pub fn query(&self, text: &str) -> Result<Vec<QueryMatch>, ModelError> {
        let vector = self.transform(text);
        let ranking = rank(&vector, &self.vectors)?;

        Ok(ranking
            .into_iter()
            .map(|(index, score)| QueryMatch {
                name: self.names[index].clone(),
                score,
            })
            .collect())
    }

    /// Returns the vocabulary in dimension order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Returns the number of fitted documents.
    pub fn num_documents(&self) -> usize {
        self.names.len()
    }

    /// Returns the fitted document names, in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the fitted document vectors, in input order.
    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    /// Returns the smoothed IDF weight for a term.
    ///
    /// `None` means the term is not in the vocabulary. Terms are matched
    /// exactly, so callers should pass lowercase tokens.
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_index.get(term).map(|&dim| self.idf[dim])
    }

    /// Returns a document's heaviest terms, highest TF-IDF weight first.
    ///
    /// Zero-weight terms are omitted. Equal weights are broken
    /// alphabetically so the listing is deterministic. Returns `None` when
    /// `document` is out of range.
    pub fn top_terms(&self, document: usize, limit: usize) -> Option<Vec<TermWeight>> {
        let vector = self.vectors.get(document)?;

        let mut weights: Vec<TermWeight> = vector
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight > 0.0)
            .map(|(dim, &weight)| TermWeight {
                term: self.vocabulary[dim].clone(),
                weight,
            })
            .collect();

        weights.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        weights.truncate(limit);

        Some(weights)
    }
}

/// Builds a TF-IDF vector from a token list over an existing vocabulary.
///
/// TF is each term's count divided by the total token count, including
/// tokens that fall outside the vocabulary. Zero tokens yield the zero
/// vector without dividing.
fn weigh(
    tokens: &[String],
    term_index: &HashMap<String, usize>,
    idf: &[f32],
    dimensions: usize,
) -> Vec<f32> {
    let mut vector = vec![0.0_f32; dimensions];
    if tokens.is_empty() {
        return vector;
    }

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let total = tokens.len() as f32;
    for (token, count) in counts {
        if let Some(&dim) = term_index.get(token) {
            vector[dim] = (count as f32 / total) * idf[dim];
        }
    }

    vector
}
