//! reva: relevance assistant
//!
//! A small retrieval tool that finds the documents in a corpus most relevant
//! to a free-text query. Documents are loaded from plain text files,
//! vectorized with TF-IDF weighting, and ranked by cosine similarity — no
//! learned model, no external service, no on-disk index. The corpus is
//! fitted fresh on every invocation and queried one or many times.

#![warn(missing_docs)]

pub mod cli;
