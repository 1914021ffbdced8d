//! Similarity search over the documents of a store.
//!
//! This module provides normalization, Jaccard scoring and the query engine
//! that ranks every document against a free-text query.

pub mod engine;
pub mod normalize;
pub mod scoring;

pub use engine::{DEFAULT_LIMIT, QueryEngine, QueryResult, ScoredMatch};
pub use normalize::{NormalizedText, normalize};
pub use scoring::{JaccardScorer, Score, Scorer};
