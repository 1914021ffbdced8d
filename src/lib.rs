//! Interactive document-similarity search over a directory of files.
//!
//! A [`DocumentStore`] locks every file for the session, a [`QueryEngine`]
//! ranks them against free-text queries with a Jaccard index, and a
//! [`Session`](session::Session) drives both from an input stream.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod search;
pub mod session;
pub mod store;
pub mod tracing;

pub use config::SearchConfig;
pub use error::{BuildError, CloseError, InvalidQuery, OpenError, QueryError, ReadError};
pub use search::{
    JaccardScorer, NormalizedText, QueryEngine, QueryResult, Score, ScoredMatch, Scorer, normalize,
};
pub use store::{DocumentHandle, DocumentStore, TeardownReport};
