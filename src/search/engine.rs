//! Query orchestration across every document in a store.

use super::normalize::{NormalizedText, normalize};
use super::scoring::{JaccardScorer, Score, Scorer};
use crate::config::SearchConfig;
use crate::error::{InvalidQuery, QueryError};
use crate::store::{DocumentHandle, DocumentStore};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Default number of matches returned per query.
pub const DEFAULT_LIMIT: usize = 10;

/// One document's score against a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMatch {
    pub label: String,
    pub score: Score,
}

/// Matches ordered by descending score, ties kept in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    matches: Vec<ScoredMatch>,
}

impl QueryResult {
    pub fn matches(&self) -> &[ScoredMatch] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMatch> {
        self.matches.iter()
    }

    /// The highest scoring match, if any document was scored.
    pub fn best(&self) -> Option<&ScoredMatch> {
        self.matches.first()
    }
}

impl IntoIterator for QueryResult {
    type Item = ScoredMatch;
    type IntoIter = std::vec::IntoIter<ScoredMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a ScoredMatch;
    type IntoIter = std::slice::Iter<'a, ScoredMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Runs queries against a [`DocumentStore`].
///
/// Each query re-reads every document from the start; nothing is cached
/// between queries, so a result always reflects the locked file contents.
#[derive(Debug, Clone)]
pub struct QueryEngine<S = JaccardScorer> {
    scorer: S,
    limit: usize,
    parallel: bool,
}

impl Default for QueryEngine<JaccardScorer> {
    fn default() -> Self {
        Self::new(JaccardScorer::default())
    }
}

impl QueryEngine<JaccardScorer> {
    /// Builds a Jaccard engine from configuration.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(JaccardScorer::new(config.keep_empty_tokens))
            .with_limit(config.limit)
            .with_parallel(config.parallel)
    }
}

impl<S: Scorer> QueryEngine<S> {
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            limit: DEFAULT_LIMIT,
            parallel: false,
        }
    }

    /// Caps the number of matches per query. A limit of 0 is raised to 1.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Scores documents on the rayon pool instead of sequentially.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Scores `raw_query` against every document and returns the top matches.
    ///
    /// Fails without partial results if any document cannot be read. A
    /// whitespace-only query is rejected before any document is touched.
    pub fn query(
        &self,
        raw_query: &str,
        store: &mut DocumentStore,
    ) -> Result<QueryResult, QueryError> {
        if raw_query.trim().is_empty() {
            return Err(InvalidQuery::Empty.into());
        }

        let start = Instant::now();
        let query = normalize(raw_query);

        let mut matches = if self.parallel {
            store
                .documents_mut()
                .par_iter_mut()
                .map(|document| self.score_document(&query, document))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            store
                .documents_mut()
                .iter_mut()
                .map(|document| self.score_document(&query, document))
                .collect::<Result<Vec<_>, _>>()?
        };

        let scored = matches.len();
        // stable: equal scores keep store order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.limit);

        tracing::debug!(
            "Scored {} documents (limit {}, parallel {}) in {:?}",
            scored,
            self.limit,
            self.parallel,
            start.elapsed()
        );

        Ok(QueryResult { matches })
    }

    fn score_document(
        &self,
        query: &NormalizedText,
        document: &mut DocumentHandle,
    ) -> Result<ScoredMatch, QueryError> {
        let content = document
            .reset_to_start()
            .and_then(|()| document.read_all())
            .map_err(|source| QueryError::Read {
                label: document.label().to_string(),
                source,
            })?;

        Ok(ScoredMatch {
            label: document.label().to_string(),
            score: self.scorer.score(query, &normalize(&content)),
        })
    }
}
