//! Similarity scoring between a normalized query and a normalized document.

use super::normalize::NormalizedText;
use serde::Serialize;
use std::fmt;

/// An integer similarity score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Integer percentage of `part` over `whole`, truncating.
    ///
    /// A zero `whole` yields [`Score::MIN`] instead of dividing by zero.
    pub fn ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::MIN;
        }
        let percent = (100 * part.min(whole)) / whole;
        // part <= whole, so percent <= 100
        u8::try_from(percent).map_or(Self::MAX, Self)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A ranking algorithm comparing a query against one document.
///
/// Both sides must have gone through [`normalize`](super::normalize::normalize) for the
/// result to be meaningful.
pub trait Scorer: Send + Sync {
    fn score(&self, query: &NormalizedText, document: &NormalizedText) -> Score;
}

/// Jaccard index over the space-separated token sets of both texts.
///
/// Score is `floor(100 * |A ∩ B| / |A ∪ B|)`. Splitting on single spaces turns
/// runs of separators into an empty token; `keep_empty_tokens` decides whether
/// that token takes part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JaccardScorer {
    pub keep_empty_tokens: bool,
}

impl Default for JaccardScorer {
    fn default() -> Self {
        Self {
            keep_empty_tokens: true,
        }
    }
}

impl JaccardScorer {
    pub const fn new(keep_empty_tokens: bool) -> Self {
        Self { keep_empty_tokens }
    }
}

impl Scorer for JaccardScorer {
    fn score(&self, query: &NormalizedText, document: &NormalizedText) -> Score {
        let query_tokens = query.token_set(self.keep_empty_tokens);
        let document_tokens = document.token_set(self.keep_empty_tokens);

        let intersection = query_tokens.intersection(&document_tokens).count();
        let union = query_tokens.len() + document_tokens.len() - intersection;

        Score::ratio(intersection, union)
    }
}
