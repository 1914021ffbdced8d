//! Text normalization applied to both queries and document content.

use ahash::AHashSet;
use std::fmt;

/// Text reduced to lowercase ASCII alphanumerics and spaces.
///
/// Every character outside `[A-Za-z0-9]` in the source becomes exactly one
/// space; runs of separators are not collapsed. The only way to build one is
/// [`normalize`], so two `NormalizedText` values are always comparable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits on single spaces into a token set.
    ///
    /// Consecutive spaces produce empty tokens. With `keep_empty` they are
    /// kept as one distinct `""` member of the set, otherwise they are dropped.
    pub fn token_set(&self, keep_empty: bool) -> AHashSet<&str> {
        self.0
            .split(' ')
            .filter(|token| keep_empty || !token.is_empty())
            .collect()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Maps every non-alphanumeric character to a space and lowercases the rest.
pub fn normalize(raw: &str) -> NormalizedText {
    NormalizedText(
        raw.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    ' '
                }
            })
            .collect(),
    )
}
