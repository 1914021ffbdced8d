//! The set of locked documents a session searches.

pub mod handle;

pub use handle::DocumentHandle;

use crate::error::{BuildError, CloseError};
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Every document of a session, in the order their paths were given.
///
/// A store either opens all of its paths or none: a failed build releases the
/// handles it already took before reporting the error.
#[derive(Debug)]
pub struct DocumentStore {
    documents: Vec<DocumentHandle>,
}

impl DocumentStore {
    /// Opens a locked handle for each path, stopping at the first failure.
    pub fn build<I, P>(paths: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<P> = paths.into_iter().collect();
        if paths.is_empty() {
            return Err(BuildError::Empty);
        }

        let start = Instant::now();
        let total = paths.len();
        let mut documents = Vec::with_capacity(total);

        for (position, path) in paths.iter().enumerate() {
            match DocumentHandle::open(path) {
                Ok(handle) => documents.push(handle),
                Err(source) => {
                    release_all(&mut documents);
                    return Err(BuildError::Open {
                        position,
                        total,
                        source,
                    });
                }
            }
        }

        tracing::info!("Opened {} documents in {:?}", total, start.elapsed());

        Ok(Self { documents })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document labels in store order.
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> {
        self.documents.iter().map(DocumentHandle::label)
    }

    pub fn documents_mut(&mut self) -> &mut [DocumentHandle] {
        &mut self.documents
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut DocumentHandle> {
        self.documents.iter_mut().find(|d| d.label() == label)
    }

    /// Closes every handle, continuing past individual failures.
    pub fn teardown(mut self) -> TeardownReport {
        let mut report = TeardownReport::default();

        for document in &mut self.documents {
            match document.close() {
                Ok(()) => report.closed += 1,
                Err(error) => {
                    tracing::warn!("Failed to close {}: {}", document.label(), error);
                    report.failures.push(CloseFailure {
                        label: document.label().to_string(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Released {} of {} documents",
            report.closed,
            self.documents.len()
        );

        report
    }
}

/// Rolls back a partial build. Failures are logged; the build error wins.
fn release_all(documents: &mut Vec<DocumentHandle>) {
    for mut document in documents.drain(..) {
        if let Err(e) = document.close() {
            tracing::warn!("Failed to release {} after build error: {}", document.label(), e);
        }
    }
}

/// A handle that could not be closed during teardown.
#[derive(Debug)]
pub struct CloseFailure {
    pub label: String,
    pub error: CloseError,
}

/// Outcome of [`DocumentStore::teardown`].
#[derive(Debug, Default)]
pub struct TeardownReport {
    pub closed: usize,
    pub failures: Vec<CloseFailure>,
}

impl TeardownReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for TeardownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "released {} documents", self.closed);
        }

        write!(
            f,
            "released {} documents, {} failed:",
            self.closed,
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {}: {}", failure.label, failure.error)?;
        }
        Ok(())
    }
}
