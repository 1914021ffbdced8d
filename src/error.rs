//! Error handling types and utilities.
//!
//! The document store and query engine report failures through the typed
//! enums below so callers can tell the kinds apart. Startup glue (config,
//! directory listing, `main`) uses [`Result`] with `.context()` instead.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A specialized Result type for docrank glue code.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a document handle cannot be opened.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("'{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Another handle (in this process or another) holds the lock.
    #[error("'{}' is already locked by another reader", .path.display())]
    AlreadyLocked { path: PathBuf },

    #[error("failed to open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OpenError {
    /// The path that failed to open.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::NotAFile { path }
            | Self::PermissionDenied { path }
            | Self::AlreadyLocked { path }
            | Self::Io { path, .. } => path,
        }
    }

    /// Classify an I/O error raised while opening `path`.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::IsADirectory => Self::NotAFile { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Error returned when reading document content fails.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("content is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("handle is closed")]
    Closed,
}

/// Error returned when releasing a document handle fails.
#[derive(Debug, Error)]
pub enum CloseError {
    #[error("handle was already closed")]
    AlreadyClosed,

    #[error("failed to release lock: {0}")]
    Io(#[from] io::Error),
}

/// Rejection of a query before any document is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQuery {
    #[error("empty queries are invalid")]
    Empty,
}

/// Error returned when the document store cannot be built.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no documents to index")]
    Empty,

    /// The path at `position` (zero-based) failed; every earlier handle was released.
    #[error("document {} of {total}: {source}", .position + 1)]
    Open {
        position: usize,
        total: usize,
        #[source]
        source: OpenError,
    },
}

impl BuildError {
    /// The offending path, if the build failed on a specific document.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Empty => None,
            Self::Open { source, .. } => Some(source.path()),
        }
    }
}

/// Error returned when a single query fails as a whole.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid query: {0}")]
    Invalid(#[from] InvalidQuery),

    #[error("failed to read '{label}': {source}")]
    Read {
        label: String,
        #[source]
        source: ReadError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Kind {
        NotFound,
        NotAFile,
        PermissionDenied,
        Io,
    }

    fn kind(error: &OpenError) -> Kind {
        match error {
            OpenError::NotFound { .. } => Kind::NotFound,
            OpenError::NotAFile { .. } => Kind::NotAFile,
            OpenError::PermissionDenied { .. } => Kind::PermissionDenied,
            OpenError::AlreadyLocked { .. } => panic!("I/O errors never map to AlreadyLocked"),
            OpenError::Io { .. } => Kind::Io,
        }
    }

    #[rstest]
    #[case(io::ErrorKind::NotFound, Kind::NotFound)]
    #[case(io::ErrorKind::PermissionDenied, Kind::PermissionDenied)]
    #[case(io::ErrorKind::IsADirectory, Kind::NotAFile)]
    #[case(io::ErrorKind::Other, Kind::Io)]
    #[case(io::ErrorKind::InvalidData, Kind::Io)]
    fn test_open_error_from_io(#[case] io_kind: io::ErrorKind, #[case] expected: Kind) {
        let path = Path::new("/docs/report.txt");
        let error = OpenError::from_io(path, io::Error::from(io_kind));

        check!(kind(&error) == expected);
        check!(error.path() == path);
        check!(error.to_string().contains("report.txt"));
    }

    #[test]
    fn test_unclassified_io_keeps_source() {
        let error = OpenError::from_io(Path::new("doc"), io::Error::other("disk on fire"));
        let_assert!(OpenError::Io { source, .. } = &error);
        check!(source.to_string() == "disk on fire");
        check!(error.to_string() == "failed to open 'doc': disk on fire");
    }

    #[test]
    fn test_permission_denied_message() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let error = OpenError::from_io(Path::new("secret.txt"), denied);
        check!(error.to_string() == "permission denied reading 'secret.txt'");
    }

    #[test]
    fn test_build_error_names_position_and_path() {
        let error = BuildError::Open {
            position: 1,
            total: 3,
            source: OpenError::NotFound {
                path: PathBuf::from("b.txt"),
            },
        };
        check!(error.to_string() == "document 2 of 3: 'b.txt' does not exist");
        check!(error.path() == Some(Path::new("b.txt")));
        check!(BuildError::Empty.path().is_none());
    }
}
