//! Shared test fixtures and utilities for integration tests.
//!
//! Every test works in its own temporary directory so file locks taken by
//! one test never collide with another running in parallel.

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of documents, removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        docrank::tracing::init(false);
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a directory (and all parent directories) within this workspace.
    ///
    /// # Panics
    /// Panics if directory creation fails.
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        std::fs::create_dir_all(&full_path)
            .unwrap_or_else(|e| panic!("Failed to create directory '{}': {}", path, e));
        full_path
    }

    /// Creates a file with the given content and returns its full path.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }
}

/// Three small documents with distinct vocabularies.
#[allow(dead_code)] // Fields used across different integration test crates
pub struct Corpus {
    pub workspace: TempWorkspace,
    pub paths: Vec<PathBuf>,
}

/// `a.txt`, `b.json` and `subdirectory/c.txt` with distinct vocabularies.
#[fixture]
pub fn corpus() -> Corpus {
    let workspace = TempWorkspace::new();
    let paths = vec![
        workspace.create_file("a.txt", "some text to find and rank."),
        workspace.create_file("b.json", r#"{"greeting": "hello world"}"#),
        workspace.create_file("subdirectory/c.txt", "Hello, nope."),
    ];
    Corpus { workspace, paths }
}
