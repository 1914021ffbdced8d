//! Directory listing that feeds the document store.

use crate::config::SearchConfig;
use crate::error::Result;
use anyhow::{Context, bail};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the regular files under `dir` in path order.
///
/// Symlinks to regular files are listed under the link path; symlinked
/// directories are not descended into. Walk errors (unreadable subdirectories, broken
/// ignore files) abort the listing rather than silently shrinking the index.
pub fn list_files(dir: &Path, config: &SearchConfig) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("'{}' is not a directory", dir.display());
    }

    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(config.respect_ignore_files)
        .hidden(!config.hidden)
        .require_git(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.cmp(b));
    if !config.recursive {
        builder.max_depth(Some(1));
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let is_file = match entry.file_type() {
            Some(t) if t.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
            Some(t) => t.is_file(),
            None => false,
        };
        if is_file {
            files.push(entry.into_path());
        }
    }

    tracing::debug!("Listed {} files under {}", files.len(), dir.display());

    Ok(files)
}
