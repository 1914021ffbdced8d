//! Search configuration loaded from TOML.

use crate::error::Result;
use crate::search::DEFAULT_LIMIT;
use anyhow::{Context, bail};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Name of the per-user config file under the platform config directory.
const CONFIG_FILE: &str = "docrank/config.toml";

/// Tunables for directory listing and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum matches shown per query
    pub limit: usize,
    /// Walk subdirectories of the indexed directory
    pub recursive: bool,
    /// Include dotfiles and files in dot-directories
    pub hidden: bool,
    /// Honour `.gitignore` / `.ignore` files while walking
    pub respect_ignore_files: bool,
    /// Count the empty token produced by consecutive separators
    pub keep_empty_tokens: bool,
    /// Score documents on a thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            recursive: true,
            hidden: true,
            respect_ignore_files: false,
            keep_empty_tokens: true,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Resolves the config to use for a session.
    ///
    /// An explicit path must exist. Without one, the per-user file is used
    /// when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let expanded = expand_tilde(&path.to_string_lossy()).into_owned();
            return Self::from_path(Path::new(&expanded));
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using config at {}", path.display());
                Self::from_path(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            bail!("limit must be at least 1");
        }
        Ok(())
    }
}

/// `$CONFIG_DIR/docrank/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Expand tilde (`~`) in paths to the user's home directory.
///
/// Examples:
/// - `~/notes` becomes `/home/user/notes`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
