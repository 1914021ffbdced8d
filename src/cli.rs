use crate::config::SearchConfig;
use crate::format::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "docrank")]
#[command(about = "Rank the files of a directory by similarity to free-text queries", long_about = None)]
pub struct Cli {
    /// Directory whose files are indexed for the session
    pub directory: PathBuf,

    /// Config file (defaults to the per-user docrank/config.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of matches per query
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only index files directly inside the directory
    #[arg(long)]
    pub no_recursive: bool,

    /// Skip files matched by .gitignore / .ignore
    #[arg(long)]
    pub respect_ignore: bool,

    /// Ignore the empty token produced by consecutive separators
    #[arg(long)]
    pub drop_empty_tokens: bool,

    /// Score documents in parallel
    #[arg(long)]
    pub parallel: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies command line overrides on top of a loaded config.
    pub fn apply(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(limit) = self.limit {
            config.limit = limit.max(1);
        }
        if self.no_recursive {
            config.recursive = false;
        }
        if self.respect_ignore {
            config.respect_ignore_files = true;
        }
        if self.drop_empty_tokens {
            config.keep_empty_tokens = false;
        }
        if self.parallel {
            config.parallel = true;
        }
        config
    }

    /// The output format after resolving `--json`.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}
