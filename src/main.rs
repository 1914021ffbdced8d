use anyhow::Context;
use clap::Parser;
use docrank::cli::Cli;
use docrank::listing::list_files;
use docrank::session::Session;
use docrank::{DocumentStore, QueryEngine, SearchConfig};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    docrank::tracing::init(cli.verbose);

    let config = cli.apply(SearchConfig::load(cli.config.as_deref())?);
    tracing::debug!("Using {:?}", config);

    let paths = list_files(&cli.directory, &config)?;
    let store = DocumentStore::build(&paths)
        .with_context(|| format!("Failed to index {}", cli.directory.display()))?;
    let engine = QueryEngine::from_config(&config);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let report = Session::new(store, engine, stdin, stdout, cli.output_format())
        .run()
        .context("Session I/O failed")?;

    if report.is_clean() {
        tracing::info!("Session ended, {}", report);
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!("Session ended, {}", report);
        Ok(ExitCode::FAILURE)
    }
}
