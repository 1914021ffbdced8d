//! Rendering of query outcomes for the operator.

use crate::error::QueryError;
use crate::search::{QueryResult, ScoredMatch};
use serde::Serialize;
use std::io::{self, Write};

/// Prefix for every line the session writes on its own behalf in text mode.
pub const PROMPT: &str = "docrank>";

/// Session commands and what they do, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("<text>", "rank documents against <text>"),
    (":docs", "list indexed documents"),
    (":help", "show this message"),
    (":quit", "end the session (also :q or end of input)"),
];

/// How query outcomes are written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One ranked line per match
    #[default]
    Text,
    /// One JSON object per query
    Json,
}

#[derive(Serialize)]
struct JsonMatches<'a> {
    query: &'a str,
    matches: &'a [ScoredMatch],
}

#[derive(Serialize)]
struct JsonError<'a> {
    query: &'a str,
    error: String,
}

#[derive(Serialize)]
struct JsonDocuments<'a> {
    documents: Vec<&'a str>,
}

#[derive(Serialize)]
struct JsonCommand<'a> {
    usage: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct JsonCommands<'a> {
    commands: Vec<JsonCommand<'a>>,
}

#[derive(Serialize)]
struct JsonCommandError<'a> {
    command: &'a str,
    error: String,
}

fn write_json_line(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// Writes a ranked result.
pub fn write_result(
    out: &mut impl Write,
    format: OutputFormat,
    query: &str,
    result: &QueryResult,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            if result.is_empty() {
                return writeln!(out, "No documents scored for '{}'.", query);
            }
            for (rank, m) in result.iter().enumerate() {
                writeln!(out, "{:>3}. {:>3}%  {}", rank + 1, m.score, m.label)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let line = JsonMatches {
                query,
                matches: result.matches(),
            };
            write_json_line(out, &line)
        }
    }
}

/// Writes the reason a query produced no result.
pub fn write_error(
    out: &mut impl Write,
    format: OutputFormat,
    query: &str,
    error: &QueryError,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "Query failed: {}", error),
        OutputFormat::Json => {
            let line = JsonError {
                query,
                error: error.to_string(),
            };
            write_json_line(out, &line)
        }
    }
}

/// Writes the labels of the indexed documents.
pub fn write_documents<'a>(
    out: &mut impl Write,
    format: OutputFormat,
    labels: impl ExactSizeIterator<Item = &'a str>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{} documents indexed:", labels.len())?;
            for label in labels {
                writeln!(out, "  {}", label)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json_line(
            out,
            &JsonDocuments {
                documents: labels.collect(),
            },
        ),
    }
}

/// Writes the command reference.
pub fn write_help(out: &mut impl Write, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Commands:")?;
            for (usage, description) in COMMANDS {
                writeln!(out, "  {:<7} {}", usage, description)?;
            }
            writeln!(out, "Any other single word starting with ':' is reserved.")
        }
        OutputFormat::Json => {
            let commands = COMMANDS
                .iter()
                .map(|&(usage, description)| JsonCommand { usage, description })
                .collect();
            write_json_line(out, &JsonCommands { commands })
        }
    }
}

/// Reports a `:`-prefixed word that is not a known command.
pub fn write_unknown_command(
    out: &mut impl Write,
    format: OutputFormat,
    command: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "Unknown command '{}', try :help", command),
        OutputFormat::Json => write_json_line(
            out,
            &JsonCommandError {
                command,
                error: "unknown command".to_string(),
            },
        ),
    }
}
