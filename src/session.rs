//! Interactive read-eval-print loop over a document store.

use crate::error::{InvalidQuery, QueryError};
use crate::format::{
    OutputFormat, PROMPT, write_documents, write_error, write_help, write_result,
    write_unknown_command,
};
use crate::search::{JaccardScorer, QueryEngine, Scorer};
use crate::store::{DocumentStore, TeardownReport};
use std::io::{self, BufRead, Write};

/// One line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Free text to rank documents against
    Search(&'a str),
    /// `:quit` ends the session
    Quit,
    /// `:help` lists commands
    Help,
    /// `:docs` lists the indexed documents
    Documents,
    /// A blank line
    Empty,
    /// Any other `:`-prefixed word
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a raw input line. Surrounding whitespace is ignored.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "" => Self::Empty,
            ":quit" | ":q" => Self::Quit,
            ":help" => Self::Help,
            ":docs" => Self::Documents,
            _ if line.starts_with(':') && !line.contains(char::is_whitespace) => {
                Self::Unknown(line)
            }
            _ => Self::Search(line),
        }
    }
}

/// A session owns the store from construction until teardown.
pub struct Session<R, W, S = JaccardScorer> {
    store: DocumentStore,
    engine: QueryEngine<S>,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write, S: Scorer> Session<R, W, S> {
    pub const fn new(
        store: DocumentStore,
        engine: QueryEngine<S>,
        input: R,
        output: W,
        format: OutputFormat,
    ) -> Self {
        Self {
            store,
            engine,
            input,
            output,
            format,
        }
    }

    /// Runs until `:quit` or end of input, then tears the store down.
    ///
    /// The store is released even when reading or writing fails; the I/O
    /// error is returned after teardown.
    pub fn run(mut self) -> io::Result<TeardownReport> {
        let outcome = self.serve();
        let report = self.store.teardown();
        outcome?;
        Ok(report)
    }

    fn serve(&mut self) -> io::Result<()> {
        let interactive = self.format == OutputFormat::Text;
        if interactive {
            writeln!(
                self.output,
                "{PROMPT} Indexed {} documents. Enter a text to search, :help for commands, :quit to exit",
                self.store.len()
            )?;
        }

        let mut line = String::new();
        loop {
            if interactive {
                write!(self.output, "{PROMPT} ")?;
            }
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Command::Quit => break,
                Command::Empty if interactive => {
                    writeln!(self.output, "{PROMPT} Invalid input, empty strings are invalid")?;
                }
                Command::Empty => {
                    let error = QueryError::from(InvalidQuery::Empty);
                    write_error(&mut self.output, self.format, "", &error)?;
                }
                Command::Help => write_help(&mut self.output, self.format)?,
                Command::Documents => {
                    write_documents(&mut self.output, self.format, self.store.labels())?;
                }
                Command::Unknown(word) => {
                    write_unknown_command(&mut self.output, self.format, word)?;
                }
                Command::Search(query) => match self.engine.query(query, &mut self.store) {
                    Ok(result) => write_result(&mut self.output, self.format, query, &result)?,
                    Err(e) => {
                        tracing::debug!("Query {:?} failed: {}", query, e);
                        write_error(&mut self.output, self.format, query, &e)?;
                    }
                },
            }
        }

        if interactive {
            writeln!(self.output, "{PROMPT} Closing the session")?;
        }
        self.output.flush()
    }
}
