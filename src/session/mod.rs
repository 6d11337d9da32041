//! The read-execute-print loop.
//!
//! A `Session` drives one statement at a time through
//! `Dispatching -> Executing -> Rendering` and back to `AwaitingInput`.
//! Statement failures are printed and the loop carries on; only the end of
//! input, `quit`/`exit`, or a second consecutive interrupt close it.
//!
//! The terminal is reached through the `LineEditor` trait and the database
//! through `DatabaseBackend`, so the loop itself never blocks on anything it
//! does not own.

mod completer;
mod editor;


pub use completer::SqlHelper;
pub use editor::RustylineEditor;

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::db::{DatabaseBackend, DbError};
use crate::dispatch::{dispatch, Dispatch};
use crate::materialize::materialize;
use crate::output::{OutputFormat, Outputable, RenderError};

/// Errors surfaced by the session loop.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Line editor failed: {0}")]
    Editor(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// What one read from the terminal produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The user pressed Ctrl-C; the line in progress is discarded.
    Interrupted,
    /// End of input (Ctrl-D or closed stdin).
    Eof,
}

/// Source of interactive input lines.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, SessionError>;

    fn add_history(&mut self, line: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Initializing,
    AwaitingInput,
    Dispatching,
    Executing,
    Rendering,
    Closed,
}

const EXIT_COMMANDS: [&str; 2] = ["quit", "exit"];

pub struct Session<'a> {
    backend: &'a dyn DatabaseBackend,
    prompt: String,
    default_format: OutputFormat,
    state: SessionState,
    out: Box<dyn Write + 'a>,
    err: Box<dyn Write + 'a>,
}

impl<'a> Session<'a> {
    /// A session printing results to stdout and errors to stderr.
    pub fn new(backend: &'a dyn DatabaseBackend, database: &str, default_format: OutputFormat) -> Self {
        Self::with_output(
            backend,
            database,
            default_format,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    pub fn with_output(
        backend: &'a dyn DatabaseBackend,
        database: &str,
        default_format: OutputFormat,
        out: Box<dyn Write + 'a>,
        err: Box<dyn Write + 'a>,
    ) -> Self {
        Self {
            backend,
            prompt: format!("{}> ", database),
            default_format,
            state: SessionState::Initializing,
            out,
            err,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run a single command and close, whatever its outcome.
    pub fn run_once(&mut self, command: &str) {
        self.transition(SessionState::AwaitingInput);
        if !command.trim().is_empty() {
            self.execute_line(command);
        }
        self.transition(SessionState::Closed);
    }

    /// Read and execute lines until the user leaves.
    ///
    /// # Errors
    /// Only a failing line editor ends the loop with an error.
    pub fn run_interactive(&mut self, editor: &mut dyn LineEditor) -> Result<(), SessionError> {
        self.transition(SessionState::AwaitingInput);
        let mut interrupt_pending = false;

        loop {
            let outcome = match editor.read_line(&self.prompt) {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.transition(SessionState::Closed);
                    return Err(e);
                }
            };

            match outcome {
                ReadOutcome::Line(line) => {
                    interrupt_pending = false;
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    editor.add_history(input);
                    if EXIT_COMMANDS.contains(&input) {
                        break;
                    }
                    self.execute_line(input);
                }
                ReadOutcome::Interrupted => {
                    if interrupt_pending {
                        break;
                    }
                    interrupt_pending = true;
                    let _ = writeln!(self.err, "(press Ctrl-C again to exit)");
                }
                ReadOutcome::Eof => break,
            }
        }

        self.transition(SessionState::Closed);
        Ok(())
    }

    /// Execute one line, report any failure, and return to awaiting input.
    fn execute_line(&mut self, line: &str) {
        if let Err(e) = self.run_statement(line) {
            warn!(error = %e, "statement failed");
            let _ = writeln!(self.err, "ERROR: {}", e);
        }
        self.transition(SessionState::AwaitingInput);
    }

    fn run_statement(&mut self, line: &str) -> Result<(), SessionError> {
        self.transition(SessionState::Dispatching);
        let Dispatch { sql, format } = dispatch(line, self.default_format);
        if sql.is_empty() {
            debug!("directive without a statement");
            return Ok(());
        }
        debug!(?format, "dispatched");

        self.transition(SessionState::Executing);
        debug!(backend = self.backend.backend_name(), "executing");
        let set = {
            let mut cursor = self.backend.execute(&sql)?;
            materialize(cursor.as_mut())?
        };

        self.transition(SessionState::Rendering);
        let rendered = set.format(format)?;
        if !rendered.is_empty() || !set.is_empty() {
            writeln!(self.out, "{}", rendered)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn transition(&mut self, next: SessionState) {
        trace!(from = ?self.state, to = ?next, "session state");
        self.state = next;
    }
}
