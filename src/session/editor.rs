//! Rustyline-backed line editor with history and completion.

use std::path::PathBuf;

use rustyline::config::{CompletionType, Config, EditMode};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::{debug, warn};

use super::completer::SqlHelper;
use super::{LineEditor, ReadOutcome, SessionError};

/// Terminal line editor. History is loaded on creation and saved on drop.
pub struct RustylineEditor {
    editor: Editor<SqlHelper, DefaultHistory>,
    history_file: Option<PathBuf>,
}

impl RustylineEditor {
    pub fn new(helper: SqlHelper, history_file: Option<PathBuf>) -> Result<Self, SessionError> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .edit_mode(EditMode::Emacs)
            .auto_add_history(false)
            .build();

        let mut editor = Editor::<SqlHelper, DefaultHistory>::with_config(config)
            .map_err(|e| SessionError::Editor(e.to_string()))?;
        debug!(tables = helper.tables().len(), "completion candidates loaded");
        editor.set_helper(Some(helper));

        if let Some(path) = &history_file {
            if let Err(e) = editor.load_history(path) {
                debug!(path = %path.display(), error = %e, "no history loaded");
            }
        }

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, SessionError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(SessionError::Editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            debug!(error = %e, "history entry dropped");
        }
    }
}

impl Drop for RustylineEditor {
    fn drop(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "failed to save history");
            }
        }
    }
}
