//! Shared test doubles for the session loop.
//!
//! `MockBackend` answers statements from a table of canned responses and
//! records every statement it receives. `ScriptedEditor` replays a fixed
//! sequence of terminal reads and reports end of input afterwards.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use crate::db::{DatabaseBackend, DbError, RawRow, RowCursor, VecCursor};
use crate::session::{LineEditor, ReadOutcome, SessionError};

enum Response {
    Rows { columns: Vec<String>, rows: Vec<RawRow> },
    ScanFailure { columns: Vec<String> },
    Fail(String),
}

/// In-memory backend with canned responses.
///
/// Statements without a response fail with a syntax error, which mirrors
/// what a real server does with garbage input.
#[derive(Default)]
pub struct MockBackend {
    responses: BTreeMap<String, Response>,
    tables: Vec<String>,
    executed: RefCell<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, sql: &str, columns: &[&str], rows: &[&[Option<&str>]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|c| c.map(|s| s.as_bytes().to_vec())).collect())
            .collect();
        self.responses.insert(
            sql.to_string(),
            Response::Rows {
                columns: to_strings(columns),
                rows,
            },
        );
        self
    }

    pub fn with_error(mut self, sql: &str, message: &str) -> Self {
        self.responses
            .insert(sql.to_string(), Response::Fail(message.to_string()));
        self
    }

    /// The first row decodes, the second fails.
    pub fn with_scan_failure(mut self, sql: &str, columns: &[&str]) -> Self {
        self.responses.insert(
            sql.to_string(),
            Response::ScanFailure {
                columns: to_strings(columns),
            },
        );
        self
    }

    pub fn with_tables(mut self, tables: &[&str]) -> Self {
        self.tables = to_strings(tables);
        self
    }

    /// Every statement passed to `execute`, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DatabaseBackend for MockBackend {
    fn execute(&self, sql: &str) -> Result<Box<dyn RowCursor + '_>, DbError> {
        self.executed.borrow_mut().push(sql.to_string());

        match self.responses.get(sql) {
            Some(Response::Rows { columns, rows }) => Ok(Box::new(VecCursor::new(
                columns.clone(),
                rows.iter().cloned().map(Ok).collect(),
            ))),
            Some(Response::ScanFailure { columns }) => {
                let first = columns.iter().map(|_| Some(b"ok".to_vec())).collect();
                Ok(Box::new(VecCursor::new(
                    columns.clone(),
                    vec![
                        Ok(first),
                        Err(DbError::Scan {
                            row: 1,
                            message: "invalid byte sequence".to_string(),
                        }),
                    ],
                )))
            }
            Some(Response::Fail(message)) => Err(DbError::Query {
                message: message.clone(),
            }),
            None => Err(DbError::Query {
                message: format!("syntax error at or near \"{}\"", sql),
            }),
        }
    }

    fn list_tables(&self) -> Result<Vec<String>, DbError> {
        Ok(self.tables.clone())
    }

    fn backend_name(&self) -> &'static str {
        "Mock"
    }
}

/// Line editor that replays scripted reads.
#[derive(Default)]
pub struct ScriptedEditor {
    script: VecDeque<ReadOutcome>,
    pub history: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedEditor {
    pub fn new(script: Vec<ReadOutcome>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    /// Script made of plain lines only.
    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|l| ReadOutcome::Line(l.to_string())).collect())
    }

    /// Reads not consumed by the session.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, SessionError> {
        self.prompts.push(prompt.to_string());
        Ok(self.script.pop_front().unwrap_or(ReadOutcome::Eof))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

/// Line editor whose terminal has gone away.
pub struct BrokenEditor;

impl LineEditor for BrokenEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome, SessionError> {
        Err(SessionError::Editor("terminal closed".to_string()))
    }

    fn add_history(&mut self, _line: &str) {}
}
