//! Conversion of simple-query protocol messages into a `RowCursor`.
//!
//! The simple query protocol returns every value in its textual form, which
//! is exactly what the materializer wants. Only the first result set that
//! carries a row description is kept when a line holds several statements.

use postgres::{SimpleQueryMessage, SimpleQueryRow};

use crate::db::{DbError, RawRow, RowCursor};

/// Cursor over the rows of one simple-query response.
pub struct SimpleQueryCursor {
    columns: Vec<String>,
    rows: std::vec::IntoIter<SimpleQueryRow>,
    position: usize,
}

impl SimpleQueryCursor {
    pub fn new(messages: Vec<SimpleQueryMessage>) -> Self {
        let mut columns: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for message in messages {
            match message {
                SimpleQueryMessage::RowDescription(description) => {
                    if columns.is_some() {
                        break;
                    }
                    columns = Some(description.iter().map(|c| c.name().to_string()).collect());
                }
                SimpleQueryMessage::Row(row) => {
                    if columns.is_none() {
                        columns = Some(row.columns().iter().map(|c| c.name().to_string()).collect());
                    }
                    rows.push(row);
                }
                SimpleQueryMessage::CommandComplete(_) => {
                    if columns.is_some() {
                        break;
                    }
                }
                _ => {}
            }
        }

        Self {
            columns: columns.unwrap_or_default(),
            rows: rows.into_iter(),
            position: 0,
        }
    }
}

fn decode_row(row: &SimpleQueryRow, width: usize) -> Result<RawRow, String> {
    if row.len() != width {
        return Err(format!("expected {} columns, got {}", width, row.len()));
    }
    (0..width)
        .map(|idx| {
            row.try_get(idx)
                .map(|cell| cell.map(|text| text.as_bytes().to_vec()))
                .map_err(|e| e.to_string())
        })
        .collect()
}

impl Iterator for SimpleQueryCursor {
    type Item = Result<RawRow, DbError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        let position = self.position;
        self.position += 1;
        Some(
            decode_row(&row, self.columns.len())
                .map_err(|message| DbError::Scan { row: position, message }),
        )
    }
}

impl RowCursor for SimpleQueryCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }
}
