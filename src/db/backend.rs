//! Database backend trait and the cursor abstraction it returns.

use super::DbError;

/// One tuple of uninterpreted cell values, `None` for SQL NULL.
pub type RawRow = Vec<Option<Vec<u8>>>;

/// Forward-only handle over the tuples of one statement's result.
///
/// The column list is available before the first advance. Each item is one
/// tuple, or the error that stopped decoding it. Dropping the cursor releases
/// whatever it holds.
pub trait RowCursor: Iterator<Item = Result<RawRow, DbError>> {
    fn columns(&self) -> &[String];
}

/// Trait for database backends that can execute statements.
pub trait DatabaseBackend {
    /// Execute one statement, returning a cursor over its result.
    fn execute(&self, sql: &str) -> Result<Box<dyn RowCursor + '_>, DbError>;

    /// Names of the user tables visible in the current database.
    fn list_tables(&self) -> Result<Vec<String>, DbError>;

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

/// Cursor over tuples that are already in memory.
#[cfg(test)]
#[derive(Debug)]
pub struct VecCursor {
    columns: Vec<String>,
    rows: std::vec::IntoIter<Result<RawRow, DbError>>,
}

#[cfg(test)]
impl VecCursor {
    pub fn new(columns: Vec<String>, rows: Vec<Result<RawRow, DbError>>) -> Self {
        Self {
            columns,
            rows: rows.into_iter(),
        }
    }

    /// Build a cursor of text cells; convenient for fixtures.
    pub fn from_text(columns: &[&str], rows: &[&[Option<&str>]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                Ok(row
                    .iter()
                    .map(|cell| cell.map(|s| s.as_bytes().to_vec()))
                    .collect())
            })
            .collect();
        Self::new(columns.iter().map(|c| c.to_string()).collect(), rows)
    }
}

#[cfg(test)]
impl Iterator for VecCursor {
    type Item = Result<RawRow, DbError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }
}

#[cfg(test)]
impl RowCursor for VecCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }
}
