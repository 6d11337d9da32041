use std::collections::BTreeMap;

/// One result row: column name to textual cell value.
///
/// Duplicate column names collapse into a single entry, the last value wins.
pub type Row = BTreeMap<String, String>;

/// A fully buffered result set.
///
/// `columns` keeps the projection order as returned by the server and may
/// contain duplicates. Every row holds exactly the distinct names of
/// `columns` as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl RowSet {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Cells of `row` in column order. Missing keys read as empty text.
    pub fn cells<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = &'a str> + 'a {
        self.columns
            .iter()
            .map(move |column| row.get(column).map(String::as_str).unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
