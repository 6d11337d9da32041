use crate::types::RowSet;

/// One line per row, cells tab-joined in column order. No header line.
pub fn render_simple(set: &RowSet) -> String {
    set.rows
        .iter()
        .map(|row| set.cells(row).collect::<Vec<_>>().join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}
