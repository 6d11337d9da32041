//! Turns a driver cursor into a fully buffered `RowSet` of text cells.
//!
//! Materialization is all-or-nothing: the first tuple that fails to decode
//! aborts the whole result and no partial row list is returned.

use tracing::debug;

use crate::db::{DbError, RawRow, RowCursor};
use crate::types::{Row, RowSet};

/// Drain `cursor` into a `RowSet`.
///
/// The column list is read once, before the first advance. NULL cells become
/// empty strings and non-UTF-8 bytes are decoded lossily.
pub fn materialize<C>(cursor: &mut C) -> Result<RowSet, DbError>
where
    C: RowCursor + ?Sized,
{
    let columns = cursor.columns().to_vec();
    let mut rows = Vec::new();

    while let Some(raw) = cursor.next() {
        let raw = raw?;
        if raw.len() != columns.len() {
            return Err(DbError::Scan {
                row: rows.len(),
                message: format!("expected {} values, got {}", columns.len(), raw.len()),
            });
        }
        rows.push(zip_row(&columns, raw));
    }

    debug!(columns = columns.len(), rows = rows.len(), "materialized result");
    Ok(RowSet::new(columns, rows))
}

fn zip_row(columns: &[String], raw: RawRow) -> Row {
    columns
        .iter()
        .zip(raw)
        .map(|(column, cell)| (column.clone(), cell_text(cell)))
        .collect()
}

fn cell_text(cell: Option<Vec<u8>>) -> String {
    match cell {
        Some(bytes) => String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::VecCursor;
    use rstest::rstest;

    #[rstest]
    fn test_materialize_preserves_order() {
        let mut cursor = VecCursor::from_text(
            &["id", "name"],
            &[&[Some("1"), Some("a")], &[Some("2"), Some("b")]],
        );
        let set = materialize(&mut cursor).unwrap();

        assert_eq!(set.columns, vec!["id", "name"]);
        assert_eq!(set.rows.len(), 2);
        assert_eq!(set.rows[0]["id"], "1");
        assert_eq!(set.rows[1]["name"], "b");
    }

    #[rstest]
    fn test_null_becomes_empty_string() {
        let mut cursor = VecCursor::from_text(&["v"], &[&[None]]);
        let set = materialize(&mut cursor).unwrap();
        assert_eq!(set.rows[0]["v"], "");
    }

    #[rstest]
    fn test_binary_cell_is_decoded_lossily() {
        let mut cursor = VecCursor::new(
            vec!["b".to_string()],
            vec![Ok(vec![Some(vec![b'o', b'k', 0xff])])],
        );
        let set = materialize(&mut cursor).unwrap();
        assert_eq!(set.rows[0]["b"], "ok\u{fffd}");
    }

    #[rstest]
    fn test_zero_rows_keeps_columns() {
        let mut cursor = VecCursor::from_text(&["a", "b"], &[]);
        let set = materialize(&mut cursor).unwrap();
        assert_eq!(set.columns, vec!["a", "b"]);
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_duplicate_columns_last_write_wins() {
        let mut cursor = VecCursor::from_text(&["x", "x"], &[&[Some("first"), Some("second")]]);
        let set = materialize(&mut cursor).unwrap();

        assert_eq!(set.columns, vec!["x", "x"]);
        assert_eq!(set.rows[0].len(), 1);
        assert_eq!(set.rows[0]["x"], "second");
    }

    #[rstest]
    fn test_scan_error_discards_everything() {
        let mut cursor = VecCursor::new(
            vec!["a".to_string()],
            vec![
                Ok(vec![Some(b"1".to_vec())]),
                Err(DbError::Scan {
                    row: 1,
                    message: "bad tuple".to_string(),
                }),
                Ok(vec![Some(b"3".to_vec())]),
            ],
        );
        let result = materialize(&mut cursor);
        assert!(matches!(result, Err(DbError::Scan { row: 1, .. })));
    }

    #[rstest]
    fn test_width_mismatch_is_scan_error() {
        let mut cursor = VecCursor::new(vec!["a".to_string(), "b".to_string()], vec![Ok(vec![None])]);
        let err = materialize(&mut cursor).unwrap_err();
        assert!(err.to_string().contains("expected 2 values, got 1"));
    }
}
