use serde_json::{Map, Value};

use super::RenderError;
use crate::types::RowSet;

/// One JSON object per row, keys in projection order. Every value is the
/// cell's text; no numeric or boolean inference.
pub fn row_objects(set: &RowSet) -> Vec<Value> {
    set.rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = set
                .columns
                .iter()
                .zip(set.cells(row))
                .map(|(column, cell)| (column.clone(), Value::String(cell.to_string())))
                .collect();
            Value::Object(object)
        })
        .collect()
}

/// A JSON array with each object on its own line.
///
/// ```text
/// [
/// {"id":"1","name":"a"},
/// {"id":"2","name":"b"}
/// ]
/// ```
pub fn render_json(set: &RowSet) -> Result<String, RenderError> {
    if set.rows.is_empty() {
        return Ok("[]".to_string());
    }

    let lines = row_objects(set)
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("[\n{}\n]", lines.join(",\n")))
}
