use serde_json::Value;

use super::json::row_objects;
use super::RenderError;
use crate::types::RowSet;

/// The rows as a toon document, built from the same objects as JSON output.
pub fn render_toon(set: &RowSet) -> Result<String, RenderError> {
    let rows = Value::Array(row_objects(set));
    Ok(::toon::encode(&rows, None))
}
