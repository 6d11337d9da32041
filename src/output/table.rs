use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::Table;

use super::RenderError;
use crate::types::RowSet;

/// Bordered grid with a header row.
///
/// Each column is as wide as its widest cell or header. An empty result still
/// prints the header and borders.
pub fn render_table(set: &RowSet) -> Result<String, RenderError> {
    if set.columns.is_empty() {
        return Err(RenderError::NoColumns);
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED);
    table.set_header(&set.columns);
    for row in &set.rows {
        table.add_row(set.cells(row));
    }

    Ok(table.to_string())
}
