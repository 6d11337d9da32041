//! Output formatting for query results.
//!
//! Supports multiple output formats: simple (tab-separated), table
//! (human-readable grid), JSON, and toon. Each renderer is a pure function of
//! the columns and rows of a `RowSet`.

mod json;
mod simple;
mod table;
mod toon;


use clap::ValueEnum;
use thiserror::Error;

use crate::types::RowSet;

pub use json::{render_json, row_objects};
pub use simple::render_simple;
pub use table::render_table;
pub use self::toon::render_toon;

/// Output format for query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated cell values, one line per row, no header
    #[default]
    Simple,
    /// Bordered, column-aligned grid
    Table,
    /// JSON array with one object per line
    Json,
    /// Token-efficient toon format
    Toon,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Simple,
        OutputFormat::Table,
        OutputFormat::Json,
        OutputFormat::Toon,
    ];

    /// The trailing input directive that selects this format, e.g. `\json`.
    pub fn directive(self) -> &'static str {
        match self {
            OutputFormat::Simple => "\\simple",
            OutputFormat::Table => "\\table",
            OutputFormat::Json => "\\json",
            OutputFormat::Toon => "\\toon",
        }
    }
}

/// Errors raised while rendering a result set.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot render a table without columns")]
    NoColumns,

    #[error("Failed to encode row as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for types that can be formatted for output
pub trait Outputable {
    /// Format as tab-separated lines
    fn to_simple(&self) -> String;

    /// Format as a bordered table
    fn to_table(&self) -> Result<String, RenderError>;

    /// Format as a JSON array, one object per line
    fn to_json(&self) -> Result<String, RenderError>;

    /// Format as a toon document
    fn to_toon(&self) -> Result<String, RenderError>;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> Result<String, RenderError> {
        match format {
            OutputFormat::Simple => Ok(self.to_simple()),
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => self.to_json(),
            OutputFormat::Toon => self.to_toon(),
        }
    }
}

impl Outputable for RowSet {
    fn to_simple(&self) -> String {
        render_simple(self)
    }

    fn to_table(&self) -> Result<String, RenderError> {
        render_table(self)
    }

    fn to_json(&self) -> Result<String, RenderError> {
        render_json(self)
    }

    fn to_toon(&self) -> Result<String, RenderError> {
        render_toon(self)
    }
}
