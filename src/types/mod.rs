//! Shared types for materialized query results.

mod rowset;

pub use rowset::{Row, RowSet};
