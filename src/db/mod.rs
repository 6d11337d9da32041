//! Database connection and query execution for the shell.
//!
//! This module provides the database abstraction layer:
//! - Connection management (a bounded `r2d2` pool over the `postgres` driver)
//! - Statement execution returning a forward-only cursor of raw text cells
//! - Table enumeration used to seed tab completion
//!
//! # Architecture
//!
//! The session never talks to the driver directly. It holds a
//! `&dyn DatabaseBackend` and receives `RowCursor`s, which the materializer
//! turns into a fully buffered `RowSet`. Tests substitute in-memory backends
//! and cursors at the same seams.
//!
//! # Type Decisions
//!
//! **Why raw `Option<Vec<u8>>` cells instead of typed values?**
//! Every cell is rendered as text, and the text protocol already returns the
//! server's canonical textual form. Keeping cells as uninterpreted bytes means
//! NULLs, numerics and binary values all take the same path.

mod backend;
mod config;
mod postgres;

pub use backend::{DatabaseBackend, RawRow, RowCursor};
#[cfg(test)]
pub use backend::VecCursor;
pub use config::{ConnectionConfig, PoolSettings};
pub use self::postgres::PostgresBackend;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to '{target}': {message}")]
    Connection { target: String, message: String },

    #[error("Query failed: {message}")]
    Query { message: String },

    #[error("Failed to read row {row}: {message}")]
    Scan { row: usize, message: String },
}

impl DbError {
    pub(crate) fn query(err: impl std::fmt::Display) -> Self {
        Self::Query {
            message: err.to_string(),
        }
    }
}
