//! sqlsh library - interactive SQL shell
//!
//! Provides the database backend, directive dispatch, result rendering and
//! the read-execute-print session loop behind the `sqlsh` binary.

pub mod cli;
pub mod config;
pub mod db;
pub mod dispatch;
pub mod logging;
pub mod materialize;
pub mod output;
pub mod session;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
