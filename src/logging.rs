//! Diagnostic logging on stderr.
//!
//! Query results own stdout, so every log line goes to stderr. `RUST_LOG`
//! takes precedence over the `--log-level` flag when it is set.

use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Noisy dependency targets held at `warn` unless asked for explicitly.
const QUIET_TARGETS: &[&str] = &["rustyline", "tokio_postgres", "postgres"];

/// Build the filter from `RUST_LOG`, falling back to `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    filter_for_level(level)
}

fn filter_for_level(level: &str) -> Result<EnvFilter, LoggingError> {
    let mut directives = vec![level.to_string()];
    directives.extend(QUIET_TARGETS.iter().map(|target| format!("{}=warn", target)));

    let filter = directives.join(",");
    EnvFilter::try_new(&filter).map_err(|e| LoggingError::InvalidFilter {
        filter,
        message: e.to_string(),
    })
}

/// Install the global subscriber.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let filter = build_filter(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
