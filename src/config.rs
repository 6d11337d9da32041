//! Configuration file handling and connection settings resolution.
//!
//! Settings come from three layers. Command-line flags win over the
//! `.sqlsh.json` configuration file, which wins over the built-in defaults.
//! Every field of the file is optional:
//!
//! ```json
//! {
//!   "connection": { "user": "app", "host": "db", "port": 5432, "database": "app" },
//!   "pool": { "max_open": 4, "max_idle": 1, "max_lifetime_secs": 100 },
//!   "history_file": "/home/me/.sqlsh_history"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Args;
use crate::db::{ConnectionConfig, PoolSettings};

/// Config file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".sqlsh.json";

/// History file name under `$HOME`.
pub const HISTORY_FILE_NAME: &str = ".sqlsh_history";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub connection: ConnectionSection,
    pub pool: PoolSettings,
    pub history_file: Option<PathBuf>,
}

/// Connection fields of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSection {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
}

impl ConfigFile {
    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound { path: display });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Load the explicitly named file, or `.sqlsh.json` if it exists.
    ///
    /// A missing default file yields an empty configuration; a missing
    /// explicit file is an error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Everything the shell needs after flags and file are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub connection: ConnectionConfig,
    pub history_file: Option<PathBuf>,
}

impl Settings {
    /// Merge flags over the config file over defaults.
    pub fn resolve(args: &Args, file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = ConnectionConfig::default();
        let section = file.connection;

        let connection = ConnectionConfig {
            user: pick(&args.user, section.user, defaults.user),
            password: pick(&args.password, section.password, defaults.password),
            host: pick(&args.host, section.host, defaults.host),
            port: args.port.or(section.port).unwrap_or(defaults.port),
            database: pick(&args.database, section.database, defaults.database),
            pool: file.pool,
        };
        validate_pool(&connection.pool)?;

        let history_file = file.history_file.or_else(default_history_file);

        Ok(Self {
            connection,
            history_file,
        })
    }
}

fn pick(flag: &Option<String>, file: Option<String>, default: String) -> String {
    flag.clone().or(file).unwrap_or(default)
}

fn validate_pool(pool: &PoolSettings) -> Result<(), ConfigError> {
    if pool.max_open == 0 {
        return Err(ConfigError::Invalid {
            message: "pool.max_open must be at least 1".to_string(),
        });
    }
    if pool.connect_timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            message: "pool.connect_timeout_secs must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn default_history_file() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE_NAME))
}
