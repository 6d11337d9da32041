//! Connection parameters and pool policy.
//!
//! `ConnectionConfig` holds the resolved values (flags and config file already
//! merged, see `crate::config`). It knows how to describe itself for error
//! messages and how to build the driver's `postgres::Config`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "postgres";

/// Resolved connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub pool: PoolSettings,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            pool: PoolSettings::default(),
        }
    }
}

impl ConnectionConfig {
    /// `user@host:port/database`, safe to print (no password).
    pub fn target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }

    /// Build the driver configuration.
    pub fn to_postgres_config(&self) -> postgres::Config {
        let mut config = postgres::Config::new();
        config
            .user(&self.user)
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .application_name(env!("CARGO_PKG_NAME"))
            .connect_timeout(self.pool.connect_timeout());
        if !self.password.is_empty() {
            config.password(&self.password);
        }
        config
    }
}

/// Bounded pool policy. The values are policy, not protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSettings {
    /// Upper bound on open connections.
    pub max_open: u32,
    /// Idle connections the pool keeps warm; extra idle ones are reaped.
    pub max_idle: u32,
    /// Connections older than this are closed instead of reused.
    pub max_lifetime_secs: u64,
    /// How long connect and pool checkout may block.
    pub connect_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_open: 4,
            max_idle: 1,
            max_lifetime_secs: 100,
            connect_timeout_secs: 5,
        }
    }
}

impl PoolSettings {
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// `max_idle` clamped to `max_open`, which r2d2 requires.
    pub fn idle_target(&self) -> u32 {
        self.max_idle.min(self.max_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConnectionConfig::default();
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, "");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "postgres");
    }

    #[test]
    fn test_target_omits_password() {
        let config = ConnectionConfig {
            password: "hunter2".to_string(),
            ..ConnectionConfig::default()
        };
        assert_eq!(config.target(), "postgres@localhost:5432/postgres");
    }

    #[test]
    fn test_to_postgres_config() {
        let config = ConnectionConfig {
            user: "app".to_string(),
            password: "secret".to_string(),
            database: "shop".to_string(),
            port: 6543,
            ..ConnectionConfig::default()
        };
        let pg = config.to_postgres_config();
        assert_eq!(pg.get_user(), Some("app"));
        assert_eq!(pg.get_dbname(), Some("shop"));
        assert_eq!(pg.get_ports(), &[6543]);
        assert_eq!(pg.get_password(), Some(&b"secret"[..]));
    }

    #[test]
    fn test_empty_password_not_sent() {
        let pg = ConnectionConfig::default().to_postgres_config();
        assert_eq!(pg.get_password(), None);
    }

    #[test]
    fn test_idle_target_clamped() {
        let pool = PoolSettings {
            max_open: 2,
            max_idle: 16,
            ..PoolSettings::default()
        };
        assert_eq!(pool.idle_target(), 2);
    }

    #[test]
    fn test_pool_settings_partial_json() {
        let pool: PoolSettings = serde_json::from_str(r#"{"max_open": 10}"#).unwrap();
        assert_eq!(pool.max_open, 10);
        assert_eq!(pool.max_lifetime_secs, 100);
    }
}
