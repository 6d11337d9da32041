//! PostgreSQL backend implementation.
//!
//! Statements go through the simple query protocol so that every value comes
//! back in its textual form. Connections come from an `r2d2` pool that is
//! checked once with a liveness query before the backend is handed out.

mod conversion;

use postgres::NoTls;
use r2d2_postgres::PostgresConnectionManager;
use tracing::{debug, info};

use super::backend::{DatabaseBackend, RowCursor};
use super::config::ConnectionConfig;
use super::DbError;

pub use conversion::SimpleQueryCursor;

type Pool = r2d2::Pool<PostgresConnectionManager<NoTls>>;

const LIST_TABLES: &str = "SELECT tablename FROM pg_catalog.pg_tables \
     WHERE schemaname NOT IN ('pg_catalog', 'information_schema') \
     ORDER BY tablename";

/// PostgreSQL backend over a bounded connection pool.
pub struct PostgresBackend {
    pool: Pool,
    target: String,
}

impl PostgresBackend {
    /// Open the pool and verify the server answers.
    ///
    /// # Errors
    /// Returns `DbError::Connection` if no connection can be checked out
    /// within the connect timeout, or the liveness query fails.
    pub fn connect(config: &ConnectionConfig) -> Result<Self, DbError> {
        let manager = PostgresConnectionManager::new(config.to_postgres_config(), NoTls);
        let settings = config.pool;

        let pool = r2d2::Pool::builder()
            .max_size(settings.max_open)
            .min_idle(Some(settings.idle_target()))
            .max_lifetime(Some(settings.max_lifetime()))
            .idle_timeout(Some(settings.max_lifetime()))
            .connection_timeout(settings.connect_timeout())
            .build_unchecked(manager);

        let backend = Self {
            pool,
            target: config.target(),
        };
        backend.ping()?;

        info!(
            backend = backend.backend_name(),
            server = %backend.target,
            max_open = settings.max_open,
            "connected"
        );
        Ok(backend)
    }

    fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.pool.get().map_err(|e| self.connection_error(e))?;
        conn.simple_query("SELECT 1")
            .map_err(|e| self.connection_error(e))?;
        Ok(())
    }

    fn connection_error(&self, err: impl std::fmt::Display) -> DbError {
        DbError::Connection {
            target: self.target.clone(),
            message: err.to_string(),
        }
    }
}

impl DatabaseBackend for PostgresBackend {
    fn execute(&self, sql: &str) -> Result<Box<dyn RowCursor + '_>, DbError> {
        let mut conn = self.pool.get().map_err(DbError::query)?;
        debug!(sql, "executing statement");
        let messages = conn.simple_query(sql).map_err(DbError::query)?;
        Ok(Box::new(SimpleQueryCursor::new(messages)))
    }

    fn list_tables(&self) -> Result<Vec<String>, DbError> {
        let mut conn = self.pool.get().map_err(DbError::query)?;
        let messages = conn.simple_query(LIST_TABLES).map_err(DbError::query)?;

        let mut tables = Vec::new();
        for row in SimpleQueryCursor::new(messages) {
            if let Some(Some(name)) = row?.into_iter().next() {
                tables.push(String::from_utf8_lossy(&name).into_owned());
            }
        }
        debug!(count = tables.len(), "loaded table names");
        Ok(tables)
    }

    fn backend_name(&self) -> &'static str {
        "Postgres"
    }
}
