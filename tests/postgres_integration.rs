//! Integration tests against a live PostgreSQL server.
//!
//! These tests require a local PostgreSQL instance reachable as
//! `postgres@localhost:5432/postgres` without a password.
//! Run with: cargo test --features postgres-tests

#![cfg(feature = "postgres-tests")]

use sqlsh::db::{ConnectionConfig, DatabaseBackend, DbError, PostgresBackend};
use sqlsh::materialize::materialize;
use sqlsh::output::{OutputFormat, Outputable};

fn connect() -> PostgresBackend {
    PostgresBackend::connect(&ConnectionConfig::default())
        .expect("local postgres should accept connections")
}

#[test]
fn test_select_round_trip() {
    let backend = connect();
    let mut cursor = backend
        .execute("SELECT 1 AS id, 'a' AS name, NULL::text AS missing")
        .unwrap();
    let set = materialize(cursor.as_mut()).unwrap();

    assert_eq!(set.columns, vec!["id", "name", "missing"]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.rows[0]["id"], "1");
    assert_eq!(set.rows[0]["missing"], "");
}

#[test]
fn test_json_render_of_live_rows() {
    let backend = connect();
    let mut cursor = backend
        .execute("SELECT g AS n FROM generate_series(1, 3) AS g")
        .unwrap();
    let set = materialize(cursor.as_mut()).unwrap();

    assert_eq!(
        set.format(OutputFormat::Json).unwrap(),
        "[\n{\"n\":\"1\"},\n{\"n\":\"2\"},\n{\"n\":\"3\"}\n]"
    );
}

#[test]
fn test_statement_without_rows() {
    let backend = connect();
    let mut cursor = backend.execute("SET application_name = 'sqlsh-test'").unwrap();
    let set = materialize(cursor.as_mut()).unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_list_tables_succeeds() {
    let backend = connect();
    let tables = backend.list_tables().unwrap();
    assert!(tables.iter().all(|t| !t.starts_with("pg_")));
}

#[test]
fn test_bad_sql_is_a_query_error() {
    let backend = connect();
    let result = backend.execute("SELEC 1");
    assert!(matches!(result, Err(DbError::Query { .. })));
}

#[test]
fn test_unreachable_server_is_a_connection_error() {
    let mut config = ConnectionConfig::default();
    config.port = 1;
    config.pool.connect_timeout_secs = 1;

    let result = PostgresBackend::connect(&config);
    assert!(matches!(result, Err(DbError::Connection { .. })));
}
