//! Contains database models and interaction code.
pub mod models;

use std::time::Duration;

use sqlx::any::AnyPoolOptions;

/// An alias for the pool type shared across handlers. The `Any` driver lets the
/// same queries run on Postgres in deployment and SQLite in tests.
pub type ConnectionPool = sqlx::AnyPool;

/// Tables created by [`migrate`], in dependency order, for Postgres.
const POSTGRES_SCHEMA: [&str; 2] = [
    "CREATE TABLE IF NOT EXISTS seller (
        id BIGSERIAL PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        e_mail TEXT NOT NULL,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS book (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        year BIGINT NOT NULL,
        count_pages BIGINT NOT NULL,
        seller_id BIGINT NOT NULL REFERENCES seller (id) ON DELETE CASCADE
    )",
];

/// Tables created by [`migrate`], in dependency order, for SQLite.
const SQLITE_SCHEMA: [&str; 2] = [
    "CREATE TABLE IF NOT EXISTS seller (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        e_mail TEXT NOT NULL,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS book (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        year INTEGER NOT NULL,
        count_pages INTEGER NOT NULL,
        seller_id INTEGER NOT NULL REFERENCES seller (id) ON DELETE CASCADE
    )",
];

/// Initiate a pooled connection to the database at `url`.
pub async fn connect(url: &str) -> Result<ConnectionPool, errors::DatabaseError> {
    sqlx::any::install_default_drivers();
    let options = if url.starts_with("sqlite::memory:") {
        // Every connection to an in-memory database sees its own empty
        // database, so the pool must hold exactly one and never recycle it.
        AnyPoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        AnyPoolOptions::new()
    };
    Ok(options.connect(url).await?)
}

/// Create the `seller` and `book` tables if they do not already exist.
pub async fn migrate(db_conn: &ConnectionPool) -> Result<(), errors::DatabaseError> {
    let mut conn = db_conn.acquire().await?;
    let schema = match conn.backend_name() {
        "SQLite" => &SQLITE_SCHEMA,
        _ => &POSTGRES_SCHEMA,
    };
    for statement in schema {
        sqlx::query(*statement).execute(&mut *conn).await?;
    }
    tracing::debug!(backend = conn.backend_name(), "Database schema is up to date");
    Ok(())
}

pub mod errors {
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error(transparent)]
    pub struct DatabaseError(#[from] sqlx::Error);
}
