//! Defines the state shared across the Axum application.
use crate::db;

#[derive(Clone)]
/// The state struct shared across routers.
pub struct AppState {
    /// A database connection pool for getting new database connections.
    pub db_conn: db::ConnectionPool,
}
