mod constants;
mod db;
mod routes;
mod services;
mod state;
#[cfg(test)]
mod testing;
mod utils;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    constants::{
        api::{API_BIND_ADDRESS, API_URI_PREFIX},
        db::DB_URL,
    },
    state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db_conn = db::connect(&DB_URL)
        .await
        .expect("Failed to connect to the database");
    db::migrate(&db_conn)
        .await
        .expect("Failed to create the database schema");

    let app = routes::create_app(AppState { db_conn }, &API_URI_PREFIX);
    let listener = tokio::net::TcpListener::bind(API_BIND_ADDRESS.as_str())
        .await
        .expect("Failed to bind listener");
    tracing::info!(
        address = %*API_BIND_ADDRESS,
        prefix = %*API_URI_PREFIX,
        "Bookstore API listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to init Axum service");
}

/// Resolves once the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for the shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
