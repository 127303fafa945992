//! Fixtures shared by the unit tests.
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt as _;

use crate::{
    db::{
        self,
        models::{
            book::{Book, BookInsert},
            seller::{Seller, SellerInsert},
        },
        ConnectionPool,
    },
    state::AppState,
    utils::email::EmailAddress,
};

/// A freshly migrated, empty in-memory database.
pub async fn test_pool() -> ConnectionPool {
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    db::migrate(&pool).await.expect("Failed to migrate test database");
    pool
}

/// Application state backed by [`test_pool`].
pub async fn test_state() -> AppState {
    AppState {
        db_conn: test_pool().await,
    }
}

pub async fn insert_seller(
    first_name: &str,
    last_name: &str,
    e_mail: &str,
    db_conn: &ConnectionPool,
) -> Seller {
    let e_mail = EmailAddress::try_from(e_mail).expect("Invalid fixture email");
    SellerInsert::new(first_name, last_name, e_mail, "biba_boba_123")
        .store(db_conn)
        .await
        .expect("Failed to insert seller fixture")
}

pub async fn insert_book(
    title: &str,
    author: &str,
    year: u32,
    seller_id: i64,
    db_conn: &ConnectionPool,
) -> Book {
    BookInsert::new(title, author, year, 104, seller_id)
        .store(db_conn)
        .await
        .expect("Failed to insert book fixture")
}

/// Drive one request through `app` and return the status with the decoded
/// JSON body. Empty bodies become `Value::Null` and plain-text rejections
/// from extractors become `Value::String`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
