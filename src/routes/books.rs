//! Routes for CRUD operations on books.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::{
    db::models::book::Book,
    services::books::{self, errors::BookValidationError},
    state::AppState,
    utils::httperror::HttpError,
};

/// Create a router for routes under the book service.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/books", post(create_book).get(list_books))
        .route("/books/", post(create_book).get(list_books))
        .route(
            "/books/{book_id}",
            get(retrieve_book).put(update_book).delete(delete_book),
        )
        .route(
            "/books/{book_id}/",
            get(retrieve_book).put(update_book).delete(delete_book),
        )
}

/// The response to GET /books.
#[derive(Serialize)]
struct ListBooksResponse {
    /// Every listed book.
    books: Vec<Book>,
}

/// List a new book for an existing seller.
async fn create_book(
    State(state): State<AppState>,
    Json(body): Json<books::BookDetails>,
) -> Result<(StatusCode, Json<Book>), HttpError> {
    let book = books::create_book(body, &state.db_conn).await?;
    tracing::info!(
        book_id = book.id(),
        seller_id = book.seller_id(),
        "Book listed"
    );
    Ok((StatusCode::CREATED, Json(book)))
}

async fn list_books(State(state): State<AppState>) -> Result<Json<ListBooksResponse>, HttpError> {
    Ok(Json(ListBooksResponse {
        books: books::list_books(&state.db_conn).await?,
    }))
}

async fn retrieve_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> Result<Json<Book>, HttpError> {
    let book = books::retrieve_book(book_id, &state.db_conn)
        .await?
        .ok_or_else(|| {
            tracing::warn!(book_id, "Attempted to retrieve a book which does not exist");
            HttpError::new(
                StatusCode::NOT_FOUND,
                Some(format!("Book {book_id} not found")),
            )
        })?;
    Ok(Json(book))
}

/// Replace every field of a book.
async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    Json(body): Json<books::BookDetails>,
) -> Result<Json<Book>, HttpError> {
    let summary = body.to_string();
    let book = books::update_book(book_id, body, &state.db_conn).await?;
    tracing::info!(book_id, "Book updated: {summary}");
    Ok(Json(book))
}

async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    books::delete_book(book_id, &state.db_conn).await?;
    tracing::info!(book_id, "Book deleted");
    Ok(StatusCode::NO_CONTENT)
}

impl From<BookValidationError> for HttpError {
    fn from(error: BookValidationError) -> Self {
        match error {
            BookValidationError::DatabaseError(err) => err.into(),
            BookValidationError::YearTooEarly(_) => {
                tracing::warn!("Rejected book: {error}");
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, Some(error.to_string()))
            }
            BookValidationError::SellerNonExistent(seller_id) => {
                tracing::warn!(seller_id, "Rejected book for a seller which does not exist");
                Self::new(
                    StatusCode::NOT_FOUND,
                    Some(format!("Seller {seller_id} not found")),
                )
            }
        }
    }
}

impl From<books::errors::BookCreationError> for HttpError {
    fn from(error: books::errors::BookCreationError) -> Self {
        match error {
            books::errors::BookCreationError::DatabaseError(err) => err.into(),
            books::errors::BookCreationError::Invalid(err) => err.into(),
        }
    }
}

impl From<books::errors::BookUpdateError> for HttpError {
    fn from(error: books::errors::BookUpdateError) -> Self {
        match error {
            books::errors::BookUpdateError::DatabaseError(err) => err.into(),
            books::errors::BookUpdateError::Invalid(err) => err.into(),
            books::errors::BookUpdateError::NonExistent(book_id) => {
                tracing::warn!(book_id, "Attempted to update a book which does not exist");
                Self::new(
                    StatusCode::NOT_FOUND,
                    Some(format!("Book {book_id} not found")),
                )
            }
        }
    }
}

impl From<books::errors::BookDeletionError> for HttpError {
    fn from(error: books::errors::BookDeletionError) -> Self {
        match error {
            books::errors::BookDeletionError::DatabaseError(err) => err.into(),
            books::errors::BookDeletionError::NonExistent(book_id) => {
                tracing::warn!(book_id, "Attempted to delete a book which does not exist");
                Self::new(
                    StatusCode::NOT_FOUND,
                    Some(format!("Book {book_id} not found")),
                )
            }
        }
    }
}
