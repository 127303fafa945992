//! Routes for CRUD operations on sellers.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::{
    constants::passwords::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH},
    db::models::seller::Seller,
    services::sellers::{self, SellerWithBooks},
    state::AppState,
    utils::httperror::HttpError,
};

/// Create a router for routes under the seller service.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/sellers", post(create_seller).get(list_sellers))
        .route("/sellers/", post(create_seller).get(list_sellers))
        .route(
            "/sellers/{seller_id}",
            get(retrieve_seller).put(update_seller).delete(delete_seller),
        )
        .route(
            "/sellers/{seller_id}/",
            get(retrieve_seller).put(update_seller).delete(delete_seller),
        )
}

/// The response to GET /sellers.
#[derive(Serialize)]
struct ListSellersResponse {
    /// Every registered seller, without their books.
    sellers: Vec<Seller>,
}

/// Register a new seller.
async fn create_seller(
    State(state): State<AppState>,
    Json(body): Json<sellers::SellerCreate>,
) -> Result<(StatusCode, Json<Seller>), HttpError> {
    let seller = sellers::create_seller(body, &state.db_conn).await?;
    tracing::info!(seller_id = seller.id(), "Seller registered");
    Ok((StatusCode::CREATED, Json(seller)))
}

async fn list_sellers(
    State(state): State<AppState>,
) -> Result<Json<ListSellersResponse>, HttpError> {
    Ok(Json(ListSellersResponse {
        sellers: sellers::list_sellers(&state.db_conn).await?,
    }))
}

/// Get a seller by ID, along with the books they list.
async fn retrieve_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<Json<SellerWithBooks>, HttpError> {
    let seller = sellers::retrieve_seller_with_books(seller_id, &state.db_conn)
        .await?
        .ok_or_else(|| {
            tracing::warn!(seller_id, "Attempted to retrieve a seller which does not exist");
            HttpError::new(
                StatusCode::NOT_FOUND,
                Some(format!("Seller {seller_id} not found")),
            )
        })?;
    Ok(Json(seller))
}

async fn update_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
    Json(body): Json<sellers::SellerUpdate>,
) -> Result<Json<Seller>, HttpError> {
    let summary = body.to_string();
    let seller = sellers::update_seller(seller_id, body, &state.db_conn).await?;
    tracing::info!(seller_id, "Seller data updated: {summary}");
    Ok(Json(seller))
}

/// Delete a seller and every book they list.
async fn delete_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    sellers::delete_seller(seller_id, &state.db_conn).await?;
    tracing::info!(seller_id, "Seller deleted along with their books");
    Ok(StatusCode::NO_CONTENT)
}

impl From<sellers::errors::SellerCreationError> for HttpError {
    fn from(error: sellers::errors::SellerCreationError) -> Self {
        match error {
            sellers::errors::SellerCreationError::DatabaseError(err) => err.into(),
            sellers::errors::SellerCreationError::InvalidEmail(err) => {
                tracing::warn!("Rejected seller registration: {err}");
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, Some(err.to_string()))
            }
            sellers::errors::SellerCreationError::PasswordTooShort => {
                tracing::warn!("Rejected seller registration with a short password");
                Self::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Some(format!(
                        "Password is below the minimum length of {PASSWORD_MIN_LENGTH}"
                    )),
                )
            }
            sellers::errors::SellerCreationError::PasswordTooLong => {
                tracing::warn!("Rejected seller registration with a long password");
                Self::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Some(format!(
                        "Password is above the maximum length of {PASSWORD_MAX_LENGTH}"
                    )),
                )
            }
        }
    }
}

impl From<sellers::errors::SellerUpdateError> for HttpError {
    fn from(error: sellers::errors::SellerUpdateError) -> Self {
        match error {
            sellers::errors::SellerUpdateError::DatabaseError(err) => err.into(),
            sellers::errors::SellerUpdateError::InvalidEmail(err) => {
                tracing::warn!("Rejected seller update: {err}");
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, Some(err.to_string()))
            }
            sellers::errors::SellerUpdateError::NonExistent(seller_id) => {
                tracing::warn!(seller_id, "Attempted to update a seller which does not exist");
                Self::new(
                    StatusCode::NOT_FOUND,
                    Some(format!("Seller {seller_id} not found")),
                )
            }
        }
    }
}

impl From<sellers::errors::SellerDeletionError> for HttpError {
    fn from(error: sellers::errors::SellerDeletionError) -> Self {
        match error {
            sellers::errors::SellerDeletionError::DatabaseError(err) => err.into(),
            sellers::errors::SellerDeletionError::NonExistent(seller_id) => {
                tracing::warn!(seller_id, "Attempted to delete a seller which does not exist");
                Self::new(
                    StatusCode::NOT_FOUND,
                    Some(format!("Seller {seller_id} not found")),
                )
            }
        }
    }
}
