//! API routes within the application. Each resource exposes a sub-router which
//! is merged into the application router by [`create_app`].
pub mod books;
pub mod sellers;

use axum::{routing::get, Json, Router};

use crate::state::AppState;

/// Assemble the complete application, with every resource router nested under
/// `prefix` (for example `/api/v1`).
pub fn create_app(state: AppState, prefix: &str) -> Router {
    let api = Router::new()
        .merge(sellers::create_router())
        .merge(books::create_router());
    let prefix = prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };
    router.route("/", get(root)).with_state(state)
}

/// Simply a healthcheck that the API is up.
async fn root() -> Json<String> {
    Json("Bookstore API is running".to_owned())
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::*;
    use crate::testing::{send, test_state};

    #[tokio::test]
    async fn healthcheck_is_outside_prefix() {
        let app = create_app(test_state().await, "/api/v1");
        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Bookstore API is running"));
    }

    #[tokio::test]
    async fn root_prefix_mounts_resources_at_top_level() {
        let app = create_app(test_state().await, "/");
        let (status, body) = send(&app, Method::GET, "/sellers/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"sellers": []}));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = create_app(test_state().await, "/api/v1");
        let (status, _) = send(&app, Method::GET, "/api/v2/sellers/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
