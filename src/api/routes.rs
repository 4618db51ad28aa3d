//! API route configuration.

use crate::api::handlers::{fallback_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Shorten a URL given as `{"url": "..."}`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .method_not_allowed_fallback(fallback_handler)
}
