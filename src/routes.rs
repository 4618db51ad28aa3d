//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`             - Shorten a URL sent as plain text
//! - `POST /api/shorten`  - Shorten a URL sent as JSON
//! - `GET  /{id}`         - Short link redirect
//! - anything else        - `400 Bad Request`
//!
//! # Middleware
//!
//! - **Tracing** - One span per request
//! - **Access log** - Method, URI, status, size and duration per request

use crate::api;
use crate::api::handlers::{create_short_link_handler, fallback_handler, redirect_handler};
use crate::api::middleware::{access_log, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
///
/// Both unknown paths and unsupported methods on known paths are answered by
/// [`fallback_handler`].
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_short_link_handler))
        .route("/{id}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .method_not_allowed_fallback(fallback_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(middleware::from_fn(access_log::access_log_mw)),
        )
}
