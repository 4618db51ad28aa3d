//! # URL Shortener
//!
//! A small URL shortening service built with Axum. Long URLs are mapped to
//! 8-character codes derived from their SHA-256 hash and kept in memory for
//! the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link store trait and its errors
//! - **Application Layer** ([`application`]) - Shortening and resolution service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `POST /` - plain-text body in, plain-text short URL out
//! - `POST /api/shorten` - `{"url": "..."}` in, `{"result": "..."}` out
//! - `GET /{id}` - 307 redirect to the original URL
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- -a localhost:8080 -b http://localhost:8080
//!
//! curl -d 'https://practicum.yandex.ru/' http://localhost:8080/
//! # http://localhost:8080/QrPnX5IU
//! ```
//!
//! ## Configuration
//!
//! Flags and environment variables are described in the [`config`] module.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::repositories::{LinkStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryLinkStore;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
