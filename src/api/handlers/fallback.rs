//! Catch-all for unmatched routes and methods.

use crate::error::AppError;

/// Answers `400 Bad Request` for any path or method without a handler.
///
/// Wired both as the router fallback and as the method-not-allowed fallback,
/// so a wrong verb on a known path gets the same answer as an unknown path.
pub async fn fallback_handler() -> AppError {
    AppError::BadRoute
}
