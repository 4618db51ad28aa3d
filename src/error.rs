use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::repositories::StoreError;

/// Errors returned by handlers and services.
///
/// Rendered as a plain-text body holding only the message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed client input: wrong path, unreadable body, invalid URL.
    #[error("{0}")]
    Validation(String),
    /// Requested short code is not stored.
    #[error("{0}")]
    NotFound(String),
    /// Unmatched route or unsupported method on a known route.
    #[error("Bad Request")]
    BadRoute,
    /// Storage or response construction failed; the client input was fine.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Creates a [`AppError::Validation`] answered with `400 Bad Request`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a [`AppError::NotFound`] answered with `404 Not Found`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a [`AppError::Internal`] answered with `500 Internal Server Error`.
    ///
    /// The message is sent to the client as the body and logged at `ERROR`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status the error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRoute => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::not_found("URL not found"),
            StoreError::Unavailable(_) => AppError::internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self);
        }

        (status, self.to_string()).into_response()
    }
}
