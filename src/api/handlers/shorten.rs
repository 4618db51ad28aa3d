//! Handlers for the link shortening endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_url;

pub const WRONG_REQUEST_PATH: &str = "Wrong request path";
pub const CANT_READ_BODY: &str = "Can't read body";
pub const INVALID_URL: &str = "Invalid URL";

/// Shortens a URL sent as the raw request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```text
/// https://practicum.yandex.ru/
/// ```
///
/// # Response
///
/// `201 Created`, `Content-Type: text/plain`:
///
/// ```text
/// http://localhost:8080/QrPnX5IU
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if:
/// - the path is not exactly `/` (`Wrong request path`)
/// - the body can't be read (`Can't read body`)
/// - the body is not an absolute URL (`Invalid URL`)
///
/// Returns 500 Internal Server Error if the store rejects the write.
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    if uri.path() != "/" {
        return Err(AppError::bad_request(WRONG_REQUEST_PATH));
    }

    let body = body.map_err(|e| {
        tracing::debug!("Failed to read request body: {}", e);
        AppError::bad_request(CANT_READ_BODY)
    })?;

    let original_url =
        std::str::from_utf8(&body).map_err(|_| AppError::bad_request(INVALID_URL))?;

    validate_url(original_url).map_err(|e| {
        tracing::debug!("Rejected URL {:?}: {}", original_url, e);
        AppError::bad_request(INVALID_URL)
    })?;

    let short_url = state.link_service.shorten(original_url).await?;

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "text/plain")],
        short_url,
    ))
}

/// Shortens a URL sent as a JSON object.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://practicum.yandex.ru" }
/// ```
///
/// # Response
///
/// `201 Created`, `Content-Type: application/json`:
///
/// ```json
/// { "result": "http://localhost:8080/ipkjUVtE" }
/// ```
///
/// Any non-empty string is accepted as `url`; unlike `POST /` no syntax
/// check is applied.
///
/// # Errors
///
/// Returns 400 Bad Request if:
/// - the body can't be read or isn't `{"url": string}` (`Can't read body`)
/// - `url` is empty or missing (`Invalid URL`)
///
/// Returns 500 Internal Server Error if the store rejects the write.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body.map_err(|e| {
        tracing::debug!("Failed to read request body: {}", e);
        AppError::bad_request(CANT_READ_BODY)
    })?;

    let request: ShortenRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Failed to parse shorten request: {}", e);
        AppError::bad_request(CANT_READ_BODY)
    })?;

    if request.url.is_empty() {
        return Err(AppError::bad_request(INVALID_URL));
    }

    let result = state.link_service.shorten(&request.url).await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse { result })))
}
