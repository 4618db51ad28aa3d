//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

pub const WRONG_INPUT_URL: &str = "Wrong input URL";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Response
///
/// `307 Temporary Redirect` with `Location` set to the stored URL and an
/// empty body. 307 keeps the request method on follow, and the mapping can
/// change if a colliding URL is shortened later.
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is empty.
/// Returns 404 Not Found if nothing is stored under `id`.
/// Returns 500 Internal Server Error if the stored URL can't be sent as a
/// header value.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if id.is_empty() {
        return Err(AppError::bad_request(WRONG_INPUT_URL));
    }

    let original_url = state.link_service.resolve(&id).await?;

    let location = HeaderValue::from_str(&original_url).map_err(|_| {
        AppError::internal(format!("Stored URL for {id} is not a valid Location header"))
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
