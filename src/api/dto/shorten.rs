//! DTOs for the JSON shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/shorten`.
///
/// A missing `url` key deserializes as an empty string and is rejected by the
/// handler with the same message as `{"url": ""}`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

/// Response body for `POST /api/shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub result: String,
}
