//! Link shortening and resolution service.

use std::sync::Arc;

use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service for creating and resolving short links.
///
/// Codes are derived from the URL content, so shortening the same URL twice
/// writes the same mapping twice and returns the same short URL.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// # Arguments
    ///
    /// - `store` - backing for code → URL mappings
    /// - `base_url` - public prefix for short links, e.g. `http://localhost:8080`
    pub fn new(store: Arc<dyn LinkStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// Stores `original_url` under its derived code and returns the short URL.
    ///
    /// A single write is attempted; failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the write.
    pub async fn shorten(&self, original_url: &str) -> Result<String, AppError> {
        let code = generate_code(original_url.as_bytes());

        self.store
            .set(&code, original_url)
            .await
            .map_err(|e| AppError::internal(e.to_string()))?;

        tracing::debug!(code = %code, "Stored short link");

        Ok(self.short_url(&code))
    }

    /// Returns the original URL stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] if the store failed.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        Ok(self.store.get(code).await?)
    }

    /// Composes the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
