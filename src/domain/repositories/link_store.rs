//! Key-value store contract for short link mappings.

use async_trait::async_trait;

/// Errors reported by a [`LinkStore`] backing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No mapping exists for the requested short code.
    #[error("can't find related URL {0} in storage")]
    NotFound(String),

    /// The backing could not serve the request.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Concurrency-safe mapping from short code to original URL.
///
/// Handlers and services only ever talk to the store through this trait, so a
/// persistent backing can replace the in-memory one without touching callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - mutex-guarded `HashMap`
/// - Test mocks available with `cfg(test)`
///
/// # Semantics
///
/// - `set` on an existing key overwrites the previous value (colliding codes
///   are not detected)
/// - values are returned by clone; callers never hold references into the map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Returns the original URL stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored under `key`.
    /// Returns [`StoreError::Unavailable`] if the backing failed.
    async fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backing failed.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
