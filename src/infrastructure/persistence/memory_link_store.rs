//! In-memory implementation of the link store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::repositories::{LinkStore, StoreError};

/// Link store backed by a `HashMap` behind one mutex.
///
/// Reads and writes take the same lock, so every operation is atomic with
/// respect to every other one. The lock is only held for a single map access
/// and never across an `.await`.
///
/// Entries live until the process exits; there is no eviction.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: Mutex<HashMap<String, String>>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.links
            .lock()
            .map_err(|_| StoreError::Unavailable("link store lock poisoned".to_string()))
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, key: &str) -> Result<String, StoreError> {
        self.lock()?
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
