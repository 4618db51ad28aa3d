#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use url_shortener::domain::repositories::{LinkStore, StoreError};
use url_shortener::infrastructure::persistence::MemoryLinkStore;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

/// Store that rejects every operation, for exercising 500 paths.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let state = AppState::new(store.clone(), BASE_URL);

    (state, store)
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingStore), BASE_URL)
}

pub async fn seed_link(store: &MemoryLinkStore, code: &str, url: &str) {
    store.set(code, url).await.unwrap();
}

/// Full application router over a fresh in-memory store.
pub fn create_test_server() -> (TestServer, Arc<MemoryLinkStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, store)
}
