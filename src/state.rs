use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(store: Arc<dyn LinkStore>, base_url: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store, base_url)),
        }
    }
}
