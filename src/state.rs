//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::config::StorageBackend;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub storage: StorageBackend,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, storage: StorageBackend) -> Self {
        Self {
            url_service,
            storage,
        }
    }
}
