use std::sync::Arc;

use crate::application::services::UrlService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    /// Prefix used to build the short URLs shown to users.
    pub base_url: String,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, base_url: impl Into<String>) -> Self {
        Self {
            url_service,
            base_url: base_url.into(),
        }
    }
}
