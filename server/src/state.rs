//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and middleware via the
//! `State` extractor. The guard is stateless per request; the state only
//! carries the shared HTTP client and the backend seam, so concurrent
//! requests never touch shared mutable data.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::backend::{Backend, HttpBackend};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Shared HTTP client, reused by the backend seam and the API proxy.
    pub http: reqwest::Client,
    /// Upstream read operations used by the edge guard.
    pub backend: Arc<dyn Backend>,
    /// Base URL of the external marketplace backend.
    pub api_base_url: String,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let http = reqwest::Client::new();
        let backend = Arc::new(HttpBackend::new(http.clone(), config.api_base_url.clone()));
        Self { http, backend, api_base_url: config.api_base_url.clone() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
