use std::sync::Arc;

use parkrate_core::RateStore;

/// Shared application state, passed to all route handlers via `axum::extract::State`.
pub struct AppState {
    pub store: Arc<dyn RateStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RateStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }
}
