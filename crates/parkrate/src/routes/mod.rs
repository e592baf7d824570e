pub mod error;
pub mod rates;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const HEALTH_PATH: &str = "/health";

/// Assemble the full application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(rates::routes())
        .route(HEALTH_PATH, get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
