use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    response::IntoResponse,
    routing::get,
};

use crate::routes;
use crate::state::AppState;

/// Assemble the full router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::api_router())
        .layer(Extension(state))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Attribution for administrative mutations when the request body names
/// nobody.
pub fn performed_by_or_default(provided: Option<String>) -> String {
    provided
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| "admin".to_string())
}
