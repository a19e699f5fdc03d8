use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};

use crate::state::AppState;
use crate::{auth, dto, errors, terms};

pub fn router() -> Router {
    Router::new().route("/terms", get(get_terms).put(update_terms))
}

pub async fn get_terms(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    match terms::read_terms(&state.terms_path).await {
        Ok(text) => (StatusCode::OK, Json(serde_json::json!({ "terms": text }))).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn update_terms(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<dto::TermsUpdateRequest>,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    let Some(text) = body.terms else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_request",
            "missing field: terms",
        );
    };

    match terms::write_terms(&state.terms_path, &text).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "updated" })),
        )
            .into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}
