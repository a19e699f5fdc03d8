use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::state::AppState;
use crate::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/swipe", post(swipe))
}

/// Public: the kiosk's access check. One logged event per request,
/// approved or denied; an unknown identifier is a denial, not an error.
pub async fn swipe(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::SwipeRequest>,
) -> axum::response::Response {
    match state
        .service
        .evaluate_swipe(&body.input_value, body.certification_id)
        .await
    {
        Ok(verdict) => (StatusCode::OK, Json(verdict)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}
