use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};

use crate::app::performed_by_or_default;
use crate::state::AppState;
use crate::{auth, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_certification).get(list_certifications))
        .route("/:id/grant", post(grant_certification))
        .route("/:id/revoke", post(revoke_certification))
}

pub async fn create_certification(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<dto::CreateCertificationRequest>,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    match state
        .service
        .create_certification(&body.name, &body.scope, body.description.as_deref())
        .await
    {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id, "status": "created" })),
        )
            .into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

/// Public: the kiosk needs the certification list to populate its picker.
pub async fn list_certifications(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    match state.service.list_certifications().await {
        Ok(certs) => (StatusCode::OK, Json(certs)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn grant_certification(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(certification_id): Path<i64>,
    Json(body): Json<dto::GrantRequest>,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    let Some(user_id) = body.user_id else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_request",
            "missing field: user_id",
        );
    };
    let Some(granted_by) = body.granted_by.filter(|g| !g.trim().is_empty()) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_request",
            "missing field: granted_by",
        );
    };

    match state
        .service
        .grant_certification(user_id, certification_id, &granted_by)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "granted" })),
        )
            .into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn revoke_certification(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(certification_id): Path<i64>,
    Json(body): Json<dto::RevokeRequest>,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    let Some(user_id) = body.user_id else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_request",
            "missing field: user_id",
        );
    };
    let performed_by = performed_by_or_default(body.performed_by);

    match state
        .service
        .revoke_certification(user_id, certification_id, &performed_by)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "revoked" })),
        )
            .into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}
