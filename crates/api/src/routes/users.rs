use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};

use gatehouse_core::{DecisionOutcome, UserStatus};

use crate::app::performed_by_or_default;
use crate::state::AppState;
use crate::{auth, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(register).get(list_users))
        .route("/:id/approve", post(approve_user))
        .route("/:id/deny", post(deny_user))
}

/// Public registration endpoint. New accounts always start `pending`.
pub async fn register(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    let registration = body.into_registration();
    match state.service.register(&registration).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "id": id,
                "status": "pending",
            })),
        )
            .into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn list_users(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<dto::UsersQuery>,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => match UserStatus::parse(raw) {
            Some(s) => Some(s),
            None => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_request",
                    "status must be one of: pending, active, denied",
                );
            }
        },
    };

    match state.service.list_users(status).await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn approve_user(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    body: Option<Json<dto::DecideRequest>>,
) -> axum::response::Response {
    decide(state, headers, user_id, DecisionOutcome::Active, body).await
}

pub async fn deny_user(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    body: Option<Json<dto::DecideRequest>>,
) -> axum::response::Response {
    decide(state, headers, user_id, DecisionOutcome::Denied, body).await
}

async fn decide(
    state: Arc<AppState>,
    headers: HeaderMap,
    user_id: i64,
    outcome: DecisionOutcome,
    body: Option<Json<dto::DecideRequest>>,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    let performed_by =
        performed_by_or_default(body.and_then(|Json(b)| b.performed_by));

    match state.service.decide(user_id, outcome, &performed_by).await {
        Ok(status) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": status.as_str() })),
        )
            .into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}
