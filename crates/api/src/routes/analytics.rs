use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use gatehouse_store::analytics::{self, Interval};

use crate::state::AppState;
use crate::{auth, csv, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/swipes", get(swipe_counts))
        .route("/unique-users", get(unique_users))
        .route("/cert-usage", get(certification_usage))
        .route("/heatmap", get(heatmap))
        .route("/export", get(export))
}

pub async fn swipe_counts(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<dto::SwipeAnalyticsQuery>,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    let interval = match Interval::parse(query.interval.as_deref().unwrap_or("day")) {
        Ok(i) => i,
        Err(e) => return errors::access_error_to_response(e),
    };

    match analytics::swipe_counts(state.service.pool(), interval).await {
        Ok(buckets) => (StatusCode::OK, Json(buckets)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn unique_users(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    match analytics::unique_user_counts(state.service.pool()).await {
        Ok(buckets) => (StatusCode::OK, Json(buckets)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn certification_usage(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    match analytics::certification_usage(state.service.pool()).await {
        Ok(usage) => (StatusCode::OK, Json(usage)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn heatmap(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    match analytics::heatmap(state.service.pool()).await {
        Ok(cells) => (StatusCode::OK, Json(cells)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

/// CSV download of the raw swipe log or the user directory.
pub async fn export(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<dto::ExportQuery>,
) -> axum::response::Response {
    if let Err(resp) = auth::require_admin(&headers, &state) {
        return resp;
    }

    let export_type = query.export_type.as_deref().unwrap_or("swipes");
    let body = match export_type {
        "swipes" => match state.service.list_swipe_events().await {
            Ok(events) => csv::render(
                &["id", "user_id", "input_value", "certification_checked", "timestamp", "result"],
                &events
                    .iter()
                    .map(|e| {
                        vec![
                            e.id.to_string(),
                            e.user_id.map(|v| v.to_string()).unwrap_or_default(),
                            e.input_value.clone(),
                            e.certification_checked
                                .map(|v| v.to_string())
                                .unwrap_or_default(),
                            e.timestamp.to_rfc3339(),
                            e.result.clone(),
                        ]
                    })
                    .collect::<Vec<_>>(),
            ),
            Err(e) => return errors::access_error_to_response(e),
        },
        "users" => match state.service.list_users(None).await {
            Ok(users) => csv::render(
                &["id", "campus_id", "email", "first_name", "last_name", "status", "role", "created_at"],
                &users
                    .iter()
                    .map(|u| {
                        vec![
                            u.id.to_string(),
                            u.campus_id.clone(),
                            u.email.clone(),
                            u.first_name.clone(),
                            u.last_name.clone(),
                            u.status.clone(),
                            u.role.clone(),
                            u.created_at.to_rfc3339(),
                        ]
                    })
                    .collect::<Vec<_>>(),
            ),
            Err(e) => return errors::access_error_to_response(e),
        },
        _ => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                "type must be one of: swipes, users",
            );
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"gatehouse_{export_type}.csv\""),
            ),
        ],
        body,
    )
        .into_response()
}
