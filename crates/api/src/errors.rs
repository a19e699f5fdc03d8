use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gatehouse_core::AccessError;

/// Map the access taxonomy onto HTTP statuses:
/// `InvalidRequest`→400, `Conflict`→409, `NotFound`→404, `Storage`→500.
pub fn access_error_to_response(err: AccessError) -> axum::response::Response {
    match err {
        AccessError::InvalidRequest(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_request", msg)
        }
        AccessError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        AccessError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        AccessError::Storage(msg) => {
            tracing::error!(error = %msg, "storage failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
