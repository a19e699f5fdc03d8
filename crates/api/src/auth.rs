//! Administrator capability check.
//!
//! A static bearer token compared against the configured value. Applied at
//! the boundary, per route, so the core never sees ambient auth state.

use axum::http::{HeaderMap, StatusCode, header};

use crate::errors::json_error;
use crate::state::AppState;

/// Require the administrator bearer token; `Err` carries the 401 response.
pub fn require_admin(headers: &HeaderMap, state: &AppState) -> Result<(), axum::response::Response> {
    let provided = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    match provided {
        Some(token) if !state.admin_token.is_empty() && token == state.admin_token => Ok(()),
        _ => Err(json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "administrator token required",
        )),
    }
}
