//! Domain error model.

use thiserror::Error;

/// Result type used across all gatehouse layers.
pub type AccessResult<T> = Result<T, AccessError>;

/// Failure taxonomy shared by every public operation.
///
/// Keep this focused on deterministic, business-level failures plus a single
/// storage arm for the persistence layer to surface transaction failures
/// through. The HTTP boundary maps each variant to a status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Missing or malformed caller input.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A uniqueness constraint was violated (duplicate campus id, email,
    /// certification name, or grant pair).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The underlying store is unavailable or a transaction failed.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl AccessError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
