//! Shared status and outcome enums.

use serde::{Deserialize, Serialize};

/// Account lifecycle status.
///
/// `Pending` is the only initial state; `Active` and `Denied` are reached
/// solely through an administrative decision. No transition out of the
/// terminal states is defined, but a decision may overwrite either of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Pending,
    Active,
    Denied,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pending => "pending",
            UserStatus::Active => "active",
            UserStatus::Denied => "denied",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(UserStatus::Pending),
            "active" => Some(UserStatus::Active),
            "denied" => Some(UserStatus::Denied),
            _ => None,
        }
    }
}

/// Verdict of a single swipe evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeResult {
    Approved,
    Denied,
}

impl SwipeResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeResult::Approved => "approved",
            SwipeResult::Denied => "denied",
        }
    }
}

/// Outcome of an administrative account decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionOutcome {
    Active,
    Denied,
}

impl DecisionOutcome {
    /// Status the account ends up in after this decision.
    pub fn status(&self) -> UserStatus {
        match self {
            DecisionOutcome::Active => UserStatus::Active,
            DecisionOutcome::Denied => UserStatus::Denied,
        }
    }

    /// Audit action label emitted for this decision.
    pub fn action(&self) -> StaffActionKind {
        match self {
            DecisionOutcome::Active => StaffActionKind::UserActive,
            DecisionOutcome::Denied => StaffActionKind::UserDenied,
        }
    }
}

/// Audit action labels written by the state machine.
///
/// Registration and certification creation are intentionally absent: the
/// observed behavior audits decisions, grants, and revokes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffActionKind {
    UserActive,
    UserDenied,
    CertGranted,
    CertRevoked,
}

impl StaffActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffActionKind::UserActive => "user_active",
            StaffActionKind::UserDenied => "user_denied",
            StaffActionKind::CertGranted => "cert_granted",
            StaffActionKind::CertRevoked => "cert_revoked",
        }
    }
}
