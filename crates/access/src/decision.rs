//! Swipe authorization decision rule.
//!
//! The rule is evaluated in order and short-circuits:
//!
//! 1. no matching user            → denied, no user id
//! 2. matched user not active     → denied, user id recorded
//! 3. no certification required   → approved
//! 4. grant held for the pair     → approved, otherwise denied
//!
//! A denied swipe for a resolved user still carries the user id so the
//! event log can attribute the attempt.

use gatehouse_core::{AccessError, AccessResult, SwipeResult, UserStatus};
use serde::Serialize;

/// The user row resolved from the presented identifier, if any.
///
/// The store guarantees at most one match: the identifier is compared
/// against campus id and email, and both columns are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedUser {
    pub user_id: i64,
    pub status: UserStatus,
}

/// Outcome of a swipe evaluation, returned to the kiosk and logged verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwipeVerdict {
    pub result: SwipeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl SwipeVerdict {
    fn denied(user_id: Option<i64>) -> Self {
        Self {
            result: SwipeResult::Denied,
            user_id,
        }
    }

    fn approved(user_id: i64) -> Self {
        Self {
            result: SwipeResult::Approved,
            user_id: Some(user_id),
        }
    }
}

/// Reject empty identifiers before touching the store.
pub fn validate_input(input_value: &str) -> AccessResult<()> {
    if input_value.trim().is_empty() {
        return Err(AccessError::invalid_request("missing field: input_value"));
    }
    Ok(())
}

/// Apply the decision rule.
///
/// `grant_held` is only consulted when a certification is required and the
/// user is active; callers may skip the grant lookup otherwise. An unmatched
/// identifier is a business outcome, never an error.
pub fn evaluate(
    matched: Option<MatchedUser>,
    certification_required: bool,
    grant_held: bool,
) -> SwipeVerdict {
    let Some(user) = matched else {
        return SwipeVerdict::denied(None);
    };
    if user.status != UserStatus::Active {
        return SwipeVerdict::denied(Some(user.user_id));
    }
    if !certification_required {
        return SwipeVerdict::approved(user.user_id);
    }
    if grant_held {
        SwipeVerdict::approved(user.user_id)
    } else {
        SwipeVerdict::denied(Some(user.user_id))
    }
}
