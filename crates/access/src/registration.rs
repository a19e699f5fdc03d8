//! Registration intake validation.

use gatehouse_core::{AccessError, AccessResult};
use serde::{Deserialize, Serialize};

/// A registration request as presented by the kiosk.
///
/// All accounts enter the lifecycle in `pending`; the role is free-form and
/// defaults to `"student"` when not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub campus_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub terms_accepted: bool,
}

impl Registration {
    /// Validate caller input before any storage work happens.
    ///
    /// Uniqueness of campus id and email is not checked here; that is the
    /// store's constraint to enforce, closing the race between concurrent
    /// registrations.
    pub fn validate(&self) -> AccessResult<()> {
        for (field, value) in [
            ("campus_id", &self.campus_id),
            ("email", &self.email),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
        ] {
            if value.trim().is_empty() {
                return Err(AccessError::invalid_request(format!(
                    "missing field: {field}"
                )));
            }
        }
        if !self.terms_accepted {
            return Err(AccessError::invalid_request("terms must be accepted"));
        }
        Ok(())
    }

    /// Role to persist, falling back to the default.
    pub fn role_or_default(&self) -> &str {
        self.role
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or("student")
    }
}
