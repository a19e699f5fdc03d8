//! Request payloads.
//!
//! Required string fields default to empty and are validated by the domain
//! layer, so a missing field surfaces as a 400 `invalid_request` rather than
//! a deserialization rejection.

use serde::Deserialize;

use gatehouse_access::Registration;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub campus_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Option<String>,
    #[serde(default)]
    pub terms_accepted: bool,
}

impl RegisterRequest {
    pub fn into_registration(self) -> Registration {
        Registration {
            campus_id: self.campus_id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            terms_accepted: self.terms_accepted,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DecideRequest {
    pub performed_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCertificationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub scope: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GrantRequest {
    pub user_id: Option<i64>,
    pub granted_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RevokeRequest {
    pub user_id: Option<i64>,
    pub performed_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    #[serde(default)]
    pub input_value: String,
    pub certification_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TermsUpdateRequest {
    pub terms: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SwipeAnalyticsQuery {
    pub interval: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(rename = "type")]
    pub export_type: Option<String>,
}
