//! Row types mapped from the SQLite tables.
//!
//! Status and result columns stay `String` at this layer; the service parses
//! them into the core enums where a decision depends on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row type for the `users` table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: i64,
    pub campus_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Row type for the `certifications` table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct CertificationRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub scope: String,
}

/// Row type for the `user_certifications` table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct GrantRow {
    pub user_id: i64,
    pub certification_id: i64,
    pub granted_by: String,
    pub granted_at: DateTime<Utc>,
}

/// Row type for the `swipe_events` table. Append-only.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SwipeEventRow {
    pub id: i64,
    pub user_id: Option<i64>,
    pub input_value: String,
    pub certification_checked: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub result: String,
}

/// Row type for the `staff_actions` table. Append-only.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct StaffActionRow {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub performed_by: String,
    pub performed_at: DateTime<Utc>,
    pub metadata: Option<String>,
}
