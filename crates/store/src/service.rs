//! Transactional access service: state machine, decision engine, audit.
//!
//! Every public method runs as a single transaction. Uniqueness and
//! referential integrity are enforced by the schema; constraint violations
//! surface here as `Conflict`/`NotFound` rather than being pre-checked, so
//! concurrent callers cannot slip between a read and a write.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use gatehouse_access::{MatchedUser, Registration, SwipeVerdict, evaluate, validate_input};
use gatehouse_core::{AccessError, AccessResult, DecisionOutcome, StaffActionKind, UserStatus};

use crate::schema::{CertificationRow, StaffActionRow, SwipeEventRow, UserRow};

/// Stateless service over the shared pool. Clone freely.
#[derive(Clone)]
pub struct AccessService {
    pool: SqlitePool,
}

fn storage(err: sqlx::Error) -> AccessError {
    AccessError::storage(err.to_string())
}

/// Map an insert failure to the taxonomy: unique violations are conflicts,
/// foreign-key violations mean a referenced entity is missing.
fn constraint_error(err: sqlx::Error, conflict_msg: &str, missing_msg: &str) -> AccessError {
    if let sqlx::Error::Database(ref db) = err {
        if db.is_unique_violation() {
            return AccessError::conflict(conflict_msg);
        }
        if db.is_foreign_key_violation() {
            return AccessError::not_found(missing_msg);
        }
    }
    storage(err)
}

impl AccessService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Register a new user in `pending` and return its id.
    ///
    /// Not audited (intentional asymmetry with decisions and grants).
    pub async fn register(&self, registration: &Registration) -> AccessResult<i64> {
        registration.validate()?;

        let mut tx = self.pool.begin().await.map_err(storage)?;
        let result = sqlx::query(
            "INSERT INTO users (campus_id, email, first_name, last_name, status, role, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&registration.campus_id)
        .bind(&registration.email)
        .bind(&registration.first_name)
        .bind(&registration.last_name)
        .bind(UserStatus::Pending.as_str())
        .bind(registration.role_or_default())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| constraint_error(e, "user already exists", "user already exists"))?;

        let user_id = result.last_insert_rowid();
        tx.commit().await.map_err(storage)?;

        tracing::info!(user_id, "user registered");
        Ok(user_id)
    }

    /// Apply an administrative decision, overwriting any previous status,
    /// and audit it in the same transaction.
    pub async fn decide(
        &self,
        user_id: i64,
        outcome: DecisionOutcome,
        performed_by: &str,
    ) -> AccessResult<UserStatus> {
        let status = outcome.status();

        let mut tx = self.pool.begin().await.map_err(storage)?;
        let updated = sqlx::query("UPDATE users SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(storage)?;

        if updated.rows_affected() == 0 {
            return Err(AccessError::not_found("user not found"));
        }

        record(&mut tx, Some(user_id), outcome.action(), performed_by, None).await?;
        tx.commit().await.map_err(storage)?;

        tracing::info!(user_id, status = status.as_str(), performed_by, "user decided");
        Ok(status)
    }

    /// Create a certification. Not audited.
    pub async fn create_certification(
        &self,
        name: &str,
        scope: &str,
        description: Option<&str>,
    ) -> AccessResult<i64> {
        if name.trim().is_empty() || scope.trim().is_empty() {
            return Err(AccessError::invalid_request("name and scope are required"));
        }

        let mut tx = self.pool.begin().await.map_err(storage)?;
        let result = sqlx::query(
            "INSERT INTO certifications (name, description, scope) VALUES (?, ?, ?)",
        )
        .bind(name)
        .bind(description)
        .bind(scope)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            constraint_error(e, "certification already exists", "certification already exists")
        })?;

        let cert_id = result.last_insert_rowid();
        tx.commit().await.map_err(storage)?;
        Ok(cert_id)
    }

    /// Grant a certification to a user. At most one grant per pair; the
    /// composite primary key rejects duplicates.
    pub async fn grant_certification(
        &self,
        user_id: i64,
        certification_id: i64,
        granted_by: &str,
    ) -> AccessResult<()> {
        let mut tx = self.pool.begin().await.map_err(storage)?;
        sqlx::query(
            "INSERT INTO user_certifications (user_id, certification_id, granted_by, granted_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(certification_id)
        .bind(granted_by)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            constraint_error(
                e,
                "certification already granted",
                "user or certification not found",
            )
        })?;

        record(
            &mut tx,
            Some(user_id),
            StaffActionKind::CertGranted,
            granted_by,
            Some(certification_id.to_string()),
        )
        .await?;
        tx.commit().await.map_err(storage)?;

        tracing::info!(user_id, certification_id, granted_by, "certification granted");
        Ok(())
    }

    /// Revoke a grant (hard delete). `NotFound` when no grant exists.
    pub async fn revoke_certification(
        &self,
        user_id: i64,
        certification_id: i64,
        performed_by: &str,
    ) -> AccessResult<()> {
        let mut tx = self.pool.begin().await.map_err(storage)?;
        let deleted = sqlx::query(
            "DELETE FROM user_certifications WHERE user_id = ? AND certification_id = ?",
        )
        .bind(user_id)
        .bind(certification_id)
        .execute(&mut *tx)
        .await
        .map_err(storage)?;

        if deleted.rows_affected() == 0 {
            return Err(AccessError::not_found("grant not found"));
        }

        record(
            &mut tx,
            Some(user_id),
            StaffActionKind::CertRevoked,
            performed_by,
            Some(certification_id.to_string()),
        )
        .await?;
        tx.commit().await.map_err(storage)?;

        tracing::info!(user_id, certification_id, performed_by, "certification revoked");
        Ok(())
    }

    /// Evaluate a swipe and log exactly one event, atomically.
    ///
    /// The identifier is matched against campus id or email; both columns are
    /// unique so at most one row can match. A non-matching identifier is a
    /// `denied` outcome, never an error. The logged result always equals the
    /// returned result because the verdict is computed once, before the
    /// insert, inside the same transaction as the lookup.
    pub async fn evaluate_swipe(
        &self,
        input_value: &str,
        certification_id: Option<i64>,
    ) -> AccessResult<SwipeVerdict> {
        validate_input(input_value)?;

        let mut tx = self.pool.begin().await.map_err(storage)?;

        let matched = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, status FROM users WHERE campus_id = ? OR email = ?",
        )
        .bind(input_value)
        .bind(input_value)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage)?
        .map(|(user_id, status)| {
            UserStatus::parse(&status)
                .map(|status| MatchedUser { user_id, status })
                .ok_or_else(|| AccessError::storage(format!("corrupt user status: {status}")))
        })
        .transpose()?;

        // Grant lookup only matters when the rule can reach step 4.
        let mut grant_held = false;
        if let (Some(user), Some(cert_id)) = (matched, certification_id) {
            if user.status == UserStatus::Active {
                grant_held = sqlx::query_as::<_, (i64,)>(
                    "SELECT 1 FROM user_certifications WHERE user_id = ? AND certification_id = ?",
                )
                .bind(user.user_id)
                .bind(cert_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(storage)?
                .is_some();
            }
        }

        let verdict = evaluate(matched, certification_id.is_some(), grant_held);

        sqlx::query(
            "INSERT INTO swipe_events (user_id, input_value, certification_checked, timestamp, result) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(verdict.user_id)
        .bind(input_value)
        .bind(certification_id)
        .bind(Utc::now())
        .bind(verdict.result.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| constraint_error(e, "swipe already logged", "certification not found"))?;

        tx.commit().await.map_err(storage)?;

        tracing::debug!(
            result = verdict.result.as_str(),
            user_id = verdict.user_id,
            "swipe evaluated"
        );
        Ok(verdict)
    }

    /// List users, optionally filtered by status.
    pub async fn list_users(&self, status: Option<UserStatus>) -> AccessResult<Vec<UserRow>> {
        let rows = match status {
            Some(s) => {
                sqlx::query_as::<_, UserRow>(
                    "SELECT * FROM users WHERE status = ? ORDER BY id",
                )
                .bind(s.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, UserRow>("SELECT * FROM users ORDER BY id")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(storage)?;
        Ok(rows)
    }

    pub async fn list_certifications(&self) -> AccessResult<Vec<CertificationRow>> {
        sqlx::query_as::<_, CertificationRow>("SELECT * FROM certifications ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)
    }

    /// Full swipe log, oldest first. Feeds the CSV export.
    pub async fn list_swipe_events(&self) -> AccessResult<Vec<SwipeEventRow>> {
        sqlx::query_as::<_, SwipeEventRow>("SELECT * FROM swipe_events ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)
    }

    /// Full audit trail, oldest first.
    pub async fn list_staff_actions(&self) -> AccessResult<Vec<StaffActionRow>> {
        sqlx::query_as::<_, StaffActionRow>("SELECT * FROM staff_actions ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)
    }
}

/// Append a staff action inside the caller's transaction.
///
/// Fails only on storage unavailability; the commit is owned by the caller so
/// an audit row never lands without its mutation (and vice versa).
async fn record(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    user_id: Option<i64>,
    action: StaffActionKind,
    performed_by: &str,
    metadata: Option<String>,
) -> AccessResult<()> {
    let conn: &mut SqliteConnection = &mut *tx;
    sqlx::query(
        "INSERT INTO staff_actions (user_id, action, performed_by, performed_at, metadata) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(action.as_str())
    .bind(performed_by)
    .bind(Utc::now())
    .bind(metadata)
    .execute(conn)
    .await
    .map_err(storage)?;
    Ok(())
}
