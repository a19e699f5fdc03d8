//! Aggregate analytics over swipe history.
//!
//! Simple grouped counts, bucketed with SQLite `strftime`. Read-only, so
//! these run on the pool directly rather than opening a transaction.

use serde::Serialize;
use sqlx::SqlitePool;

use gatehouse_core::{AccessError, AccessResult};

/// Time-series bucket granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Day,
    Week,
    Month,
}

impl Interval {
    pub fn parse(s: &str) -> AccessResult<Self> {
        match s {
            "day" => Ok(Interval::Day),
            "week" => Ok(Interval::Week),
            "month" => Ok(Interval::Month),
            other => Err(AccessError::invalid_request(format!(
                "invalid interval: {other}"
            ))),
        }
    }

    fn bucket_format(&self) -> &'static str {
        match self {
            Interval::Day => "%Y-%m-%d",
            Interval::Week => "%Y-%W",
            Interval::Month => "%Y-%m",
        }
    }
}

/// One bucket of a time series.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct BucketCount {
    pub bucket: String,
    pub count: i64,
}

/// Swipe volume per certification.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct CertificationUsage {
    pub name: String,
    pub count: i64,
}

/// One weekday/hour cell. `day` is 0 (Sunday) through 6.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct HeatmapCell {
    pub day: String,
    pub hour: String,
    pub count: i64,
}

/// Swipe counts per bucket, newest bucket first.
pub async fn swipe_counts(pool: &SqlitePool, interval: Interval) -> AccessResult<Vec<BucketCount>> {
    let sql = format!(
        "SELECT strftime('{}', timestamp) AS bucket, COUNT(*) AS count \
         FROM swipe_events GROUP BY bucket ORDER BY bucket DESC",
        interval.bucket_format()
    );
    sqlx::query_as::<_, BucketCount>(&sql)
        .fetch_all(pool)
        .await
        .map_err(|e| AccessError::storage(e.to_string()))
}

/// Distinct resolved users per day, newest first. Unresolved swipes
/// (null user id) are excluded.
pub async fn unique_user_counts(pool: &SqlitePool) -> AccessResult<Vec<BucketCount>> {
    sqlx::query_as::<_, BucketCount>(
        "SELECT strftime('%Y-%m-%d', timestamp) AS bucket, COUNT(DISTINCT user_id) AS count \
         FROM swipe_events WHERE user_id IS NOT NULL \
         GROUP BY bucket ORDER BY bucket DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| AccessError::storage(e.to_string()))
}

/// Swipe counts per checked certification, busiest first.
pub async fn certification_usage(pool: &SqlitePool) -> AccessResult<Vec<CertificationUsage>> {
    sqlx::query_as::<_, CertificationUsage>(
        "SELECT certifications.name AS name, COUNT(swipe_events.id) AS count \
         FROM swipe_events \
         JOIN certifications ON swipe_events.certification_checked = certifications.id \
         GROUP BY certifications.name ORDER BY count DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| AccessError::storage(e.to_string()))
}

/// Weekday-by-hour swipe volume.
pub async fn heatmap(pool: &SqlitePool) -> AccessResult<Vec<HeatmapCell>> {
    sqlx::query_as::<_, HeatmapCell>(
        "SELECT strftime('%w', timestamp) AS day, strftime('%H', timestamp) AS hour, \
                COUNT(*) AS count \
         FROM swipe_events GROUP BY day, hour ORDER BY day, hour",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| AccessError::storage(e.to_string()))
}
