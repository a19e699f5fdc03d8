//! Pool construction and schema migration.

use std::str::FromStr;

use gatehouse_core::{AccessError, AccessResult};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Connect to the database, creating the file if needed, and apply
/// migrations. Foreign keys are enabled on every connection; the schema
/// relies on them.
pub async fn connect(database_url: &str) -> AccessResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AccessError::storage(format!("invalid database url: {e}")))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| AccessError::storage(format!("connect failed: {e}")))?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &SqlitePool) -> AccessResult<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AccessError::storage(format!("migration failed: {e}")))
}

/// In-memory database for tests. A single connection keeps every caller on
/// the same database; `:memory:` is otherwise per-connection in SQLite.
pub async fn connect_in_memory() -> AccessResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| AccessError::storage(e.to_string()))?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| AccessError::storage(format!("connect failed: {e}")))?;

    run_migrations(&pool).await?;
    Ok(pool)
}
