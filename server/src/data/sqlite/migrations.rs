//! Schema initialization
//!
//! Applies the schema to a fresh database and seeds demo rows.

use sqlx::SqlitePool;

use super::error::SqliteError;
use super::schema::{SCHEMA, SCHEMA_VERSION, SEED_USERS};

/// Apply the schema if the database is new, then seed empty tables
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteError> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
    )
    .fetch_one(pool)
    .await?;

    if table_exists {
        let current_version: i32 =
            sqlx::query_scalar("SELECT version FROM schema_version WHERE id = 1")
                .fetch_optional(pool)
                .await?
                .unwrap_or(0);
        if current_version > SCHEMA_VERSION {
            return Err(SqliteError::SchemaFailed {
                version: current_version,
                error: format!("database is newer than supported version {}", SCHEMA_VERSION),
            });
        }
        tracing::debug!(version = current_version, "Database schema is up to date");
    } else {
        tracing::debug!(version = SCHEMA_VERSION, "Initializing database schema");
        apply_initial_schema(pool).await?;
    }

    seed_users(pool).await
}

async fn apply_initial_schema(pool: &SqlitePool) -> Result<(), SqliteError> {
    let start = std::time::Instant::now();

    let mut tx = pool.begin().await?;

    sqlx::raw_sql(SCHEMA)
        .execute(&mut *tx)
        .await
        .map_err(|e| SqliteError::SchemaFailed {
            version: SCHEMA_VERSION,
            error: e.to_string(),
        })?;

    let now = chrono::Utc::now().timestamp();
    sqlx::query("INSERT INTO schema_version (id, version, applied_at) VALUES (1, ?, ?)")
        .bind(SCHEMA_VERSION)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!("Applied initial schema in {}ms", start.elapsed().as_millis());
    Ok(())
}

async fn seed_users(pool: &SqlitePool) -> Result<(), SqliteError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for &(name, email, age, active, created_at) in SEED_USERS {
        sqlx::query(
            "INSERT INTO users (name, email, age, active, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(age)
        .bind(active.to_string())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::debug!(count = SEED_USERS.len(), "Seeded demo users");
    Ok(())
}
