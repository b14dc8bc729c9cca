//! SQLite error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Schema {version} failed to apply: {error}")]
    SchemaFailed { version: i32, error: String },
}
