//! User repository for SQLite operations

use qparser::{Options, Select};
use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::types::UserRow;

/// Columns returned by user listings
pub const USER_COLUMNS: &[&str] = &["id", "name", "email", "age", "active", "created_at"];

type UserTuple = (i64, String, String, i64, String, String);

/// List users matching the filters and pagination in `options`
pub async fn list_users(pool: &SqlitePool, options: &Options) -> Result<Vec<UserRow>, SqliteError> {
    let select = options.apply(
        Select::from("users")
            .columns(USER_COLUMNS.iter().copied())
            .order_by("id ASC"),
    );

    let mut qb = select.to_query_builder();
    let rows: Vec<UserTuple> = qb.build_query_as().fetch_all(pool).await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, email, age, active, created_at)| UserRow {
            id,
            name,
            email,
            age,
            active: active == "true",
            created_at,
        })
        .collect())
}
