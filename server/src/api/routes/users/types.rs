//! User API request and response types

use qparser::{QueryRecord, Record};
use serde::{Deserialize, Serialize};

use crate::data::types::UserRow;

/// Query string accepted by `GET /api/v1/users`
///
/// Text fields carry `operator:value` tokens; `active` is matched exactly.
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub created_at: Option<String>,
    pub active: Option<bool>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl QueryRecord for UserQuery {
    fn describe(&self) -> Record {
        Record::new()
            .field("name", self.name.as_ref())
            .field("email", self.email.as_ref())
            .field("age", self.age.as_ref())
            .field("created_at", self.created_at.as_ref())
            .exact("active", self.active)
            .limit(self.limit.as_ref())
            .offset(self.offset.as_ref())
    }
}

/// User DTO for API responses
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub active: bool,
    pub created_at: String,
}

impl From<UserRow> for UserDto {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            age: row.age,
            active: row.active,
            created_at: row.created_at,
        }
    }
}
