//! SQLite repositories
//!
//! Row types should be imported from `crate::data::types`.

pub mod user;

pub use user::{USER_COLUMNS, list_users};
