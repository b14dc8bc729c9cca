//! Data storage layer
//!
//! - `sqlite` - SQLite database service and repositories
//! - `types` - Shared row types

pub mod sqlite;
pub mod types;

pub use sqlite::SqliteService;
