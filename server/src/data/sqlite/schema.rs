//! SQLite schema definitions

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema SQL
///
/// `active` is stored as the text `'true'`/`'false'` so that exact-match
/// filters, which bind their value as text, compare without coercion.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    age INTEGER NOT NULL CHECK(age >= 0),
    active TEXT NOT NULL DEFAULT 'true' CHECK(active IN ('true', 'false')),
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_users_created ON users(created_at);
"#;

/// Demo rows inserted into an empty database: (name, email, age, active, created_at)
pub const SEED_USERS: &[(&str, &str, i64, bool, &str)] = &[
    ("Alice Martin", "alice@example.com", 28, true, "2020-02-14"),
    ("Bob Stone", "bob@example.org", 35, false, "2020-07-01"),
    ("John Smith", "john@example.com", 42, true, "2021-03-09"),
    ("Joanna Reyes", "joanna@example.net", 31, true, "2021-11-23"),
    ("Mark Jones", "mark@example.org", 57, false, "2022-05-30"),
    ("Nina Joseph", "nina@example.com", 24, true, "2023-01-17"),
];
