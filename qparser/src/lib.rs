//! Query-string filters for relational queries
//!
//! Turns request parameters such as `age=gt:30` or
//! `created_at=rng:2020-01-01 to 2020-12-31` into parameterized, conjunctive
//! WHERE conditions plus LIMIT/OFFSET.
//!
//! ## Token grammar
//!
//! | Code   | SQL       | Example                    |
//! |--------|-----------|----------------------------|
//! | `eq`   | `=`       | `status=eq:open`           |
//! | `neq`  | `<>`      | `status=neq:closed`        |
//! | `gt`   | `>`       | `age=gt:30`                |
//! | `gte`  | `>=`      | `age=gte:30`               |
//! | `lt`   | `<`       | `age=lt:30`                |
//! | `lte`  | `<=`      | `age=lte:30`               |
//! | `like` | `LIKE`    | `name=like:jo` (`%jo%`)    |
//! | `rng`  | `BETWEEN` | `age=rng:18 to 30`         |
//!
//! ## Usage
//!
//! ```
//! use qparser::{Options, Record, Select, SqlParams};
//!
//! let record = Record::new()
//!     .field("age", Some("gt:30"))
//!     .exact("active", Some(true))
//!     .limit(Some(10));
//!
//! let options = Options::extract(record).unwrap();
//! let select = options.apply(Select::from("users"));
//!
//! let mut params = SqlParams::default();
//! assert_eq!(
//!     select.to_sql(&mut params),
//!     "SELECT * FROM users WHERE age > ? AND active = ? LIMIT ? OFFSET ?"
//! );
//! assert_eq!(params.values, vec!["30", "true", "10", "0"]);
//! ```

mod error;
mod operator;
mod options;
mod parser;
mod record;
mod select;
mod target;
mod types;

pub use error::{QueryError, Result};
pub use operator::Operator;
pub use options::{MAX_PAGINATION, Options, RANGE_SEPARATOR, WILDCARD};
pub use parser::{TOKEN_SEPARATOR, parse_token};
pub use record::{
    FieldDescriptor, FieldMode, FieldValue, LIMIT_TAG, OFFSET_TAG, QueryRecord, Record,
};
pub use select::{Select, SqlParams};
pub use target::{Binding, Condition, QueryTarget};
pub use types::{FilterEntry, FilterValue};
