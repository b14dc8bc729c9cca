//! Record descriptors
//!
//! A request type describes its query fields once through [`QueryRecord`];
//! [`Options::from_record`](crate::Options::from_record) then extracts
//! filters from any such type without runtime introspection.
//!
//! ```
//! use qparser::{Options, QueryRecord, Record};
//!
//! struct UserQuery {
//!     name: Option<String>,
//!     active: Option<bool>,
//!     limit: Option<i64>,
//! }
//!
//! impl QueryRecord for UserQuery {
//!     fn describe(&self) -> Record {
//!         Record::new()
//!             .field("name", self.name.as_deref())
//!             .exact("active", self.active)
//!             .limit(self.limit)
//!     }
//! }
//!
//! let query = UserQuery {
//!     name: Some("like:jo".to_string()),
//!     active: Some(true),
//!     limit: Some(10),
//! };
//! let options = Options::from_record(&query).unwrap();
//! assert_eq!(options.len(), 2);
//! assert_eq!(options.limit(), 10);
//! ```

use std::fmt;

/// Reserved tag mapped to [`Options::limit`](crate::Options::limit)
pub const LIMIT_TAG: &str = "limit";

/// Reserved tag mapped to [`Options::offset`](crate::Options::offset)
pub const OFFSET_TAG: &str = "offset";

/// How a field's value becomes a filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldMode {
    /// Value is an `operator:value` token
    #[default]
    Expression,
    /// Value is compared with `=` as-is, bypassing the token grammar
    Exact,
}

/// Current value of a declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::UInt(u) => write!(f, "{}", u),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

/// One declared query field: tag, behavior and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub tag: String,
    pub mode: FieldMode,
    /// `None` means the field was absent from the request
    pub value: Option<FieldValue>,
}

/// Ordered list of field descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<FieldDescriptor>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field whose value is an `operator:value` token
    pub fn field<V: Into<FieldValue>>(self, tag: impl Into<String>, value: Option<V>) -> Self {
        self.push(tag.into(), FieldMode::Expression, value.map(Into::into))
    }

    /// Declare an exact-match field (e.g. a boolean flag)
    pub fn exact<V: Into<FieldValue>>(self, tag: impl Into<String>, value: Option<V>) -> Self {
        self.push(tag.into(), FieldMode::Exact, value.map(Into::into))
    }

    pub fn limit<V: Into<FieldValue>>(self, value: Option<V>) -> Self {
        self.field(LIMIT_TAG, value)
    }

    pub fn offset<V: Into<FieldValue>>(self, value: Option<V>) -> Self {
        self.field(OFFSET_TAG, value)
    }

    pub fn push_descriptor(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn push(self, tag: String, mode: FieldMode, value: Option<FieldValue>) -> Self {
        self.push_descriptor(FieldDescriptor { tag, mode, value })
    }
}

impl IntoIterator for Record {
    type Item = FieldDescriptor;
    type IntoIter = std::vec::IntoIter<FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Types that can describe their query fields
pub trait QueryRecord {
    fn describe(&self) -> Record;
}

impl QueryRecord for Record {
    fn describe(&self) -> Record {
        self.clone()
    }
}
