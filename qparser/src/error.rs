//! Query parsing errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors raised while turning query parameters into filters.
///
/// All variants are deterministic input-validation failures: the whole
/// extraction is aborted and the caller maps them to a client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("bad query '{query}', use operator:value")]
    MalformedQuery { query: String },

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(String),

    #[error("invalid {field} '{value}': must be a non-negative integer")]
    InvalidPagination { field: String, value: String },

    #[error("invalid usage of operator rng '{value}', use rng:value1 to value2")]
    InvalidRangeFormat { value: String },

    #[error("field name cannot be empty")]
    EmptyFieldName,
}

impl QueryError {
    /// Stable machine-readable code for API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedQuery { .. } => "MALFORMED_QUERY",
            Self::UnknownOperator(_) => "UNKNOWN_OPERATOR",
            Self::UnsupportedOperator(_) => "UNSUPPORTED_OPERATOR",
            Self::InvalidPagination { .. } => "INVALID_PAGINATION",
            Self::InvalidRangeFormat { .. } => "INVALID_RANGE_FORMAT",
            Self::EmptyFieldName => "EMPTY_FIELD_NAME",
        }
    }
}
