//! Operator tables
//!
//! Maps the short codes accepted in query strings (`gt`, `rng`, ...) to the
//! SQL symbols emitted into WHERE clauses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Comparison operator of a single filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "eq")]
    Equal,
    #[serde(rename = "neq")]
    NotEqual,
    #[serde(rename = "gt")]
    GreaterThan,
    #[serde(rename = "gte")]
    GreaterOrEqual,
    #[serde(rename = "lt")]
    LessThan,
    #[serde(rename = "lte")]
    LessOrEqual,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "rng")]
    Range,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Self::Equal,
        Self::NotEqual,
        Self::GreaterThan,
        Self::GreaterOrEqual,
        Self::LessThan,
        Self::LessOrEqual,
        Self::Like,
        Self::Range,
    ];

    /// Short code used in `operator:value` tokens
    pub fn code(&self) -> &'static str {
        match self {
            Self::Equal => "eq",
            Self::NotEqual => "neq",
            Self::GreaterThan => "gt",
            Self::GreaterOrEqual => "gte",
            Self::LessThan => "lt",
            Self::LessOrEqual => "lte",
            Self::Like => "like",
            Self::Range => "rng",
        }
    }

    /// SQL symbol placed between the column and its placeholder(s)
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::Like => "LIKE",
            Self::Range => "BETWEEN",
        }
    }

    /// Resolve a query-string short code
    pub fn from_code(code: &str) -> Result<Self, QueryError> {
        Self::ALL
            .into_iter()
            .find(|op| op.code() == code)
            .ok_or_else(|| QueryError::UnknownOperator(code.to_string()))
    }

    /// Resolve a SQL symbol. `ILIKE` is accepted as an alias of [`Operator::Like`].
    pub fn from_symbol(symbol: &str) -> Result<Self, QueryError> {
        if symbol == "ILIKE" {
            return Ok(Self::Like);
        }
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| QueryError::UnsupportedOperator(symbol.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
