//! Filter entry types

use std::fmt;

use serde::Serialize;

use crate::operator::Operator;

/// Value of a filter entry
///
/// Range bounds are kept apart so they survive even when a bound itself
/// contains a space. `Display` joins them with a single space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Range { low: String, high: String },
}

impl FilterValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(v) => Some(v),
            Self::Range { .. } => None,
        }
    }

    pub fn as_range(&self) -> Option<(&str, &str)> {
        match self {
            Self::Single(_) => None,
            Self::Range { low, high } => Some((low, high)),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => f.write_str(v),
            Self::Range { low, high } => write!(f, "{} {}", low, high),
        }
    }
}

/// A single `name <operator> value` condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterEntry {
    name: String,
    operator: Operator,
    value: FilterValue,
}

impl FilterEntry {
    pub(crate) fn new(name: impl Into<String>, operator: Operator, value: FilterValue) -> Self {
        Self {
            name: name.into(),
            operator,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    pub fn into_parts(self) -> (String, Operator, FilterValue) {
        (self.name, self.operator, self.value)
    }
}
