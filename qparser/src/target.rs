//! Query target seam
//!
//! [`Options::apply`](crate::Options::apply) projects filters onto any
//! [`QueryTarget`]. Targets are consumed and returned, so every step yields
//! a fresh builder value instead of mutating a shared handle.

use crate::operator::Operator;

/// Values bound to a condition's placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    One(String),
    Two(String, String),
}

/// A parameterized WHERE-clause condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub binding: Binding,
}

impl Condition {
    /// SQL fragment with `?` placeholders, e.g. `age BETWEEN ? AND ?`
    pub fn sql(&self) -> String {
        match self.binding {
            Binding::One(_) => format!("{} {} ?", self.field, self.operator.symbol()),
            Binding::Two(..) => format!("{} {} ? AND ?", self.field, self.operator.symbol()),
        }
    }

    /// Bound values in placeholder order
    pub fn params(&self) -> Vec<&str> {
        match &self.binding {
            Binding::One(v) => vec![v.as_str()],
            Binding::Two(low, high) => vec![low.as_str(), high.as_str()],
        }
    }
}

/// A query builder that accepts conjunctive conditions and pagination
pub trait QueryTarget: Sized {
    /// Add a condition, ANDed with every condition added before it
    fn filter(self, condition: Condition) -> Self;

    fn offset(self, offset: u64) -> Self;

    fn limit(self, limit: u64) -> Self;
}
