//! SELECT statement target
//!
//! An immutable [`QueryTarget`] that renders a parameterized SELECT and can
//! be turned into an `sqlx` query builder for SQLite.

use sqlx::{QueryBuilder, Sqlite};

use crate::target::{Binding, Condition, QueryTarget};

/// Collects SQL parameters during rendering (maintains insertion order)
#[derive(Debug, Default)]
pub struct SqlParams {
    pub values: Vec<String>,
}

/// SELECT statement under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    table: String,
    columns: Vec<String>,
    conditions: Vec<Condition>,
    order_by: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            conditions: Vec::new(),
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    /// Restrict selected columns (default `*`)
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Raw ORDER BY clause, e.g. `id ASC`
    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.order_by = Some(clause.into());
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn current_limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn current_offset(&self) -> Option<u64> {
        self.offset
    }

    /// Render SQL with `?` placeholders and push bound values to `params`
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        let mut sql = self.head();

        for (i, condition) in self.conditions.iter().enumerate() {
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            sql.push_str(&condition.sql());
            params
                .values
                .extend(condition.params().into_iter().map(String::from));
        }

        if let Some(order) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        if let Some(limit) = self.limit {
            sql.push_str(" LIMIT ?");
            params.values.push(limit.to_string());
        } else if self.offset.is_some() {
            // SQLite only accepts OFFSET after a LIMIT
            sql.push_str(" LIMIT -1");
        }

        if let Some(offset) = self.offset {
            sql.push_str(" OFFSET ?");
            params.values.push(offset.to_string());
        }

        sql
    }

    /// Build an sqlx query with every value pushed as a bind
    pub fn to_query_builder(&self) -> QueryBuilder<'_, Sqlite> {
        let mut qb = QueryBuilder::new(self.head());

        for (i, condition) in self.conditions.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push(format!(
                "{} {} ",
                condition.field,
                condition.operator.symbol()
            ));
            match &condition.binding {
                Binding::One(value) => {
                    qb.push_bind(value.as_str());
                }
                Binding::Two(low, high) => {
                    qb.push_bind(low.as_str());
                    qb.push(" AND ");
                    qb.push_bind(high.as_str());
                }
            }
        }

        if let Some(order) = &self.order_by {
            qb.push(" ORDER BY ");
            qb.push(order);
        }

        if let Some(limit) = self.limit {
            qb.push(" LIMIT ");
            qb.push_bind(to_i64(limit));
        } else if self.offset.is_some() {
            qb.push(" LIMIT -1");
        }

        if let Some(offset) = self.offset {
            qb.push(" OFFSET ");
            qb.push_bind(to_i64(offset));
        }

        qb
    }

    fn head(&self) -> String {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        format!("SELECT {} FROM {}", columns, self.table)
    }
}

impl QueryTarget for Select {
    fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// SQLite binds LIMIT/OFFSET as signed 64-bit. Values past `i64::MAX` are
/// saturated, which selects the same rows: no table holds that many.
fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
