//! Filter set and predicate builder
//!
//! [`Options`] accumulates validated, normalized filter entries plus
//! pagination, then projects them onto a [`QueryTarget`].

use crate::error::{QueryError, Result};
use crate::operator::Operator;
use crate::parser::parse_token;
use crate::record::{
    FieldDescriptor, FieldMode, FieldValue, LIMIT_TAG, OFFSET_TAG, QueryRecord, Record,
};
use crate::target::{Binding, Condition, QueryTarget};
use crate::types::{FilterEntry, FilterValue};

/// Pattern-match wildcard
pub const WILDCARD: char = '%';

/// Separator between the two bounds of a range value
pub const RANGE_SEPARATOR: &str = " to ";

/// Largest accepted limit or offset (SQL binds them as signed 64-bit)
pub const MAX_PAGINATION: u64 = i64::MAX as u64;

/// Ordered filter set with pagination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    limit: u64,
    offset: u64,
    entries: Vec<FilterEntry>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract filters and pagination from a described record.
    pub fn from_record<R: QueryRecord + ?Sized>(record: &R) -> Result<Self> {
        Self::extract(record.describe())
    }

    /// Extract filters and pagination, in declaration order.
    ///
    /// Absent values, empty tags and values that stringify to nothing are
    /// skipped. The first invalid field aborts the whole extraction.
    pub fn extract(record: Record) -> Result<Self> {
        let mut options = Self::new();
        for descriptor in record {
            options.extract_field(descriptor)?;
        }

        tracing::debug!(
            filters = options.entries.len(),
            limit = options.limit,
            offset = options.offset,
            "Extracted query options"
        );
        Ok(options)
    }

    fn extract_field(&mut self, descriptor: FieldDescriptor) -> Result<()> {
        let FieldDescriptor { tag, mode, value } = descriptor;
        let Some(value) = value else {
            return Ok(());
        };
        if tag.is_empty() {
            return Ok(());
        }

        match tag.as_str() {
            LIMIT_TAG => {
                if let Some(limit) = parse_pagination(LIMIT_TAG, &value)? {
                    self.limit = limit;
                }
                return Ok(());
            }
            OFFSET_TAG => {
                if let Some(offset) = parse_pagination(OFFSET_TAG, &value)? {
                    self.offset = offset;
                }
                return Ok(());
            }
            _ => {}
        }

        let text = value.to_string();
        if text.is_empty() {
            return Ok(());
        }

        match (mode, &value) {
            (FieldMode::Exact, _) | (_, FieldValue::Bool(_)) => {
                self.add_field(&tag, text, Operator::Equal)
            }
            (FieldMode::Expression, _) => {
                let (name, operator, raw) = parse_token(&tag, &text)?.into_parts();
                self.add_field(&name, raw.to_string(), operator)
            }
        }
    }

    /// Validate, normalize and append a filter.
    ///
    /// `Like` values without a wildcard are wrapped as `%value%`. `Range`
    /// values must have the shape `low to high` with both bounds non-empty.
    pub fn add_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
        operator: Operator,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(QueryError::EmptyFieldName);
        }

        let value = value.into();
        let value = match operator {
            Operator::Like if !value.contains(WILDCARD) => {
                FilterValue::Single(format!("{WILDCARD}{value}{WILDCARD}"))
            }
            Operator::Range => split_range(&value)?,
            _ => FilterValue::Single(value),
        };

        tracing::trace!(field = %name, operator = %operator, value = %value, "Added filter");
        self.entries.push(FilterEntry::new(name, operator, value));
        Ok(())
    }

    /// Like [`Options::add_field`], with the operator given as a SQL symbol.
    pub fn add_field_symbol(
        &mut self,
        name: &str,
        value: impl Into<String>,
        symbol: &str,
    ) -> Result<()> {
        let operator = Operator::from_symbol(symbol)?;
        self.add_field(name, value, operator)
    }

    /// Project all filters onto `target`, then pagination.
    ///
    /// Conditions are added in insertion order. Offset is always set, limit
    /// only when positive. The filter set itself is left unchanged.
    pub fn apply<T: QueryTarget>(&self, target: T) -> T {
        let target = self
            .entries
            .iter()
            .fold(target, |target, entry| target.filter(condition(entry)));

        let target = target.offset(self.offset);
        let target = if self.limit > 0 {
            target.limit(self.limit)
        } else {
            target
        };

        tracing::debug!(
            filters = self.entries.len(),
            limit = self.limit,
            offset = self.offset,
            "Applied query options"
        );
        target
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn set_limit(&mut self, limit: u64) {
        self.limit = limit;
    }

    pub fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn split_range(value: &str) -> Result<FilterValue> {
    let parts: Vec<&str> = value.split(RANGE_SEPARATOR).collect();
    match parts.as_slice() {
        [low, high] if !low.is_empty() && !high.is_empty() => Ok(FilterValue::Range {
            low: low.to_string(),
            high: high.to_string(),
        }),
        _ => Err(QueryError::InvalidRangeFormat {
            value: value.to_string(),
        }),
    }
}

/// `None` when the value is blank text (no pagination requested).
///
/// Text must be plain ASCII digits; signs are rejected. Values above
/// [`MAX_PAGINATION`] are rejected rather than clamped.
fn parse_pagination(field: &str, value: &FieldValue) -> Result<Option<u64>> {
    let invalid = || QueryError::InvalidPagination {
        field: field.to_string(),
        value: value.to_string(),
    };

    let n = match value {
        FieldValue::Int(n) => u64::try_from(*n).map_err(|_| invalid())?,
        FieldValue::UInt(n) => *n,
        FieldValue::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            if !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            s.parse::<u64>().map_err(|_| invalid())?
        }
        FieldValue::Bool(_) => return Err(invalid()),
    };

    if n > MAX_PAGINATION {
        return Err(invalid());
    }
    Ok(Some(n))
}

fn condition(entry: &FilterEntry) -> Condition {
    let binding = match entry.value() {
        FilterValue::Single(v) => Binding::One(v.clone()),
        FilterValue::Range { low, high } => Binding::Two(low.clone(), high.clone()),
    };
    Condition {
        field: entry.name().to_string(),
        operator: entry.operator(),
        binding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Filter(String, Vec<String>),
        Offset(u64),
        Limit(u64),
    }

    /// Target that records every builder call in order
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl QueryTarget for Recorder {
        fn filter(mut self, condition: Condition) -> Self {
            let params = condition.params().into_iter().map(String::from).collect();
            self.calls.push(Call::Filter(condition.sql(), params));
            self
        }

        fn offset(mut self, offset: u64) -> Self {
            self.calls.push(Call::Offset(offset));
            self
        }

        fn limit(mut self, limit: u64) -> Self {
            self.calls.push(Call::Limit(limit));
            self
        }
    }

    fn filter(sql: &str, params: &[&str]) -> Call {
        Call::Filter(
            sql.to_string(),
            params.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn test_like_wraps_plain_value() {
        let mut options = Options::new();
        options.add_field("name", "jo", Operator::Like).unwrap();
        assert_eq!(options.entries()[0].value().as_single(), Some("%jo%"));
    }

    #[test]
    fn test_like_keeps_caller_wildcards() {
        let mut options = Options::new();
        options.add_field("name", "jo%", Operator::Like).unwrap();
        options.add_field("email", "%@example.com", Operator::Like).unwrap();
        assert_eq!(options.entries()[0].value().as_single(), Some("jo%"));
        assert_eq!(
            options.entries()[1].value().as_single(),
            Some("%@example.com")
        );
    }

    #[test]
    fn test_other_operators_keep_value() {
        let mut options = Options::new();
        options.add_field("age", "30", Operator::GreaterThan).unwrap();
        options.add_field("name", "50%", Operator::Equal).unwrap();
        assert_eq!(options.entries()[0].value().as_single(), Some("30"));
        assert_eq!(options.entries()[1].value().as_single(), Some("50%"));
    }

    #[test]
    fn test_range_splits_bounds() {
        let mut options = Options::new();
        options
            .add_field("created_at", "2020-01-01 to 2020-12-31", Operator::Range)
            .unwrap();

        let entry = &options.entries()[0];
        assert_eq!(entry.value().to_string(), "2020-01-01 2020-12-31");
        assert_eq!(
            entry.value().as_range(),
            Some(("2020-01-01", "2020-12-31"))
        );
    }

    #[test]
    fn test_range_keeps_bounds_with_spaces() {
        let mut options = Options::new();
        options
            .add_field(
                "created_at",
                "2020-01-01 08:00 to 2020-01-01 18:00",
                Operator::Range,
            )
            .unwrap();
        assert_eq!(
            options.entries()[0].value().as_range(),
            Some(("2020-01-01 08:00", "2020-01-01 18:00"))
        );
    }

    #[test]
    fn test_range_rejects_bad_shapes() {
        for value in ["18", "18 to ", " to 30", "1 to 2 to 3", "18 TO 30", "18to30", ""] {
            let mut options = Options::new();
            let err = options.add_field("age", value, Operator::Range).unwrap_err();
            assert_eq!(
                err,
                QueryError::InvalidRangeFormat {
                    value: value.to_string()
                },
                "value: {value:?}"
            );
            assert!(options.is_empty());
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut options = Options::new();
        assert_eq!(
            options.add_field("", "1", Operator::Equal),
            Err(QueryError::EmptyFieldName)
        );
    }

    #[test]
    fn test_add_field_symbol() {
        let mut options = Options::new();
        options.add_field_symbol("age", "30", ">=").unwrap();
        options.add_field_symbol("name", "jo", "ILIKE").unwrap();
        assert_eq!(options.entries()[0].operator(), Operator::GreaterOrEqual);
        assert_eq!(options.entries()[1].operator(), Operator::Like);
        assert_eq!(options.entries()[1].value().as_single(), Some("%jo%"));

        assert_eq!(
            options.add_field_symbol("age", "30", "=="),
            Err(QueryError::UnsupportedOperator("==".to_string()))
        );
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_apply_offset_only() {
        let mut options = Options::new();
        options.set_offset(5);

        let target = options.apply(Recorder::default());
        assert_eq!(target.calls, vec![Call::Offset(5)]);
    }

    #[test]
    fn test_apply_zero_offset_is_explicit() {
        let target = Options::new().apply(Recorder::default());
        assert_eq!(target.calls, vec![Call::Offset(0)]);
    }

    #[test]
    fn test_apply_keeps_insertion_order() {
        let mut options = Options::new();
        options.add_field("age", "30", Operator::GreaterThan).unwrap();
        options.add_field("status", "1", Operator::Equal).unwrap();
        options.set_limit(10);

        let target = options.apply(Recorder::default());
        assert_eq!(
            target.calls,
            vec![
                filter("age > ?", &["30"]),
                filter("status = ?", &["1"]),
                Call::Offset(0),
                Call::Limit(10),
            ]
        );
    }

    #[test]
    fn test_apply_same_field_twice() {
        let mut options = Options::new();
        options.add_field("age", "18", Operator::GreaterOrEqual).unwrap();
        options.add_field("age", "65", Operator::LessThan).unwrap();

        let target = options.apply(Recorder::default());
        assert_eq!(target.calls[0], filter("age >= ?", &["18"]));
        assert_eq!(target.calls[1], filter("age < ?", &["65"]));
    }

    #[test]
    fn test_apply_does_not_consume_options() {
        let mut options = Options::new();
        options.add_field("age", "30", Operator::GreaterThan).unwrap();
        let before = options.clone();

        let first = options.apply(Recorder::default());
        let second = options.apply(Recorder::default());
        assert_eq!(first.calls, second.calls);
        assert_eq!(options, before);
    }

    #[test]
    fn test_extract_range_end_to_end() {
        let record = Record::new().field("age", Some("rng:2020-01-01 to 2020-12-31"));
        let options = Options::extract(record).unwrap();

        let entry = &options.entries()[0];
        assert_eq!(entry.name(), "age");
        assert_eq!(entry.operator(), Operator::Range);
        assert_eq!(entry.operator().symbol(), "BETWEEN");
        assert_eq!(entry.value().to_string(), "2020-01-01 2020-12-31");

        let target = options.apply(Recorder::default());
        assert_eq!(
            target.calls[0],
            filter("age BETWEEN ? AND ?", &["2020-01-01", "2020-12-31"])
        );
    }

    #[test]
    fn test_extract_exact_bool_bypasses_grammar() {
        let record = Record::new().exact("active", Some(true));
        let options = Options::extract(record).unwrap();

        let entry = &options.entries()[0];
        assert_eq!(entry.name(), "active");
        assert_eq!(entry.operator(), Operator::Equal);
        assert_eq!(entry.value().as_single(), Some("true"));
    }

    #[test]
    fn test_extract_bool_field_is_equal_in_any_mode() {
        let record = Record::new().field("active", Some(true));
        let options = Options::extract(record).unwrap();

        let entry = &options.entries()[0];
        assert_eq!(entry.name(), "active");
        assert_eq!(entry.operator(), Operator::Equal);
        assert_eq!(entry.value().as_single(), Some("true"));
    }

    #[test]
    fn test_extract_exact_text_is_not_parsed() {
        let record = Record::new().exact("code", Some("gt:1"));
        let options = Options::extract(record).unwrap();
        assert_eq!(options.entries()[0].operator(), Operator::Equal);
        assert_eq!(options.entries()[0].value().as_single(), Some("gt:1"));
    }

    #[test]
    fn test_extract_skips_absent_empty_and_untagged() {
        let record = Record::new()
            .field("name", None::<&str>)
            .field("email", Some(""))
            .field("", Some("eq:ignored"))
            .exact("active", Some(""))
            .field("age", Some("gt:30"));
        let options = Options::extract(record).unwrap();

        assert_eq!(options.len(), 1);
        assert_eq!(options.entries()[0].name(), "age");
    }

    #[test]
    fn test_extract_keeps_declaration_order() {
        let record = Record::new()
            .field("status", Some("eq:1"))
            .limit(Some(20))
            .field("age", Some("gt:30"))
            .offset(Some("40"));
        let options = Options::extract(record).unwrap();

        let names: Vec<&str> = options.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["status", "age"]);
        assert_eq!(options.limit(), 20);
        assert_eq!(options.offset(), 40);
    }

    #[test]
    fn test_extract_pagination_errors() {
        let cases = [
            Record::new().limit(Some(-1)),
            Record::new().offset(Some("-5")),
            Record::new().limit(Some("ten")),
            Record::new().offset(Some("1.5")),
            Record::new().limit(Some(true)),
            Record::new().limit(Some("+5")),
            Record::new().offset(Some("-0")),
            Record::new().limit(Some(u64::MAX)),
            Record::new().offset(Some("9223372036854775808")),
        ];
        for record in cases {
            let err = Options::extract(record).unwrap_err();
            assert!(
                matches!(err, QueryError::InvalidPagination { .. }),
                "got {err:?}"
            );
        }
    }

    #[test]
    fn test_extract_pagination_text_trimmed() {
        let record = Record::new().limit(Some(" 25 ")).offset(Some(""));
        let options = Options::extract(record).unwrap();
        assert_eq!(options.limit(), 25);
        assert_eq!(options.offset(), 0);
    }

    #[test]
    fn test_extract_pagination_upper_bound() {
        let record = Record::new()
            .limit(Some(MAX_PAGINATION))
            .offset(Some("9223372036854775807"));
        let options = Options::extract(record).unwrap();
        assert_eq!(options.limit(), MAX_PAGINATION);
        assert_eq!(options.offset(), MAX_PAGINATION);
    }

    #[test]
    fn test_extract_aborts_on_first_error() {
        let record = Record::new()
            .field("age", Some("gt:30"))
            .field("name", Some("john"))
            .field("status", Some("eq:1"));
        assert_eq!(
            Options::extract(record),
            Err(QueryError::MalformedQuery {
                query: "john".to_string()
            })
        );
    }

    #[test]
    fn test_extract_propagates_range_error() {
        let record = Record::new().field("age", Some("rng:18"));
        assert!(matches!(
            Options::extract(record),
            Err(QueryError::InvalidRangeFormat { .. })
        ));
    }

    #[test]
    fn test_from_record_trait() {
        struct Query {
            name: Option<String>,
            active: Option<bool>,
        }

        impl QueryRecord for Query {
            fn describe(&self) -> Record {
                Record::new()
                    .field("name", self.name.as_deref())
                    .exact("active", self.active)
            }
        }

        let query = Query {
            name: Some("like:smith".to_string()),
            active: Some(false),
        };
        let options = Options::from_record(&query).unwrap();
        let target = options.apply(Recorder::default());
        assert_eq!(
            target.calls,
            vec![
                filter("name LIKE ?", &["%smith%"]),
                filter("active = ?", &["false"]),
                Call::Offset(0),
            ]
        );
    }
}
