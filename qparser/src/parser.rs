//! Token parsing
//!
//! Splits a raw query-string value of the form `operator:value` into a
//! [`FilterEntry`]. Values are left untouched here; normalization happens in
//! [`Options::add_field`](crate::Options::add_field).

use crate::error::{QueryError, Result};
use crate::operator::Operator;
use crate::types::{FilterEntry, FilterValue};

/// Separator between operator code and value
pub const TOKEN_SEPARATOR: char = ':';

/// Parse `raw` (e.g. `gt:30`) into an entry for field `name`.
///
/// Everything after the first colon is the value, so values may contain
/// colons themselves: `eq:10:30` yields `10:30`. Later colons are kept
/// verbatim and never rewritten as spaces.
pub fn parse_token(name: &str, raw: &str) -> Result<FilterEntry> {
    let Some((code, value)) = raw.split_once(TOKEN_SEPARATOR) else {
        return Err(malformed(raw));
    };

    if code.chars().any(char::is_whitespace) {
        return Err(malformed(raw));
    }

    let operator = Operator::from_code(code)?;
    tracing::trace!(field = %name, operator = %operator, "Parsed query token");

    Ok(FilterEntry::new(
        name,
        operator,
        FilterValue::Single(value.to_string()),
    ))
}

fn malformed(raw: &str) -> QueryError {
    QueryError::MalformedQuery {
        query: raw.to_string(),
    }
}
