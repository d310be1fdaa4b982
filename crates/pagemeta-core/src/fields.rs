//! Alternate-field resolution for loosely-typed content records.
//!
//! Content records arrive with no shape guarantee and often carry the same
//! information under different names (`researchInterests` vs `expertise`).
//! Generators declare an ordered policy table of candidate field names; the
//! first present value wins.

use serde_json::Value;

/// Resolve the first non-empty string among the candidate fields.
#[must_use]
pub fn first_str<'a>(record: &'a Value, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|name| {
        record
            .get(*name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    })
}

/// Resolve the first non-null value among the candidate fields.
#[must_use]
pub fn first_value<'a>(record: &'a Value, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .find_map(|name| record.get(*name).filter(|v| !v.is_null()))
}

/// Resolve an identifier field that may arrive as a string or a number.
#[must_use]
pub fn field_id(record: &Value, name: &str) -> Option<String> {
    match record.get(name)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
