//! Input sanitization for generated metadata.
//!
//! Every function here is total: invalid input degrades to an empty string,
//! `None`, or an empty list instead of panicking. Content records are only
//! partially trusted, so generators pass every field they emit through one of
//! these.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::Value;
use url::Url;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Sanitize a string for use in metadata output.
///
/// Strips ASCII control characters, collapses whitespace runs to a single
/// space, and trims. Idempotent.
#[must_use]
pub fn sanitize_string(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| !c.is_ascii_control()).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validate and normalize an absolute URL.
///
/// Returns the normalized form, or `None` for relative or malformed input.
#[must_use]
pub fn sanitize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok().map(|url| url.to_string())
}

/// Validate an email address against a permissive `local@domain.tld` pattern.
///
/// Returns the lower-cased, trimmed address, or `None`.
#[must_use]
pub fn sanitize_email(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if EMAIL_RE.is_match(trimmed) {
        Some(trimmed.to_lowercase())
    } else {
        None
    }
}

/// Filter and cap a JSON array.
///
/// Drops null elements, applies the optional predicate, and truncates to
/// `max_len`, preserving relative order. Non-array input yields an empty
/// vector.
#[must_use]
pub fn sanitize_array(
    value: &Value,
    max_len: usize,
    predicate: Option<&dyn Fn(&Value) -> bool>,
) -> Vec<Value> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| !item.is_null())
        .filter(|item| predicate.is_none_or(|pred| pred(item)))
        .take(max_len)
        .cloned()
        .collect()
}

/// Extract a capped list of sanitized, non-empty strings from a JSON array.
#[must_use]
pub fn sanitize_string_list(value: &Value, max_len: usize) -> Vec<String> {
    let non_empty_string =
        |item: &Value| item.as_str().is_some_and(|s| !s.trim().is_empty());

    sanitize_array(value, max_len, Some(&non_empty_string))
        .iter()
        .filter_map(Value::as_str)
        .map(sanitize_string)
        .collect()
}

/// Truncate text to a maximum length in characters, appending an ellipsis
/// marker when cut. Character-boundary safe for multi-byte input.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }

    let keep = max_chars.saturating_sub(3);
    let cut: String = trimmed.chars().take(keep).collect();
    format!("{cut}...")
}

/// Validate a date field as RFC 3339 or `YYYY-MM-DD`.
///
/// Returns the normalized form, or `None`.
#[must_use]
pub fn sanitize_date(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.to_rfc3339());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}
