//! Structural validation of payloads and configuration.
//!
//! Validators report; they never enforce. Callers decide whether to reject a
//! payload based on the returned report.

use pagemeta_core::SiteConfig;
use serde_json::{Map, Value};
use url::Url;

use crate::vocab::schema_type;

/// Outcome of a structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True when no violations were found.
    pub valid: bool,

    /// Human-readable violations.
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

fn has_field(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(|value| !value.is_null())
}

/// Check a JSON-LD payload for structural completeness.
///
/// Flags non-object payloads, missing `@context` / `@type` markers, and
/// type-specific required fields.
#[must_use]
pub fn validate_schema(payload: &Value) -> ValidationReport {
    let Some(object) = payload.as_object() else {
        return ValidationReport::from_errors(vec!["Schema must be an object".to_string()]);
    };

    let mut errors = Vec::new();

    if !has_field(object, "@context") {
        errors.push("Missing @context".to_string());
    }

    match object.get("@type").and_then(Value::as_str) {
        None => errors.push("Missing @type".to_string()),
        Some(schema_type::PERSON) => {
            if !has_field(object, "name") {
                errors.push("Person missing name".to_string());
            }
        }
        Some(schema_type::VIDEO_OBJECT) => {
            if !has_field(object, "name") {
                errors.push("VideoObject missing name".to_string());
            }
            if !has_field(object, "uploadDate") {
                errors.push("VideoObject missing uploadDate".to_string());
            }
            if !has_field(object, "thumbnailUrl") {
                errors.push("VideoObject missing thumbnailUrl".to_string());
            }
        }
        Some(schema_type::BREADCRUMB_LIST) => {
            let items = object.get("itemListElement").and_then(Value::as_array);
            if items.is_none_or(|items| items.is_empty()) {
                errors.push("BreadcrumbList missing itemListElement array".to_string());
            }
        }
        Some(_) => {}
    }

    ValidationReport::from_errors(errors)
}

/// Check a site configuration for a usable base URL.
#[must_use]
pub fn validate_config(config: &SiteConfig) -> ValidationReport {
    let mut errors = Vec::new();

    if config.base_url.is_empty() {
        errors.push("Config missing base_url".to_string());
    } else if Url::parse(&config.base_url).is_err() {
        errors.push("Config base_url is not a valid URL".to_string());
    }

    ValidationReport::from_errors(errors)
}
