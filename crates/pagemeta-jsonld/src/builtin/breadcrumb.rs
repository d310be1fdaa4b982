//! BreadcrumbList schema generation.
//!
//! Input is the breadcrumb item array itself: plain strings or
//! `{name, url}` objects. Items without an explicit URL get one derived from
//! their position and the site sections they name.

use pagemeta_core::sanitize::sanitize_string;
use pagemeta_core::urlbuild::build_url;
use pagemeta_core::SiteConfig;
use serde_json::{json, Map, Value};

use crate::generator::{Generator, TransformResult};
use crate::vocab::{block_id, schema_type, CONTEXT};

/// Build the BreadcrumbList generator.
///
/// An empty or non-array record suppresses generation.
#[must_use]
pub fn breadcrumb() -> Generator {
    Generator::new(
        schema_type::BREADCRUMB_LIST,
        block_id::BREADCRUMB,
        2,
        generate,
    )
}

fn crumb_name(item: &Value) -> &str {
    match item {
        Value::String(name) => name,
        _ => item.get("name").and_then(Value::as_str).unwrap_or(""),
    }
}

fn generate(record: &Value, config: &SiteConfig) -> TransformResult {
    let Some(items) = record.as_array() else {
        return Ok(None);
    };
    if items.is_empty() {
        return Ok(None);
    }

    // The second crumb names the section a trailing search crumb links into
    let second_is_video = items
        .get(1)
        .map(crumb_name)
        .unwrap_or_default()
        .to_lowercase()
        .contains("video");

    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let name = crumb_name(item);
            let url = item
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| derive_url(index, name, second_is_video, config));

            let mut element = Map::new();
            element.insert("@type".to_string(), json!(schema_type::LIST_ITEM));
            element.insert("position".to_string(), json!(index + 1));
            element.insert("name".to_string(), json!(sanitize_string(name)));
            if let Some(url) = url {
                element.insert("item".to_string(), json!(url));
            }
            Value::Object(element)
        })
        .collect();

    Ok(Some(json!({
        "@context": CONTEXT,
        "@type": schema_type::BREADCRUMB_LIST,
        "itemListElement": elements,
    })))
}

/// Derive a URL for common breadcrumb patterns when none was supplied.
fn derive_url(
    index: usize,
    name: &str,
    second_is_video: bool,
    config: &SiteConfig,
) -> Option<String> {
    if index == 0 {
        return Some(config.base_url.clone());
    }

    let lowered = name.to_lowercase();
    if index == 1 && lowered.contains("expert") {
        return build_url(&config.base_url, "/experts", &[]);
    }
    if index == 1 && lowered.contains("video") {
        return build_url(&config.base_url, "/videos", &[]);
    }

    if name.starts_with("Search:") {
        if let Some(term) = &config.search_term {
            let path = if second_is_video { "/videos" } else { "/experts" };
            return build_url(&config.base_url, path, &[("term", term)]);
        }
    }

    None
}
