//! Article schema generation.

use pagemeta_core::fields::{field_id, first_str, first_value};
use pagemeta_core::sanitize::{sanitize_date, sanitize_string, sanitize_url};
use pagemeta_core::urlbuild::build_url;
use pagemeta_core::SiteConfig;
use serde_json::{json, Map, Value};

use crate::generator::{Generator, TransformError, TransformResult};
use crate::vocab::{block_id, schema_type, CONTEXT};

/// Build the Article generator.
///
/// Requires `id` and `title` on the content record.
#[must_use]
pub fn article() -> Generator {
    Generator::new(schema_type::ARTICLE, block_id::ARTICLE, 1, generate)
}

fn generate(record: &Value, config: &SiteConfig) -> TransformResult {
    let (Some(article_id), Some(title)) = (field_id(record, "id"), first_str(record, &["title"]))
    else {
        return Ok(None);
    };

    let article_url = build_url(&config.base_url, "/articles", &[("id", article_id.as_str())])
        .ok_or_else(|| TransformError::new("base URL is not absolute"))?;

    let mut schema = Map::new();
    schema.insert("@context".to_string(), json!(CONTEXT));
    schema.insert("@type".to_string(), json!(schema_type::ARTICLE));
    schema.insert("@id".to_string(), json!(article_url));
    schema.insert("headline".to_string(), json!(sanitize_string(title)));
    schema.insert("url".to_string(), json!(article_url));

    if let Some(description) = first_str(record, &["description"]) {
        schema.insert(
            "description".to_string(),
            json!(sanitize_string(description)),
        );
    }

    if let Some(published) = first_str(record, &["publishDate"]).and_then(sanitize_date) {
        schema.insert("datePublished".to_string(), json!(published));
    }

    if let Some(modified) = first_str(record, &["modifiedDate"]).and_then(sanitize_date) {
        schema.insert("dateModified".to_string(), json!(modified));
    }

    if let Some(author) = first_value(record, &["author"]) {
        if let Some(author_name) = first_str(author, &["name"]) {
            let mut entry = Map::new();
            entry.insert("@type".to_string(), json!(schema_type::PERSON));
            entry.insert("name".to_string(), json!(sanitize_string(author_name)));
            if let Some(author_url) = first_str(author, &["url"]).and_then(sanitize_url) {
                entry.insert("url".to_string(), json!(author_url));
            }
            schema.insert("author".to_string(), Value::Object(entry));
        }
    }

    if let Some(org_name) = &config.organization_name {
        let mut publisher = Map::new();
        publisher.insert("@type".to_string(), json!(schema_type::ORGANIZATION));
        publisher.insert("name".to_string(), json!(sanitize_string(org_name)));

        if let Some(logo) = config.organization_logo.as_deref().and_then(sanitize_url) {
            publisher.insert(
                "logo".to_string(),
                json!({"@type": schema_type::IMAGE_OBJECT, "url": logo}),
            );
        }

        schema.insert("publisher".to_string(), Value::Object(publisher));
    }

    if let Some(image) = first_str(record, &["imageUrl"]).and_then(sanitize_url) {
        schema.insert("image".to_string(), json!(image));
    }

    Ok(Some(Value::Object(schema)))
}
