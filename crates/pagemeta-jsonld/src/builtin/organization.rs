//! Organization schema generation.

use pagemeta_core::fields::first_str;
use pagemeta_core::sanitize::{sanitize_string, sanitize_url};
use pagemeta_core::SiteConfig;
use serde_json::{json, Map, Value};

use crate::generator::{Generator, TransformResult};
use crate::vocab::{block_id, schema_type, CONTEXT};

/// Build the Organization generator.
///
/// No required fields: an empty record produces a block from configuration
/// alone. The record's `type` field overrides the default
/// `EducationalOrganization` tag.
#[must_use]
pub fn organization() -> Generator {
    Generator::new(
        schema_type::EDUCATIONAL_ORGANIZATION,
        block_id::ORGANIZATION,
        3,
        generate,
    )
}

fn generate(record: &Value, config: &SiteConfig) -> TransformResult {
    let org_type =
        first_str(record, &["type"]).unwrap_or(schema_type::EDUCATIONAL_ORGANIZATION);

    let mut schema = Map::new();
    schema.insert("@context".to_string(), json!(CONTEXT));
    schema.insert("@type".to_string(), json!(org_type));
    schema.insert("@id".to_string(), json!(config.base_url));
    schema.insert("url".to_string(), json!(config.base_url));

    let name = first_str(record, &["name"])
        .map(sanitize_string)
        .or_else(|| config.organization_name.as_deref().map(sanitize_string));
    if let Some(name) = name {
        schema.insert("name".to_string(), json!(name));
    }

    let logo = first_str(record, &["logo"])
        .or(config.organization_logo.as_deref())
        .and_then(sanitize_url);
    if let Some(logo) = logo {
        schema.insert("logo".to_string(), json!(logo));
    }

    if let Some(description) = first_str(record, &["description"]) {
        schema.insert(
            "description".to_string(),
            json!(sanitize_string(description)),
        );
    }

    Ok(Some(Value::Object(schema)))
}

#[cfg(test)]
mod tests {
    use crate::generator::Hooks;

    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::new("https://example.edu");
        config.organization_name = Some("Example University".to_string());
        config.organization_logo = Some("https://example.edu/logo.png".to_string());
        config
    }

    #[test]
    fn test_from_config_alone() {
        let block = organization()
            .generate(Some(&json!({})), &test_config(), &Hooks::none())
            .expect("block");
        let data = &block.data;

        assert_eq!(block.id, "organization");
        assert_eq!(block.priority, 3);
        assert_eq!(data["@type"], "EducationalOrganization");
        assert_eq!(data["@id"], "https://example.edu");
        assert_eq!(data["name"], "Example University");
        assert_eq!(data["logo"], "https://example.edu/logo.png");
    }

    #[test]
    fn test_record_overrides() {
        let record = json!({
            "type": "Organization",
            "name": "Example Labs",
            "logo": "https://example.edu/labs.png",
            "description": "Research division.",
        });

        let block = organization()
            .generate(Some(&record), &test_config(), &Hooks::none())
            .expect("block");
        let data = &block.data;

        assert_eq!(data["@type"], "Organization");
        assert_eq!(data["name"], "Example Labs");
        assert_eq!(data["logo"], "https://example.edu/labs.png");
        assert_eq!(data["description"], "Research division.");
    }

    #[test]
    fn test_no_name_when_unconfigured() {
        let config = SiteConfig::new("https://example.edu");

        let block = organization()
            .generate(Some(&json!({})), &config, &Hooks::none())
            .expect("block");

        assert!(block.data.get("name").is_none());
        assert!(block.data.get("logo").is_none());
    }
}
