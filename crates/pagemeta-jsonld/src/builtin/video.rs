//! VideoObject schema generation.

use pagemeta_core::duration::format_duration;
use pagemeta_core::fields::{field_id, first_str, first_value};
use pagemeta_core::sanitize::{sanitize_string, sanitize_string_list, sanitize_url};
use pagemeta_core::urlbuild::build_url;
use pagemeta_core::SiteConfig;
use serde_json::{json, Map, Value};

use crate::generator::{Generator, TransformError, TransformResult};
use crate::vocab::{block_id, schema_type, CONTEXT};

const KEYWORD_CAP: usize = 20;

/// Build the VideoObject generator.
///
/// Requires `id` and `title` on the content record.
#[must_use]
pub fn video() -> Generator {
    Generator::new(schema_type::VIDEO_OBJECT, block_id::VIDEO, 1, generate)
}

fn generate(record: &Value, config: &SiteConfig) -> TransformResult {
    let (Some(video_id), Some(title)) = (field_id(record, "id"), first_str(record, &["title"]))
    else {
        return Ok(None);
    };

    let video_url = build_url(&config.base_url, "/videos", &[("id", video_id.as_str())])
        .ok_or_else(|| TransformError::new("base URL is not absolute"))?;
    let embed_url = build_url(&config.base_url, "/embed", &[("id", video_id.as_str())])
        .ok_or_else(|| TransformError::new("base URL is not absolute"))?;

    let mut schema = Map::new();
    schema.insert("@context".to_string(), json!(CONTEXT));
    schema.insert("@type".to_string(), json!(schema_type::VIDEO_OBJECT));
    schema.insert("@id".to_string(), json!(video_url));
    schema.insert("name".to_string(), json!(sanitize_string(title)));
    schema.insert("url".to_string(), json!(video_url));
    schema.insert("embedUrl".to_string(), json!(embed_url));

    if let Some(description) = first_str(record, &["description"]) {
        schema.insert(
            "description".to_string(),
            json!(sanitize_string(description)),
        );
    }

    if let Some(thumbnail) = first_str(record, &["thumbnailUrl"]).and_then(sanitize_url) {
        schema.insert("thumbnailUrl".to_string(), json!(thumbnail));
    }

    if let Some(content_url) = first_str(record, &["videoUrl"]).and_then(sanitize_url) {
        schema.insert("contentUrl".to_string(), json!(content_url));
    }

    if let Some(upload_date) = first_str(record, &["uploadDate"]) {
        schema.insert("uploadDate".to_string(), json!(upload_date));
    }

    if let Some(seconds) = record.get("durationSeconds").and_then(Value::as_i64) {
        if seconds > 0 {
            schema.insert("duration".to_string(), json!(format_duration(seconds)));
        }
    }

    if let (Some(width), Some(height)) = (
        record.get("width").and_then(Value::as_i64),
        record.get("height").and_then(Value::as_i64),
    ) {
        schema.insert("width".to_string(), json!(width));
        schema.insert("height".to_string(), json!(height));
    }

    if let Some(org_name) = &config.organization_name {
        let mut publisher = Map::new();
        publisher.insert("@type".to_string(), json!(schema_type::ORGANIZATION));
        publisher.insert("@id".to_string(), json!(config.base_url));
        publisher.insert("name".to_string(), json!(sanitize_string(org_name)));

        if let Some(logo) = config
            .organization_logo
            .as_deref()
            .and_then(sanitize_url)
        {
            publisher.insert(
                "logo".to_string(),
                json!({"@type": schema_type::IMAGE_OBJECT, "url": logo}),
            );
        }

        schema.insert("publisher".to_string(), Value::Object(publisher));
    }

    if let Some(creator) = first_value(record, &["creator"]) {
        if let Some(creator_name) = first_str(creator, &["name"]) {
            let mut author = Map::new();
            let author_type = first_str(creator, &["type"]).unwrap_or(schema_type::PERSON);
            author.insert("@type".to_string(), json!(author_type));
            author.insert("name".to_string(), json!(sanitize_string(creator_name)));
            if let Some(creator_url) = first_str(creator, &["url"]).and_then(sanitize_url) {
                author.insert("url".to_string(), json!(creator_url));
            }
            schema.insert("author".to_string(), Value::Object(author));
        }
    }

    if let Some(view_count) = record.get("viewCount").and_then(Value::as_i64) {
        schema.insert(
            "interactionStatistic".to_string(),
            json!({
                "@type": schema_type::INTERACTION_COUNTER,
                "interactionType": "https://schema.org/WatchAction",
                "userInteractionCount": view_count,
            }),
        );
    }

    if let Some(transcript) = first_str(record, &["transcript"]) {
        schema.insert("transcript".to_string(), json!(sanitize_string(transcript)));
    }

    if let Some(source) = first_value(record, &["keywords"]) {
        let keywords = sanitize_string_list(source, KEYWORD_CAP);
        if !keywords.is_empty() {
            schema.insert("keywords".to_string(), json!(keywords.join(", ")));
        }
    }

    if let Some(language) = first_str(record, &["language"]) {
        schema.insert("inLanguage".to_string(), json!(language));
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
    fn test_full_video() {
        let record = json!({
            "id": "v42",
            "title": "Intro to Quantum Optics",
            "description": "A lecture.",
            "thumbnailUrl": "https://example.edu/thumbs/v42.jpg",
            "videoUrl": "https://cdn.example.edu/v42.mp4",
            "uploadDate": "2024-05-01",
            "durationSeconds": 330,
            "width": 1920,
            "height": 1080,
            "creator": {"name": "Jane Doe", "url": "https://example.edu/experts?id=jdoe"},
            "viewCount": 1234,
            "keywords": ["quantum", "optics"],
            "language": "en",
        });

        let block = video()
            .generate(Some(&record), &test_config(), &Hooks::none())
            .expect("block");
        let data = &block.data;

        assert_eq!(block.id, "video");
        assert_eq!(data["@type"], "VideoObject");
        assert_eq!(data["@id"], "https://example.edu/videos?id=v42");
        assert_eq!(data["embedUrl"], "https://example.edu/embed?id=v42");
        assert_eq!(data["duration"], "PT5M30S");
        assert_eq!(data["width"], 1920);
        assert_eq!(data["publisher"]["logo"]["url"], "https://example.edu/logo.png");
        assert_eq!(data["author"]["@type"], "Person");
        assert_eq!(data["author"]["name"], "Jane Doe");
        assert_eq!(
            data["interactionStatistic"]["userInteractionCount"],
            json!(1234)
        );
        assert_eq!(data["keywords"], "quantum, optics");
        assert_eq!(data["inLanguage"], "en");
    }

    #[test]
    fn test_missing_required_fields_suppresses() {
        assert!(video()
            .generate(Some(&json!({"id": "v42"})), &test_config(), &Hooks::none())
            .is_none());
        assert!(video()
            .generate(
                Some(&json!({"title": "Untitled"})),
                &test_config(),
                &Hooks::none()
            )
            .is_none());
    }

    #[test]
    fn test_dimensions_require_both() {
        let record = json!({"id": "v1", "title": "T", "width": 1920});

        let block = video()
            .generate(Some(&record), &test_config(), &Hooks::none())
            .expect("block");

        assert!(block.data.get("width").is_none());
        assert!(block.data.get("height").is_none());
    }

    #[test]
    fn test_invalid_thumbnail_dropped() {
        let record = json!({"id": "v1", "title": "T", "thumbnailUrl": "not a url"});

        let block = video()
            .generate(Some(&record), &test_config(), &Hooks::none())
            .expect("block");

        assert!(block.data.get("thumbnailUrl").is_none());
    }

    #[test]
    fn test_no_publisher_without_organization() {
        let config = SiteConfig::new("https://example.edu");
        let record = json!({"id": "v1", "title": "T"});

        let block = video()
            .generate(Some(&record), &config, &Hooks::none())
            .expect("block");

        assert!(block.data.get("publisher").is_none());
    }
}
