//! Blog article page composition.

use pagemeta_core::fields::{field_id, first_str};
use pagemeta_core::sanitize::{sanitize_string, sanitize_url, truncate_text};
use pagemeta_core::urlbuild::build_url;
use pagemeta_core::SiteConfig;
use pagemeta_jsonld::builtin::{article, breadcrumb, organization};
use pagemeta_jsonld::{compose, Hooks};
use pagemeta_tags::MetaTags;
use serde_json::{json, Value};

use crate::PageMetadata;

/// Metadata for a blog article page.
#[must_use]
pub fn article_page(article_record: &Value, config: &SiteConfig) -> PageMetadata {
    let mut crumbs = vec![json!("Home"), json!("Blog")];
    if let Some(title) = first_str(article_record, &["title"]) {
        crumbs.push(json!(title));
    }

    let hooks = Hooks::none();
    let blocks = compose(vec![
        article().generate(Some(article_record), config, &hooks),
        breadcrumb().generate(Some(&Value::Array(crumbs)), config, &hooks),
        organization().generate(Some(&json!({})), config, &hooks),
    ]);

    PageMetadata {
        blocks,
        meta_tags: article_meta_tags(article_record, config),
    }
}

fn article_meta_tags(record: &Value, config: &SiteConfig) -> MetaTags {
    let url = field_id(record, "id")
        .and_then(|id| build_url(&config.base_url, "/articles", &[("id", id.as_str())]))
        .unwrap_or_else(|| config.url_for("/articles"));

    let title = sanitize_string(first_str(record, &["title"]).unwrap_or_default());
    let description = first_str(record, &["description"]).unwrap_or_default();
    let image = first_str(record, &["imageUrl"]).and_then(sanitize_url);

    let mut tags = MetaTags::new();
    if !title.is_empty() {
        tags.insert("title".to_string(), title.clone());
        tags.insert("og:title".to_string(), title.clone());
        tags.insert("twitter:title".to_string(), title.clone());
    }
    if !description.is_empty() {
        tags.insert(
            "description".to_string(),
            truncate_text(description, 160),
        );
        tags.insert(
            "og:description".to_string(),
            truncate_text(description, 200),
        );
        tags.insert(
            "twitter:description".to_string(),
            truncate_text(description, 200),
        );
    }
    tags.insert("canonical".to_string(), url.clone());
    tags.insert("og:type".to_string(), "article".to_string());
    tags.insert("og:url".to_string(), url);
    if let Some(image) = &image {
        tags.insert("og:image".to_string(), image.clone());
        tags.insert("og:image:alt".to_string(), title.clone());
        tags.insert("twitter:image".to_string(), image.clone());
        tags.insert("twitter:image:alt".to_string(), title.clone());
    }
    if let Some(published) = first_str(record, &["publishDate"]) {
        tags.insert("article:published_time".to_string(), published.to_string());
    }
    if let Some(modified) = first_str(record, &["modifiedDate"]) {
        tags.insert("article:modified_time".to_string(), modified.to_string());
    }
    if let Some(author_name) = record
        .get("author")
        .and_then(|author| first_str(author, &["name"]))
    {
        tags.insert(
            "article:author".to_string(),
            sanitize_string(author_name),
        );
    }
    tags.insert(
        "twitter:card".to_string(),
        "summary_large_image".to_string(),
    );

    tags
}
