//! Video page and library compositions.

use pagemeta_core::fields::first_str;
use pagemeta_core::SiteConfig;
use pagemeta_jsonld::builtin::{breadcrumb, organization, search_action, video};
use pagemeta_jsonld::{compose, Hooks};
use pagemeta_tags::assemble::{search_meta_tags, video_meta_tags};
use pagemeta_tags::MetaTags;
use serde_json::{json, Value};

use crate::PageMetadata;

/// Metadata for a single video page.
#[must_use]
pub fn video_page(video_record: &Value, config: &SiteConfig) -> PageMetadata {
    let mut crumbs = vec![json!("Home"), json!("Videos")];
    if let Some(title) = first_str(video_record, &["title"]) {
        crumbs.push(json!(title));
    }

    let hooks = Hooks::none();
    let blocks = compose(vec![
        video().generate(Some(video_record), config, &hooks),
        breadcrumb().generate(Some(&Value::Array(crumbs)), config, &hooks),
        organization().generate(Some(&json!({})), config, &hooks),
    ]);

    PageMetadata {
        blocks,
        meta_tags: video_meta_tags(video_record, config),
    }
}

/// Metadata for the video library landing page.
#[must_use]
pub fn video_library(config: &SiteConfig) -> PageMetadata {
    let org_name = config.organization_name.as_deref().unwrap_or_default();

    let site = json!({
        "name": format!("{org_name} Video Library"),
        "description": format!("Browse and search {org_name} videos"),
        "path": "/videos",
        "type": "videos",
    });

    let hooks = Hooks::none();
    let blocks = compose(vec![
        search_action().generate(Some(&site), config, &hooks),
        organization().generate(Some(&json!({})), config, &hooks),
    ]);

    let mut meta_tags = MetaTags::new();
    meta_tags.insert(
        "title".to_string(),
        format!("Video Library - {org_name}"),
    );
    meta_tags.insert(
        "description".to_string(),
        format!("Browse and watch videos from {org_name}"),
    );
    meta_tags.insert("canonical".to_string(), config.url_for("/videos"));
    meta_tags.insert("og:title".to_string(), format!("{org_name} Videos"));
    meta_tags.insert(
        "og:description".to_string(),
        "Explore our video collection".to_string(),
    );
    meta_tags.insert("og:type".to_string(), "website".to_string());
    meta_tags.insert("og:url".to_string(), config.url_for("/videos"));
    meta_tags.insert(
        "twitter:card".to_string(),
        "summary_large_image".to_string(),
    );

    PageMetadata { blocks, meta_tags }
}

/// Metadata for a video search results page.
#[must_use]
pub fn video_search_results(
    results: &[Value],
    search_term: &str,
    config: &SiteConfig,
) -> PageMetadata {
    let crumbs = json!(["Home", "Videos", format!("Search: {search_term}")]);
    let crumb_config = config.with_search_term(search_term);

    let hooks = Hooks::none();
    let blocks = compose(vec![
        breadcrumb().generate(Some(&crumbs), &crumb_config, &hooks),
        organization().generate(Some(&json!({})), config, &hooks),
    ]);

    let search_data = json!({
        "searchTerm": search_term,
        "results": results,
        "path": "/videos",
    });

    PageMetadata {
        blocks,
        meta_tags: search_meta_tags(&search_data, config),
    }
}
