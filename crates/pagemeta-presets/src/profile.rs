//! Expert profile and directory page compositions.

use pagemeta_core::fields::first_str;
use pagemeta_core::SiteConfig;
use pagemeta_jsonld::builtin::{breadcrumb, organization, person, search_action};
use pagemeta_jsonld::{compose, Hooks};
use pagemeta_tags::assemble::{person_meta_tags, search_meta_tags};
use pagemeta_tags::MetaTags;
use serde_json::{json, Value};

use crate::PageMetadata;

/// Metadata for an expert profile page.
///
/// When the visitor arrived through search, pass the term so the breadcrumb
/// trail carries the search step.
#[must_use]
pub fn profile_page(
    expert: &Value,
    config: &SiteConfig,
    search_term: Option<&str>,
) -> PageMetadata {
    let mut crumbs = vec![json!("Home"), json!("Media Experts")];
    if let Some(term) = search_term {
        crumbs.push(json!(format!("Search: {term}")));
    }
    if let Some(name) = first_str(expert, &["name"]) {
        crumbs.push(json!(name));
    }

    let crumb_config = match search_term {
        Some(term) => config.with_search_term(term),
        None => config.clone(),
    };

    let hooks = Hooks::none();
    let blocks = compose(vec![
        person().generate(Some(expert), config, &hooks),
        breadcrumb().generate(Some(&Value::Array(crumbs)), &crumb_config, &hooks),
        organization().generate(Some(&json!({})), config, &hooks),
    ]);

    PageMetadata {
        blocks,
        meta_tags: person_meta_tags(expert, config),
    }
}

/// Metadata for the expert directory landing page.
#[must_use]
pub fn profile_directory(config: &SiteConfig) -> PageMetadata {
    let org_name = config.organization_name.as_deref().unwrap_or_default();

    let site = json!({
        "name": format!("{org_name} Media Experts"),
        "description": format!("Find {org_name} experts for media interviews"),
        "path": "/experts",
        "type": "experts",
    });

    let hooks = Hooks::none();
    let blocks = compose(vec![
        search_action().generate(Some(&site), config, &hooks),
        organization().generate(Some(&json!({})), config, &hooks),
    ]);

    let mut meta_tags = MetaTags::new();
    meta_tags.insert(
        "title".to_string(),
        format!("Media Experts - {org_name}"),
    );
    meta_tags.insert(
        "description".to_string(),
        format!("Find {org_name} experts available for media interviews"),
    );
    meta_tags.insert("canonical".to_string(), config.url_for("/experts"));
    meta_tags.insert(
        "og:title".to_string(),
        format!("{org_name} Media Experts"),
    );
    meta_tags.insert(
        "og:description".to_string(),
        "Find experts for media interviews and commentary".to_string(),
    );
    meta_tags.insert("og:type".to_string(), "website".to_string());
    meta_tags.insert("og:url".to_string(), config.url_for("/experts"));
    meta_tags.insert("twitter:card".to_string(), "summary".to_string());

    PageMetadata { blocks, meta_tags }
}

/// Metadata for an expert search results page.
#[must_use]
pub fn profile_search_results(
    results: &[Value],
    search_term: &str,
    config: &SiteConfig,
) -> PageMetadata {
    let crumbs = json!(["Home", "Media Experts", format!("Search: {search_term}")]);
    let crumb_config = config.with_search_term(search_term);

    let hooks = Hooks::none();
    let blocks = compose(vec![
        breadcrumb().generate(Some(&crumbs), &crumb_config, &hooks),
        organization().generate(Some(&json!({})), config, &hooks),
    ]);

    let search_data = json!({
        "searchTerm": search_term,
        "results": results,
        "path": "/experts",
    });

    PageMetadata {
        blocks,
        meta_tags: search_meta_tags(&search_data, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::new("https://example.edu");
        config.organization_name = Some("Example University".to_string());
        config
    }

    #[test]
    fn test_profile_page_blocks_in_priority_order() {
        let expert = json!({"id": "jdoe", "name": "Jane Doe"});

        let page = profile_page(&expert, &test_config(), None);
        let ids: Vec<&str> = page.blocks.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["person", "breadcrumb", "organization"]);
        assert_eq!(page.meta_tags["og:type"], "profile");
    }

    #[test]
    fn test_profile_page_with_search_term() {
        let expert = json!({"id": "jdoe", "name": "Jane Doe"});

        let page = profile_page(&expert, &test_config(), Some("quantum"));
        let breadcrumb_block = page
            .blocks
            .iter()
            .find(|b| b.id == "breadcrumb")
            .expect("breadcrumb");
        let names: Vec<&str> = breadcrumb_block.data["itemListElement"]
            .as_array()
            .expect("items")
            .iter()
            .filter_map(|item| item["name"].as_str())
            .collect();

        assert_eq!(
            names,
            vec!["Home", "Media Experts", "Search: quantum", "Jane Doe"]
        );
    }

    #[test]
    fn test_profile_page_with_invalid_expert_still_composes() {
        // Person generation suppresses, the rest of the pass is unaffected
        let page = profile_page(&json!({}), &test_config(), None);
        let ids: Vec<&str> = page.blocks.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["breadcrumb", "organization"]);
    }

    #[test]
    fn test_profile_directory() {
        let page = profile_directory(&test_config());
        let ids: Vec<&str> = page.blocks.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["website", "organization"]);
        assert_eq!(page.meta_tags["title"], "Media Experts - Example University");
    }

    #[test]
    fn test_profile_search_results() {
        let results = vec![json!({"id": "a"}), json!({"id": "b"})];

        let page = profile_search_results(&results, "quantum", &test_config());

        assert_eq!(
            page.meta_tags["description"],
            "2 results found for \"quantum\" at Example University"
        );
        let ids: Vec<&str> = page.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["breadcrumb", "organization"]);
    }

    #[test]
    fn test_head_html_renders_both_sections() {
        let expert = json!({"id": "jdoe", "name": "Jane Doe"});

        let html = profile_page(&expert, &test_config(), None).head_html();

        assert!(html.contains("<title>"));
        assert!(html.contains(r#"<script type="application/ld+json" id="jsonld-person">"#));
    }
}
