//! WebSite schema with a SearchAction entry point.

use pagemeta_core::fields::first_str;
use pagemeta_core::sanitize::sanitize_string;
use pagemeta_core::urlbuild::build_url;
use pagemeta_core::SiteConfig;
use serde_json::{json, Value};

use crate::generator::{Generator, TransformError, TransformResult};
use crate::vocab::{block_id, schema_type, CONTEXT};

/// Build the WebSite/SearchAction generator.
///
/// The record may carry `path` (default `/experts`), `name`, `description`,
/// and a `type` label used in derived defaults.
#[must_use]
pub fn search_action() -> Generator {
    Generator::new(schema_type::WEB_SITE, block_id::WEBSITE, 1, generate)
}

fn generate(record: &Value, config: &SiteConfig) -> TransformResult {
    let path = first_str(record, &["path"]).unwrap_or("/experts");
    let site_url = build_url(&config.base_url, path, &[])
        .ok_or_else(|| TransformError::new("base URL is not absolute"))?;
    let template_url = build_url(&config.base_url, path, &[("term", "{search_term}")])
        .ok_or_else(|| TransformError::new("base URL is not absolute"))?;

    let org_name = config.organization_name.as_deref().unwrap_or_default();
    let kind = first_str(record, &["type"]);

    let name = first_str(record, &["name"])
        .map(sanitize_string)
        .unwrap_or_else(|| sanitize_string(&format!("{org_name} {}", kind.unwrap_or("Directory"))));
    let description = first_str(record, &["description"])
        .map(sanitize_string)
        .unwrap_or_else(|| {
            sanitize_string(&format!("Search {org_name} {}", kind.unwrap_or("experts")))
        });

    Ok(Some(json!({
        "@context": CONTEXT,
        "@type": schema_type::WEB_SITE,
        "@id": site_url,
        "name": name,
        "description": description,
        "url": site_url,
        "potentialAction": {
            "@type": schema_type::SEARCH_ACTION,
            "target": {
                "@type": schema_type::ENTRY_POINT,
                "urlTemplate": template_url,
            },
            "query-input": "required name=search_term",
        },
        "publisher": {
            "@type": schema_type::ORGANIZATION,
            "@id": config.base_url,
            "name": sanitize_string(org_name),
        },
    })))
}
