//! Meta-tag assembly for person, video, and search pages.
//!
//! Each kind-specific function is a pure policy table: it resolves source
//! fields, sanitizes every value it emits, and computes derived defaults
//! (e.g., a description composed from available substructure when no
//! explicit description exists). Unknown kinds degrade to an empty record
//! plus a diagnostic, never a panic.

use std::collections::BTreeMap;

use pagemeta_core::diag::{Diagnostic, DiagnosticSink, TracingSink};
use pagemeta_core::fields::{field_id, first_str, first_value};
use pagemeta_core::sanitize::{sanitize_string, sanitize_string_list, sanitize_url, truncate_text};
use pagemeta_core::urlbuild::build_url;
use pagemeta_core::SiteConfig;
use serde_json::Value;

/// Flat record of emitted metadata fields, keyed by property name.
pub type MetaTags = BTreeMap<String, String>;

/// Standard description length for `<meta name="description">`.
const DESCRIPTION_LEN: usize = 160;

/// Longer description length for social preview tags.
const SOCIAL_DESCRIPTION_LEN: usize = 200;

const EXPERTISE_FIELDS: &[&str] = &["researchInterests", "expertise", "knowsAbout"];
const PHOTO_FIELDS: &[&str] = &["photoUrl", "image"];

fn put(tags: &mut MetaTags, key: &str, value: impl Into<String>) {
    let value = value.into();
    if !value.is_empty() {
        tags.insert(key.to_string(), value);
    }
}

/// Generate meta tags for a content kind (`person`, `video`, or `search`).
///
/// Unknown kinds yield an empty record and a diagnostic.
#[must_use]
pub fn generate_meta_tags(kind: &str, data: &Value, config: &SiteConfig) -> MetaTags {
    generate_meta_tags_with_sink(kind, data, config, &TracingSink)
}

/// [`generate_meta_tags`] with an explicit diagnostic sink.
#[must_use]
pub fn generate_meta_tags_with_sink(
    kind: &str,
    data: &Value,
    config: &SiteConfig,
    sink: &dyn DiagnosticSink,
) -> MetaTags {
    match kind {
        "person" => person_meta_tags(data, config),
        "video" => video_meta_tags(data, config),
        "search" => search_meta_tags(data, config),
        other => {
            sink.report(Diagnostic::warning(
                "meta",
                format!("unknown meta tag kind: {other}"),
            ));
            MetaTags::new()
        }
    }
}

/// Meta tags for a person/profile page.
#[must_use]
pub fn person_meta_tags(person: &Value, config: &SiteConfig) -> MetaTags {
    let org_name = config.organization_name.as_deref().unwrap_or_default();

    let url = field_id(person, "id")
        .and_then(|id| build_url(&config.base_url, "/experts", &[("id", id.as_str())]))
        .or_else(|| build_url(&config.base_url, "/experts", &[]))
        .unwrap_or_else(|| config.url_for("/experts"));

    let name = sanitize_string(first_str(person, &["name"]).unwrap_or_default());
    let title = sanitize_string(&format!("{name} - {org_name} Media Expert"));

    let description = derive_person_description(person, &name, org_name);
    let photo = first_str(person, PHOTO_FIELDS).and_then(sanitize_url);

    let mut tags = MetaTags::new();
    put(&mut tags, "title", &title);
    put(
        &mut tags,
        "description",
        truncate_text(&description, DESCRIPTION_LEN),
    );
    put(&mut tags, "canonical", &url);

    put(
        &mut tags,
        "og:title",
        sanitize_string(&format!("{name} - {org_name}")),
    );
    put(
        &mut tags,
        "og:description",
        truncate_text(&description, SOCIAL_DESCRIPTION_LEN),
    );
    put(&mut tags, "og:type", "profile");
    put(&mut tags, "og:url", &url);
    if let Some(photo) = &photo {
        put(&mut tags, "og:image", photo);
        put(&mut tags, "og:image:alt", format!("Photo of {name}"));
    }
    if let Some(first) = first_str(person, &["firstName"]) {
        put(&mut tags, "profile:first_name", sanitize_string(first));
    }
    if let Some(last) = first_str(person, &["lastName"]) {
        put(&mut tags, "profile:last_name", sanitize_string(last));
    }

    put(&mut tags, "twitter:card", "summary_large_image");
    put(&mut tags, "twitter:title", &title);
    put(
        &mut tags,
        "twitter:description",
        truncate_text(&description, SOCIAL_DESCRIPTION_LEN),
    );
    if let Some(photo) = &photo {
        put(&mut tags, "twitter:image", photo);
        put(&mut tags, "twitter:image:alt", format!("Photo of {name}"));
    }

    tags
}

/// Derived default: bio wins; otherwise a summary composed from expertise;
/// otherwise a fixed availability line.
fn derive_person_description(person: &Value, name: &str, org_name: &str) -> String {
    if let Some(bio) = first_str(person, &["bio"]) {
        return sanitize_string(bio);
    }

    let expertise: Vec<String> = first_value(person, EXPERTISE_FIELDS)
        .map(|source| sanitize_string_list(source, 3))
        .unwrap_or_default();

    if !expertise.is_empty() {
        let job_title = first_str(person, &["title"]).unwrap_or("expert");
        return sanitize_string(&format!(
            "{name}, {job_title} at {org_name}. Available for media interviews on {}.",
            expertise.join(", ")
        ));
    }

    format!("{name} is available for media interviews.")
}

/// Meta tags for a video page.
#[must_use]
pub fn video_meta_tags(video: &Value, config: &SiteConfig) -> MetaTags {
    let id = field_id(video, "id");
    let id_params: Vec<(&str, &str)> = match &id {
        Some(id) => vec![("id", id.as_str())],
        None => Vec::new(),
    };
    let video_url = build_url(&config.base_url, "/videos", &id_params)
        .unwrap_or_else(|| config.url_for("/videos"));
    let embed_url = build_url(&config.base_url, "/embed", &id_params)
        .unwrap_or_else(|| config.url_for("/embed"));

    let title = sanitize_string(first_str(video, &["title"]).unwrap_or_default());
    let description = first_str(video, &["description"]).unwrap_or_default();
    let thumbnail = first_str(video, &["thumbnailUrl"]).and_then(sanitize_url);

    let width = video
        .get("width")
        .and_then(Value::as_i64)
        .unwrap_or(1280)
        .to_string();
    let height = video
        .get("height")
        .and_then(Value::as_i64)
        .unwrap_or(720)
        .to_string();

    let mut tags = MetaTags::new();
    put(&mut tags, "title", &title);
    put(
        &mut tags,
        "description",
        truncate_text(description, DESCRIPTION_LEN),
    );
    put(&mut tags, "canonical", &video_url);

    put(&mut tags, "og:title", &title);
    put(
        &mut tags,
        "og:description",
        truncate_text(description, SOCIAL_DESCRIPTION_LEN),
    );
    put(&mut tags, "og:type", "video.other");
    put(&mut tags, "og:url", &video_url);
    if let Some(thumbnail) = &thumbnail {
        put(&mut tags, "og:image", thumbnail);
        put(&mut tags, "og:image:alt", format!("Thumbnail for {title}"));
    }
    put(&mut tags, "og:video", &embed_url);
    put(&mut tags, "og:video:url", &embed_url);
    put(&mut tags, "og:video:secure_url", &embed_url);
    put(&mut tags, "og:video:type", "text/html");
    put(&mut tags, "og:video:width", &width);
    put(&mut tags, "og:video:height", &height);

    put(&mut tags, "twitter:card", "player");
    put(&mut tags, "twitter:title", &title);
    put(
        &mut tags,
        "twitter:description",
        truncate_text(description, SOCIAL_DESCRIPTION_LEN),
    );
    if let Some(thumbnail) = &thumbnail {
        put(&mut tags, "twitter:image", thumbnail);
        put(
            &mut tags,
            "twitter:image:alt",
            format!("Thumbnail for {title}"),
        );
    }
    put(&mut tags, "twitter:player", &embed_url);
    put(&mut tags, "twitter:player:width", &width);
    put(&mut tags, "twitter:player:height", &height);

    tags
}

/// Meta tags for a search results page.
#[must_use]
pub fn search_meta_tags(data: &Value, config: &SiteConfig) -> MetaTags {
    let org_name = config.organization_name.as_deref().unwrap_or_default();
    let term = first_str(data, &["searchTerm"]).unwrap_or_default();
    let path = first_str(data, &["path"]).unwrap_or("/experts");
    let result_count = data
        .get("results")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);

    let url = build_url(&config.base_url, path, &[("term", term)])
        .unwrap_or_else(|| config.url_for(path));

    let title = sanitize_string(&format!("{term} - Search Results"));
    let description = sanitize_string(&format!(
        "{result_count} results found for \"{term}\" at {org_name}"
    ));

    let mut tags = MetaTags::new();
    put(&mut tags, "title", &title);
    put(
        &mut tags,
        "description",
        truncate_text(&description, DESCRIPTION_LEN),
    );
    put(&mut tags, "canonical", &url);

    put(&mut tags, "og:title", &title);
    put(
        &mut tags,
        "og:description",
        truncate_text(&description, SOCIAL_DESCRIPTION_LEN),
    );
    put(&mut tags, "og:type", "website");
    put(&mut tags, "og:url", &url);

    put(&mut tags, "twitter:card", "summary");
    put(&mut tags, "twitter:title", &title);
    put(
        &mut tags,
        "twitter:description",
        truncate_text(&description, SOCIAL_DESCRIPTION_LEN),
    );

    tags
}
