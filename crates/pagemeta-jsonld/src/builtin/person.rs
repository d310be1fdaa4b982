//! Person schema generation.

use pagemeta_core::fields::{field_id, first_str, first_value};
use pagemeta_core::sanitize::{
    sanitize_array, sanitize_email, sanitize_string, sanitize_string_list, sanitize_url,
};
use pagemeta_core::text::{extract_honorific, parse_name_parts};
use pagemeta_core::urlbuild::build_url;
use pagemeta_core::SiteConfig;
use serde_json::{json, Map, Value};

use crate::generator::{Generator, TransformError, TransformResult};
use crate::vocab::{block_id, schema_type, CONTEXT};

/// Alternate source fields, first present wins.
const PHOTO_FIELDS: &[&str] = &["photoUrl", "image"];
const EXPERTISE_FIELDS: &[&str] = &["researchInterests", "expertise", "knowsAbout"];
const BIO_FIELDS: &[&str] = &["bio", "description"];
const AWARD_FIELDS: &[&str] = &["awards", "honors"];

/// Build the Person generator.
///
/// Requires `id` and `name` on the content record; everything else is
/// optional.
#[must_use]
pub fn person() -> Generator {
    Generator::new(schema_type::PERSON, block_id::PERSON, 1, generate)
}

fn generate(record: &Value, config: &SiteConfig) -> TransformResult {
    let (Some(person_id), Some(name)) = (field_id(record, "id"), first_str(record, &["name"]))
    else {
        return Ok(None);
    };

    let person_url = build_url(&config.base_url, "/experts", &[("id", person_id.as_str())])
        .ok_or_else(|| TransformError::new("base URL is not absolute"))?;

    let name_parts = parse_name_parts(
        name,
        first_str(record, &["firstName"]),
        first_str(record, &["lastName"]),
    );

    let mut schema = Map::new();
    schema.insert("@context".to_string(), json!(CONTEXT));
    schema.insert("@type".to_string(), json!(schema_type::PERSON));
    schema.insert("@id".to_string(), json!(person_url));
    schema.insert("url".to_string(), json!(person_url));
    schema.insert("name".to_string(), json!(sanitize_string(name)));

    if !name_parts.first_name.is_empty() {
        schema.insert(
            "givenName".to_string(),
            json!(sanitize_string(&name_parts.first_name)),
        );
    }
    if !name_parts.last_name.is_empty() {
        schema.insert(
            "familyName".to_string(),
            json!(sanitize_string(&name_parts.last_name)),
        );
    }
    if let Some(honorific) = extract_honorific(name) {
        schema.insert("honorificPrefix".to_string(), json!(honorific));
    }

    if let Some(photo) = first_str(record, PHOTO_FIELDS).and_then(sanitize_url) {
        schema.insert("image".to_string(), json!(photo));
    }

    if let Some(title) = first_str(record, &["title"]) {
        schema.insert("jobTitle".to_string(), json!(sanitize_string(title)));
    }

    if let Some(org_name) = &config.organization_name {
        schema.insert(
            "worksFor".to_string(),
            json!({
                "@type": schema_type::ORGANIZATION,
                "@id": config.base_url,
                "name": sanitize_string(org_name),
            }),
        );
    }

    if let Some(source) = first_value(record, EXPERTISE_FIELDS) {
        let expertise = sanitize_string_list(source, config.limits.max_expertise_items);
        if !expertise.is_empty() {
            schema.insert("knowsAbout".to_string(), json!(expertise));
        }
    }

    if let Some(bio) = first_str(record, BIO_FIELDS) {
        schema.insert("description".to_string(), json!(sanitize_string(bio)));
    }

    insert_contact_point(&mut schema, record, config);
    insert_education(&mut schema, record, config);

    if let Some(source) = first_value(record, AWARD_FIELDS) {
        let awards = sanitize_string_list(source, config.limits.max_awards);
        if !awards.is_empty() {
            schema.insert("award".to_string(), json!(awards));
        }
    }

    insert_affiliation(&mut schema, record, config);

    Ok(Some(Value::Object(schema)))
}

fn insert_contact_point(schema: &mut Map<String, Value>, record: &Value, config: &SiteConfig) {
    let email = first_str(record, &["email"]).and_then(sanitize_email);
    if email.is_none() && config.media_contact_email.is_none() {
        return;
    }

    let mut contact = Map::new();
    contact.insert("@type".to_string(), json!(schema_type::CONTACT_POINT));
    contact.insert("contactType".to_string(), json!("Media Relations"));

    // The organization-wide media contact wins over a personal address
    if let Some(address) = config.media_contact_email.clone().or(email) {
        contact.insert("email".to_string(), json!(address));
    }

    let languages = match first_value(record, &["languages"]) {
        Some(source) => sanitize_string_list(source, 10),
        None => config
            .default_languages
            .iter()
            .map(|lang| sanitize_string(lang))
            .collect(),
    };
    if !languages.is_empty() {
        contact.insert("availableLanguage".to_string(), json!(languages));
    }

    schema.insert("contactPoint".to_string(), Value::Object(contact));
}

fn insert_education(schema: &mut Map<String, Value>, record: &Value, config: &SiteConfig) {
    let Some(source) = first_value(record, &["education"]) else {
        return;
    };

    let has_institution =
        |entry: &Value| first_str(entry, &["institution", "name"]).is_some();
    let entries = sanitize_array(source, config.limits.max_education, Some(&has_institution));
    if entries.is_empty() {
        return;
    }

    let alumni: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let institution = first_str(entry, &["institution", "name"]).unwrap_or_default();
            json!({
                "@type": schema_type::ORGANIZATION,
                "name": sanitize_string(institution),
            })
        })
        .collect();

    schema.insert("alumniOf".to_string(), json!(alumni));
}

fn insert_affiliation(schema: &mut Map<String, Value>, record: &Value, config: &SiteConfig) {
    let Some(department) = first_str(record, &["department"]) else {
        return;
    };

    let mut affiliation = Map::new();
    affiliation.insert("@type".to_string(), json!(schema_type::ORGANIZATION));
    affiliation.insert("name".to_string(), json!(sanitize_string(department)));

    if let Some(org_name) = &config.organization_name {
        affiliation.insert(
            "parentOrganization".to_string(),
            json!({
                "@type": schema_type::ORGANIZATION,
                "@id": config.base_url,
                "name": sanitize_string(org_name),
            }),
        );
    }

    schema.insert("affiliation".to_string(), Value::Object(affiliation));
}
