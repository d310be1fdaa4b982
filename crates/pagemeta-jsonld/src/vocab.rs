//! Schema.org vocabulary constants.

/// JSON-LD context marker shared by every generated payload.
pub const CONTEXT: &str = "https://schema.org";

/// Schema.org type names.
pub mod schema_type {
    pub const PERSON: &str = "Person";
    pub const ORGANIZATION: &str = "Organization";
    pub const EDUCATIONAL_ORGANIZATION: &str = "EducationalOrganization";
    pub const VIDEO_OBJECT: &str = "VideoObject";
    pub const ARTICLE: &str = "Article";
    pub const WEB_SITE: &str = "WebSite";
    pub const BREADCRUMB_LIST: &str = "BreadcrumbList";
    pub const LIST_ITEM: &str = "ListItem";
    pub const CONTACT_POINT: &str = "ContactPoint";
    pub const SEARCH_ACTION: &str = "SearchAction";
    pub const ENTRY_POINT: &str = "EntryPoint";
    pub const IMAGE_OBJECT: &str = "ImageObject";
    pub const INTERACTION_COUNTER: &str = "InteractionCounter";
}

/// Block identifiers emitted by the built-in generators.
pub mod block_id {
    pub const WEBSITE: &str = "website";
    pub const ORGANIZATION: &str = "organization";
    pub const PERSON: &str = "person";
    pub const VIDEO: &str = "video";
    pub const ARTICLE: &str = "article";
    pub const BREADCRUMB: &str = "breadcrumb";
}
