//! Site configuration for metadata generation.
//!
//! One `SiteConfig` is shared, read-only, across every generator invocation
//! in a composition pass. The only per-pass extension point is
//! [`SiteConfig::with_search_term`], which derives a shallow clone instead of
//! mutating the caller's value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, Result};

/// Main configuration for Pagemeta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute base URL of the site (e.g., "https://example.edu").
    /// All generated identifiers and URLs derive from it.
    pub base_url: String,

    /// Organization name for publisher/worksFor references.
    #[serde(default)]
    pub organization_name: Option<String>,

    /// Organization logo URL.
    #[serde(default)]
    pub organization_logo: Option<String>,

    /// Media contact email, preferred over per-person addresses.
    #[serde(default)]
    pub media_contact_email: Option<String>,

    /// Languages advertised on contact points.
    #[serde(default = "default_languages")]
    pub default_languages: Vec<String>,

    /// Active search term for the current pass, if the page was reached
    /// through search. Set via [`SiteConfig::with_search_term`].
    #[serde(default)]
    pub search_term: Option<String>,

    /// Output size caps.
    #[serde(default)]
    pub limits: Limits,
}

/// Caps applied to generated list fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum search results represented in JSON-LD.
    #[serde(default = "default_max_results")]
    pub max_results_in_jsonld: usize,

    /// Maximum expertise topics on a person.
    #[serde(default = "default_max_expertise")]
    pub max_expertise_items: usize,

    /// Maximum awards on a person.
    #[serde(default = "default_max_awards")]
    pub max_awards: usize,

    /// Maximum education entries on a person.
    #[serde(default = "default_max_education")]
    pub max_education: usize,
}

// Default value functions
fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_max_results() -> usize {
    10
}

fn default_max_expertise() -> usize {
    15
}

fn default_max_awards() -> usize {
    5
}

fn default_max_education() -> usize {
    3
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_results_in_jsonld: default_max_results(),
            max_expertise_items: default_max_expertise(),
            max_awards: default_max_awards(),
            max_education: default_max_education(),
        }
    }
}

impl SiteConfig {
    /// Create a configuration with only the base URL set.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            organization_name: None,
            organization_logo: None,
            media_contact_email: None,
            default_languages: default_languages(),
            search_term: None,
            limits: Limits::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, overlaying environment
    /// variables with the `PAGEMETA` prefix (e.g. `PAGEMETA__BASE_URL`).
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("PAGEMETA").separator("__"))
            .build()?;

        let config: SiteConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(CoreError::config("base_url cannot be empty"));
        }

        if Url::parse(&self.base_url).is_err() {
            return Err(CoreError::config(format!(
                "base_url is not an absolute URL: {}",
                self.base_url
            )));
        }

        if self.base_url.ends_with('/') {
            tracing::warn!("base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Derive a copy of this configuration carrying the given search term.
    #[must_use]
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
base_url = "https://example.edu"
organization_name = "Example University"
organization_logo = "https://example.edu/logo.png"
media_contact_email = "media@example.edu"
default_languages = ["en", "es"]

[limits]
max_expertise_items = 8
max_awards = 2
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("pagemeta.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = SiteConfig::load(&config_path).expect("load config");

        assert_eq!(config.base_url, "https://example.edu");
        assert_eq!(
            config.organization_name.as_deref(),
            Some("Example University")
        );
        assert_eq!(config.default_languages, vec!["en", "es"]);
        assert_eq!(config.limits.max_expertise_items, 8);
        assert_eq!(config.limits.max_awards, 2);
        // Unset limits keep their defaults
        assert_eq!(config.limits.max_education, 3);
        assert_eq!(config.limits.max_results_in_jsonld, 10);
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("pagemeta.toml");
        let minimal_config = r#"base_url = "https://example.edu""#;
        std::fs::write(&config_path, minimal_config).expect("write");

        let config = SiteConfig::load(&config_path).expect("load config");

        assert!(config.organization_name.is_none());
        assert_eq!(config.default_languages, vec!["en"]);
        assert_eq!(config.limits.max_expertise_items, 15);
        assert!(config.search_term.is_none());
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("pagemeta.toml");
        std::fs::write(&config_path, r#"base_url = """#).expect("write");

        let result = SiteConfig::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("base_url cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_relative_base_url() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("pagemeta.toml");
        std::fs::write(&config_path, r#"base_url = "/not/absolute""#).expect("write");

        let result = SiteConfig::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("not an absolute URL")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = SiteConfig::load(Path::new("/nonexistent/pagemeta.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_url_for() {
        let config = SiteConfig::new("https://example.edu");

        assert_eq!(
            config.url_for("/experts/hello"),
            "https://example.edu/experts/hello"
        );
        assert_eq!(
            config.url_for("experts/hello"),
            "https://example.edu/experts/hello"
        );
    }

    #[test]
    fn test_with_search_term() {
        let config = SiteConfig::new("https://example.edu");
        let derived = config.with_search_term("physics");

        assert_eq!(derived.search_term.as_deref(), Some("physics"));
        // The original is untouched
        assert!(config.search_term.is_none());
        assert_eq!(derived.base_url, config.base_url);
    }
}
