//! URL construction for generated identifiers.

use url::Url;

/// Build a URL from an absolute base, a path, and query parameters.
///
/// Returns `None` when the base is not an absolute URL or the path cannot be
/// joined onto it.
#[must_use]
pub fn build_url(base_url: &str, path: &str, params: &[(&str, &str)]) -> Option<String> {
    let base = Url::parse(base_url).ok()?;
    let mut url = base.join(path).ok()?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }

    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_plain() {
        assert_eq!(
            build_url("https://example.edu", "/experts", &[]),
            Some("https://example.edu/experts".to_string())
        );
    }

    #[test]
    fn test_build_url_with_params() {
        assert_eq!(
            build_url("https://example.edu", "/experts", &[("id", "42")]),
            Some("https://example.edu/experts?id=42".to_string())
        );
    }

    #[test]
    fn test_build_url_encodes_params() {
        let url = build_url(
            "https://example.edu",
            "/experts",
            &[("term", "quantum physics")],
        )
        .expect("build url");
        assert!(url.contains("term=quantum+physics") || url.contains("term=quantum%20physics"));
    }

    #[test]
    fn test_build_url_invalid_base() {
        assert_eq!(build_url("/relative", "/experts", &[]), None);
        assert_eq!(build_url("", "/experts", &[]), None);
    }
}
