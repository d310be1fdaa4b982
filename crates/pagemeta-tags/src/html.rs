//! Meta-tag HTML rendering.
//!
//! Emission order and tag family (`property=` vs `name=`) come from
//! declarative key tables, not from map iteration order.

use crate::assemble::MetaTags;

/// Open Graph style keys, emitted as `<meta property="...">`.
const PROPERTY_KEYS: &[&str] = &[
    "og:title",
    "og:description",
    "og:type",
    "og:url",
    "og:image",
    "og:image:alt",
    "og:image:width",
    "og:image:height",
    "og:video",
    "og:video:url",
    "og:video:secure_url",
    "og:video:type",
    "og:video:width",
    "og:video:height",
    "profile:first_name",
    "profile:last_name",
    "article:published_time",
    "article:modified_time",
    "article:author",
];

/// Twitter Card keys, emitted as `<meta name="...">`.
const NAME_KEYS: &[&str] = &[
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
    "twitter:image:alt",
    "twitter:player",
    "twitter:player:width",
    "twitter:player:height",
    "twitter:player:stream",
    "twitter:player:stream:content_type",
];

/// Escape HTML special characters for text and attribute positions.
#[must_use]
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Render a meta-tag record as `<head>` markup.
///
/// Emits `<title>`, the standard description and canonical link, then the
/// Open Graph and Twitter Card families in table order.
#[must_use]
pub fn meta_tags_to_html(tags: &MetaTags) -> String {
    let mut lines = Vec::new();

    if let Some(title) = tags.get("title") {
        lines.push(format!("<title>{}</title>", escape_html(title)));
    }

    if let Some(description) = tags.get("description") {
        lines.push(format!(
            r#"<meta name="description" content="{}">"#,
            escape_html(description)
        ));
    }

    if let Some(canonical) = tags.get("canonical") {
        lines.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            escape_html(canonical)
        ));
    }

    for key in PROPERTY_KEYS {
        if let Some(value) = tags.get(*key) {
            lines.push(format!(
                r#"<meta property="{key}" content="{}">"#,
                escape_html(value)
            ));
        }
    }

    for key in NAME_KEYS {
        if let Some(value) = tags.get(*key) {
            lines.push(format!(
                r#"<meta name="{key}" content="{}">"#,
                escape_html(value)
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(entries: &[(&str, &str)]) -> MetaTags {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"quotes" & 'apostrophes'</b>"#),
            "&lt;b&gt;&quot;quotes&quot; &amp; &#039;apostrophes&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_renders_in_table_order() {
        let html = meta_tags_to_html(&tags(&[
            ("twitter:card", "summary"),
            ("og:title", "Jane Doe"),
            ("title", "Jane Doe - Example"),
            ("canonical", "https://example.edu/experts?id=jdoe"),
            ("description", "A researcher."),
        ]));
        let lines: Vec<&str> = html.lines().collect();

        assert_eq!(lines[0], "<title>Jane Doe - Example</title>");
        assert_eq!(
            lines[1],
            r#"<meta name="description" content="A researcher.">"#
        );
        assert_eq!(
            lines[2],
            r#"<link rel="canonical" href="https://example.edu/experts?id=jdoe">"#
        );
        assert_eq!(lines[3], r#"<meta property="og:title" content="Jane Doe">"#);
        assert_eq!(lines[4], r#"<meta name="twitter:card" content="summary">"#);
    }

    #[test]
    fn test_escapes_attribute_values() {
        let html = meta_tags_to_html(&tags(&[(
            "description",
            r#"Says "hello" & waves <now>"#,
        )]));

        assert!(html.contains("&quot;hello&quot; &amp; waves &lt;now&gt;"));
        assert!(!html.contains(r#"content="Says "hello"#));
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(meta_tags_to_html(&MetaTags::new()), "");
    }
}
