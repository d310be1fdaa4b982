//! JSON-LD rendering for server-side HTML.

use crate::block::Block;

/// Render composed blocks as `<script type="application/ld+json">` tags.
///
/// The JSON text has `<`, `>`, and `&` escaped as unicode sequences so the
/// payload can never terminate its surrounding script element, regardless of
/// content. Blocks without a payload are skipped.
#[must_use]
pub fn blocks_to_html(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|block| block.has_data())
        .map(|block| {
            let json = block.data.to_string();
            let escaped = json
                .replace('&', "\\u0026")
                .replace('<', "\\u003c")
                .replace('>', "\\u003e");
            format!(
                r#"<script type="application/ld+json" id="jsonld-{}">{}</script>"#,
                block.id, escaped
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
