//! Pagemeta Presets Library
//!
//! Convenience compositions producing the complete metadata set for common
//! page types: one call returns the composed JSON-LD blocks and the flat
//! meta-tag record for a page.

pub mod blog;
pub mod profile;
pub mod video_library;

use pagemeta_jsonld::{blocks_to_html, Block};
use pagemeta_tags::{meta_tags_to_html, MetaTags};

pub use blog::article_page;
pub use profile::{profile_directory, profile_page, profile_search_results};
pub use video_library::{video_library, video_page, video_search_results};

/// Complete metadata for one page.
#[derive(Debug, Clone)]
pub struct PageMetadata {
    /// Composed, ordered JSON-LD blocks.
    pub blocks: Vec<Block>,

    /// Flat meta-tag record.
    pub meta_tags: MetaTags,
}

impl PageMetadata {
    /// Render everything as `<head>` markup: meta tags first, then the
    /// JSON-LD script tags.
    #[must_use]
    pub fn head_html(&self) -> String {
        let tags = meta_tags_to_html(&self.meta_tags);
        let blocks = blocks_to_html(&self.blocks);
        match (tags.is_empty(), blocks.is_empty()) {
            (true, _) => blocks,
            (_, true) => tags,
            (false, false) => format!("{tags}\n{blocks}"),
        }
    }
}
