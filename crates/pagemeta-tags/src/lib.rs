//! Pagemeta Tags Library
//!
//! Flat HTML meta-tag assembly for person, video, and search pages, plus the
//! `<head>` markup renderer.

pub mod assemble;
pub mod html;

pub use assemble::{
    generate_meta_tags, generate_meta_tags_with_sink, person_meta_tags, search_meta_tags,
    video_meta_tags, MetaTags,
};
pub use html::{escape_html, meta_tags_to_html};
