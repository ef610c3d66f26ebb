//! # Inline Links
//!
//! Titles and bullet texts may carry links in two dialects:
//!
//! - HTML anchors: `<a href="URL">LABEL</a>` (LABEL without `<`)
//! - Markdown links: `[LABEL](URL)` (LABEL without `]`, URL without `)`)
//!
//! HTML anchors are resolved first, then markdown links, each in a single
//! global pass. [`render_links`] rewrites both into uniform anchors that open
//! in a new tab; [`parse_segments`] splits text into plain and link segments
//! for targets that are not HTML.

pub mod links;
pub mod types;

pub use links::{parse_segments, render_links};
pub use types::TextSegment;
