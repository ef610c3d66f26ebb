//! # Timeline Rendering
//!
//! Renderers consume sorted milestones as plain data:
//!
//! - **`html`**: a static page with client-side category filters
//! - **`json`**: the milestone records plus their bullet trees
//!
//! The terminal viewer lives in the CLI crate and uses the same building
//! blocks (`outline::build_nested_list`, `parsing::inline::parse_segments`).

pub mod html;
pub mod json;

pub use html::{PageContext, render_milestone, render_page, render_timeline};
pub use json::to_json;
