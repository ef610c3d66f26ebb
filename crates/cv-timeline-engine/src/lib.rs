pub mod filter;
pub mod i18n;
pub mod io;
pub mod models;
pub mod outline;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use filter::{CategoryFilter, apply_filter};
pub use i18n::{Language, Translations};
pub use io::*;
pub use models::*;
pub use outline::{ListNode, build_nested_list};
pub use parsing::{inline::TextSegment, parse_document, parse_milestones};
