pub mod milestone;

pub use milestone::{BulletPoint, KNOWN_CATEGORIES, Milestone, default_icon};
