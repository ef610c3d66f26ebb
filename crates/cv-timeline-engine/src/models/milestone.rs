use serde::{Deserialize, Serialize};

/// A single detail line under a milestone's `- Bullet points` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletPoint {
    /// Text after the `- ` marker, trimmed. May contain link markup.
    pub text: String,
    /// Nesting depth, 0 = shallowest bullet of the owning milestone.
    pub level: usize,
}

impl BulletPoint {
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// One timeline entry, produced from a `## <title>` block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Milestone {
    /// Category inherited from the last `# Category :` line above the heading.
    pub category: Option<String>,
    pub title: String,
    /// Free text such as `2019 - Present`; empty when the block has no period line.
    pub time_period: String,
    pub bullet_points: Vec<BulletPoint>,
    pub icon: Option<String>,
    pub logo: Option<String>,
}

impl Milestone {
    pub fn new(title: impl Into<String>, category: Option<String>) -> Self {
        Self {
            category,
            title: title.into(),
            ..Default::default()
        }
    }

    /// The glyph shown before the title: the explicit icon, else the category default.
    pub fn display_icon(&self) -> Option<&str> {
        self.icon
            .as_deref()
            .or_else(|| self.category.as_deref().and_then(default_icon))
    }
}

/// Categories with built-in iconography, in filter order.
pub const KNOWN_CATEGORIES: [&str; 4] = ["work", "education", "achievement", "personal"];

/// Default icon for a category, if it is one of [`KNOWN_CATEGORIES`].
pub fn default_icon(category: &str) -> Option<&'static str> {
    match category {
        "work" => Some("💼"),
        "education" => Some("🎓"),
        "achievement" => Some("🥇"),
        "personal" => Some("🎉"),
        _ => None,
    }
}
