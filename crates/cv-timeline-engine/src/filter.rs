use std::fmt;

use crate::models::{KNOWN_CATEGORIES, Milestone};

/// Category filter applied to a rendered timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parses a `data-filter` style value; `all` selects everything.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn matches(&self, milestone: &Milestone) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => {
                milestone.category.as_deref() == Some(category.as_str())
            }
        }
    }

    /// Translation key for this filter's button label.
    pub fn label_key(&self) -> String {
        match self {
            CategoryFilter::All => "filter.all".to_string(),
            CategoryFilter::Category(category) => format!("filter.{category}"),
        }
    }

    /// Every filter worth offering for `milestones`, in cycle order.
    ///
    /// `All` comes first, then the known categories, then any other category
    /// in order of first appearance.
    pub fn available(milestones: &[Milestone]) -> Vec<CategoryFilter> {
        let mut categories: Vec<&str> = KNOWN_CATEGORIES.to_vec();
        for category in milestones.iter().filter_map(|m| m.category.as_deref()) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        std::iter::once(CategoryFilter::All)
            .chain(
                categories
                    .into_iter()
                    .map(|c| CategoryFilter::Category(c.to_string())),
            )
            .collect()
    }

    /// The filter after this one in `available`, wrapping around.
    pub fn next_in(&self, available: &[CategoryFilter]) -> CategoryFilter {
        let position = available.iter().position(|f| f == self);
        let next = position.map_or(0, |i| (i + 1) % available.len().max(1));
        available.get(next).cloned().unwrap_or_default()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(category) => write!(f, "{category}"),
        }
    }
}

/// Milestones visible under `filter`, order preserved.
pub fn apply_filter<'a>(milestones: &'a [Milestone], filter: &CategoryFilter) -> Vec<&'a Milestone> {
    milestones.iter().filter(|m| filter.matches(m)).collect()
}
