use serde::Serialize;

use crate::models::Milestone;
use crate::outline::{ListNode, build_nested_list};

/// A milestone as exported, with its bullets already nested.
#[derive(Debug, Serialize)]
pub struct MilestoneExport<'a> {
    #[serde(flatten)]
    pub milestone: &'a Milestone,
    pub icon_or_default: Option<&'a str>,
    pub bullet_tree: Vec<ListNode>,
}

impl<'a> MilestoneExport<'a> {
    pub fn new(milestone: &'a Milestone) -> Self {
        Self {
            milestone,
            icon_or_default: milestone.display_icon(),
            bullet_tree: build_nested_list(&milestone.bullet_points),
        }
    }
}

/// Pretty-printed JSON array of milestones in the order given.
pub fn to_json(milestones: &[Milestone]) -> serde_json::Result<String> {
    let export: Vec<MilestoneExport<'_>> = milestones.iter().map(MilestoneExport::new).collect();
    serde_json::to_string_pretty(&export)
}
