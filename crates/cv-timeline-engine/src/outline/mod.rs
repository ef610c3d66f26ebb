//! # Nested Bullet Lists
//!
//! Rebuilds the tree shape of a milestone's bullets from the flat
//! `(text, level)` sequence the parser produces.
//!
//! ## Shape Rules
//!
//! - The children of an item are the contiguous run of following items that
//!   are deeper than it; the run ends at the first item at the item's level or
//!   shallower
//! - Depth grows by at most one per nesting step. A bullet that jumps from
//!   level 0 to level 3 becomes a direct child of the level-0 item, and later
//!   items between the two levels become its siblings
//!
//! Node text is kept raw; renderers decide how to present inline links.

use serde::Serialize;

use crate::models::BulletPoint;

/// One bullet together with its nested sub-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListNode {
    pub text: String,
    pub children: Vec<ListNode>,
}

impl ListNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: vec![],
        }
    }

    pub fn with_children(text: impl Into<String>, children: Vec<ListNode>) -> Self {
        Self {
            text: text.into(),
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Builds the bullet tree for a flat, level-tagged sequence.
pub fn build_nested_list(points: &[BulletPoint]) -> Vec<ListNode> {
    let mut cursor = 0;
    let nodes = collect_siblings(points, &mut cursor, None);
    debug_assert_eq!(cursor, points.len(), "every bullet belongs to the tree");
    nodes
}

/// Collects items deeper than `parent_level`, advancing `cursor` past every
/// consumed descendant. Stops at the first item at or above the parent.
fn collect_siblings(
    points: &[BulletPoint],
    cursor: &mut usize,
    parent_level: Option<usize>,
) -> Vec<ListNode> {
    let mut nodes = Vec::new();

    while let Some(point) = points.get(*cursor) {
        if parent_level.is_some_and(|parent| point.level <= parent) {
            break;
        }
        *cursor += 1;

        let children = match points.get(*cursor) {
            Some(next) if next.level > point.level => {
                collect_siblings(points, cursor, Some(point.level))
            }
            _ => vec![],
        };

        nodes.push(ListNode::with_children(point.text.clone(), children));
    }

    nodes
}

/// Flattens a tree back into `(text, depth)` pairs in pre-order.
///
/// Depths are the normalized nesting depths of the tree, so malformed level
/// jumps come back one step at a time.
pub fn flatten(nodes: &[ListNode]) -> Vec<(&str, usize)> {
    fn walk<'a>(nodes: &'a [ListNode], depth: usize, out: &mut Vec<(&'a str, usize)>) {
        for node in nodes {
            out.push((node.text.as_str(), depth));
            walk(&node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(nodes, 0, &mut out);
    out
}
