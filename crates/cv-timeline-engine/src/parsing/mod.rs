//! # Milestone Parsing
//!
//! Two-phase parsing of the milestone dialect.
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding only local facts (directive kind, value, indentation level)
//! 2. **Milestone Construction** (`builder`): a `MilestoneBuilder` keeps the
//!    category context and bullet-section flag, emitting a `Milestone` when
//!    the next heading or end of input arrives
//!
//! [`parse_document`] then orders the result with `sort`, using the
//! end-of-range instants computed by `period`.
//!
//! Parsing is total: unrecognised lines are ignored and never produce errors.

pub mod builder;
pub mod classify;
pub mod inline;
pub mod period;
pub mod sort;

#[cfg(test)]
mod tests;

use crate::models::Milestone;

use builder::MilestoneBuilder;
use classify::MilestoneLineClassifier;

/// Byte-order mark some editors put at the start of UTF-8 files.
const BOM: char = '\u{FEFF}';

/// Parses a document into milestones in document order.
pub fn parse_milestones(text: &str) -> Vec<Milestone> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let classifier = MilestoneLineClassifier;
    let mut builder = MilestoneBuilder::new();

    for line in text.lines() {
        builder.push(&classifier.classify(line));
    }

    let milestones = builder.finish();
    log::debug!("parsed {} milestones", milestones.len());
    milestones
}

/// Parses a document into milestones ordered most recent first.
pub fn parse_document(text: &str) -> Vec<Milestone> {
    let mut milestones = parse_milestones(text);
    sort::sort_milestones(&mut milestones);
    milestones
}
