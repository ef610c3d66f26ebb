use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::models::Milestone;

use super::period::resolve_time_at;

/// Orders milestones most recent first.
pub fn sort_milestones(milestones: &mut [Milestone]) {
    sort_milestones_at(milestones, Utc::now());
}

/// Orders milestones most recent first, resolving "present" as `now`.
///
/// The sort is stable: entries that resolve to the same instant keep their
/// document order.
pub fn sort_milestones_at(milestones: &mut [Milestone], now: DateTime<Utc>) {
    milestones.sort_by_cached_key(|m| Reverse(resolve_time_at(&m.time_period, now)));
}
