use crate::models::{BulletPoint, Milestone};

use super::classify::LineClass;

/// Accumulator that turns classified lines into milestones.
///
/// Holds the category context, the milestone under construction and whether
/// the `- Bullet points` section is open. A milestone is only emitted when the
/// next heading arrives or [`MilestoneBuilder::finish`] is called.
pub struct MilestoneBuilder {
    current_category: Option<String>,
    in_progress: Option<Milestone>,
    bullet_mode: bool,
    out: Vec<Milestone>,
}

impl MilestoneBuilder {
    pub fn new() -> Self {
        Self {
            current_category: None,
            in_progress: None,
            bullet_mode: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &LineClass<'_>) {
        match *line {
            LineClass::Category(name) => {
                self.current_category = Some(name.to_string());
            }
            LineClass::Heading(title) => {
                self.flush_milestone();
                self.in_progress = Some(Milestone::new(title, self.current_category.clone()));
                self.bullet_mode = false;
            }
            _ => self.push_field(line),
        }
    }

    pub fn finish(mut self) -> Vec<Milestone> {
        // EOF flush
        self.flush_milestone();
        self.out
    }

    /// Applies a field line to the milestone in progress; ignored before the first heading.
    fn push_field(&mut self, line: &LineClass<'_>) {
        let Some(milestone) = self.in_progress.as_mut() else {
            return;
        };

        match *line {
            LineClass::TimePeriod(value) => milestone.time_period = value.to_string(),
            LineClass::BulletSection => self.bullet_mode = true,
            LineClass::Icon(value) => {
                milestone.icon = non_empty(value);
                self.bullet_mode = false;
            }
            LineClass::Logo(value) => {
                milestone.logo = non_empty(value);
                self.bullet_mode = false;
            }
            LineClass::Item { text, level } if self.bullet_mode => {
                milestone.bullet_points.push(BulletPoint::new(text, level));
            }
            _ => {}
        }
    }

    fn flush_milestone(&mut self) {
        if let Some(mut milestone) = self.in_progress.take() {
            normalize_levels(&mut milestone.bullet_points);
            self.out.push(milestone);
        }
    }
}

impl Default for MilestoneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shifts bullet levels so the shallowest bullet sits at level 0.
pub fn normalize_levels(points: &mut [BulletPoint]) {
    let Some(min) = points.iter().map(|p| p.level).min() else {
        return;
    };
    for point in points.iter_mut() {
        point.level -= min;
    }
}

/// Empty icon/logo values mean "not set", the same as a missing line.
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
