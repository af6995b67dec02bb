//! Percentage and distance readouts derived from the scroll offset.

use crate::checkpoints::Checkpoint;
use serde::Serialize;

/// Values shown in the HUD for the current position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub percent: f32,
    pub distance_units: u32,
    pub checkpoint_id: Option<String>,
    pub checkpoint_label: String,
}

impl ProgressSnapshot {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            percent: 0.0,
            distance_units: 0,
            checkpoint_id: None,
            checkpoint_label: label.into(),
        }
    }

    pub(crate) fn set_checkpoint(&mut self, checkpoint: Checkpoint<'_>) {
        self.checkpoint_id = checkpoint.id.map(str::to_string);
        self.checkpoint_label = checkpoint.label.to_string();
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProgressCalculator {
    total_distance: u32,
}

impl ProgressCalculator {
    pub fn new(total_distance: u32) -> Self {
        Self { total_distance }
    }

    pub fn total_distance(&self) -> u32 {
        self.total_distance
    }

    /// Distance travelled for a percentage, rounded to whole units.
    pub fn distance_units(&self, percent: f32) -> u32 {
        let ratio = (percent / 100.0).clamp(0.0, 1.0);
        let units = (ratio * self.total_distance as f32).round();
        (units as u32).min(self.total_distance)
    }
}

/// Scroll percentage in `[0, 100]`.
///
/// An unscrollable document (`max_offset <= 0`) reports 0 rather than
/// dividing by zero.
pub fn percent(offset: f32, max_offset: f32) -> f32 {
    if !(max_offset > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    let value = offset / max_offset * 100.0;
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
