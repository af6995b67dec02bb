//! Estimated document geometry for the journey stops.
//!
//! The viewer does not expose widget positions, so stop tops are estimated
//! from the text each stop renders and later scaled to the real content
//! height reported by the viewport.

use crate::checkpoints::TrackedSections;
use crate::journey::Journey;

/// Sizes the view lays stops out with; keep in sync with the view code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutModel {
    pub header_height: f32,
    pub stop_spacing: f32,
    pub stop_padding: f32,
    pub title_height: f32,
    pub label_height: f32,
    pub line_height: f32,
    pub chars_per_line: usize,
    /// Space after the last stop so the end of the journey can reach the top.
    pub footer_height: f32,
}

impl Default for LayoutModel {
    fn default() -> Self {
        Self {
            header_height: 160.0,
            stop_spacing: 48.0,
            stop_padding: 24.0,
            title_height: 36.0,
            label_height: 22.0,
            line_height: 26.0,
            chars_per_line: 72,
            footer_height: 240.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedLayout {
    tops: Vec<(String, f32)>,
    total_height: f32,
}

impl EstimatedLayout {
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Stop tops scaled so the estimate spans `content_height`.
    pub fn sections_for(&self, content_height: f32) -> TrackedSections {
        let scale = if content_height.is_finite() && content_height > 0.0 && self.total_height > 0.0
        {
            content_height / self.total_height
        } else {
            1.0
        };
        TrackedSections::new(
            self.tops
                .iter()
                .map(|(id, top)| (id.clone(), top * scale)),
        )
    }
}

impl LayoutModel {
    pub fn estimate(&self, journey: &Journey) -> EstimatedLayout {
        let chars_per_line = self.chars_per_line.max(8);
        let mut cursor = self.header_height.max(0.0);
        let mut tops = Vec::with_capacity(journey.stops.len());

        for (idx, stop) in journey.stops.iter().enumerate() {
            if idx > 0 {
                cursor += self.stop_spacing;
            }
            tops.push((stop.id.clone(), cursor));

            let wrapped_lines: usize = stop
                .lines
                .iter()
                .map(|line| line.chars().count().div_ceil(chars_per_line).max(1))
                .sum();
            cursor += self.stop_padding * 2.0
                + self.title_height
                + self.label_height
                + wrapped_lines as f32 * self.line_height;
        }

        EstimatedLayout {
            tops,
            total_height: cursor + self.footer_height.max(0.0),
        }
    }
}

/// Stops become revealed once they scroll into the lower part of the
/// viewport; they never hide again.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    margin: f32,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(stop_count: usize, margin: f32) -> Self {
        Self {
            margin,
            revealed: vec![false; stop_count],
        }
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Update with the stop tops in document order; returns newly revealed
    /// indices.
    pub fn update(&mut self, tops: &[f32], offset: f32, viewport_height: f32) -> Vec<usize> {
        let visible_bottom = offset + viewport_height - self.margin;
        let mut newly = Vec::new();
        for (idx, top) in tops.iter().enumerate() {
            let Some(flag) = self.revealed.get_mut(idx) else {
                break;
            };
            if !*flag && *top <= visible_bottom {
                *flag = true;
                newly.push(idx);
            }
        }
        newly
    }
}
