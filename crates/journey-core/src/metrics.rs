//! Latest geometry reported by the scroll viewport.

use serde::Serialize;

/// One sample of the viewport: where it is and how far it can go.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, viewport_height: f32, content_height: f32) -> Self {
        Self {
            offset: sanitize(offset),
            viewport_height: sanitize(viewport_height),
            content_height: sanitize(content_height),
        }
    }

    /// Largest reachable offset; zero for documents that fit the viewport.
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Clamp a requested offset into the scrollable range.
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        sanitize(offset).min(self.max_offset())
    }

    pub(crate) fn set_offset(&mut self, offset: f32) {
        self.offset = sanitize(offset);
    }
}

/// Non-finite and negative values collapse to zero.
pub(crate) fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
