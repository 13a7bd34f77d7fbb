//! Viewport and content extents along the scroll axis.

use serde::{Deserialize, Serialize};

/// Extents reported by the host surface.
///
/// Both values are clamped to finite, non-negative numbers on construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Visible window height.
    pub viewport_extent: f64,
    /// Full content height.
    pub content_extent: f64,
}

impl Geometry {
    pub fn new(viewport_extent: f64, content_extent: f64) -> Self {
        Self {
            viewport_extent: sanitize(viewport_extent),
            content_extent: sanitize(content_extent),
        }
    }

    /// Largest legal scroll offset (`0` when the content fits).
    pub fn max_scroll(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Whether there is anything to scroll at all.
    pub fn is_scrollable(&self) -> bool {
        self.max_scroll() > 0.0
    }
}

fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() { extent.max(0.0) } else { 0.0 }
}
