//! Scrollbar indicator geometry.

use flick_types::frame::Indicator;
use flick_types::geometry::Geometry;

use crate::bounds::Bounds;

/// Thumb extent and offset for a given scroll position.
///
/// Pure and idempotent. The thumb is as long as the visible fraction of the
/// track, never shorter than `min_extent`, and travels the rest of the track
/// in proportion to how far `position` is through `bounds`. When nothing can scroll the thumb sits
/// at the top. While the position is past a bound the offset follows it past
/// the track ends, so the thumb mirrors the rubber-band.
pub fn compute(geometry: &Geometry, position: f64, bounds: &Bounds, min_extent: f64) -> Indicator {
    let viewport = geometry.viewport_extent;
    let visible_ratio = if geometry.content_extent > 0.0 {
        (viewport / geometry.content_extent).min(1.0)
    } else {
        1.0
    };

    let extent = (viewport * visible_ratio).max(min_extent);
    let travel = (viewport - extent).max(0.0);
    let scroll_ratio = if bounds.span() > 0.0 {
        (position - bounds.min) / bounds.span()
    } else {
        0.0
    };

    Indicator {
        extent,
        offset: travel * scroll_ratio,
    }
}
