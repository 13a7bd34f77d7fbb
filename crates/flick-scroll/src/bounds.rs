//! Legal scroll range.

use flick_types::geometry::Geometry;

/// One end of the scroll range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top, `min`.
    Start,
    /// The bottom, `max`.
    End,
}

/// Closed interval `[min, max]` the position must return to at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// `[0, max(content - viewport, 0)]`.
    pub fn from_geometry(geometry: &Geometry) -> Self {
        Self {
            min: 0.0,
            max: geometry.max_scroll(),
        }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.min && position <= self.max
    }

    /// The edge `position` has been pushed past, if any.
    pub fn violated(&self, position: f64) -> Option<Edge> {
        if position < self.min {
            Some(Edge::Start)
        } else if position > self.max {
            Some(Edge::End)
        } else {
            None
        }
    }

    /// Position of an edge.
    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Start => self.min,
            Edge::End => self.max,
        }
    }

    pub fn clamp(&self, position: f64) -> f64 {
        position.clamp(self.min, self.max)
    }

    /// Length of the scrollable range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
