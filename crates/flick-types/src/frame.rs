//! Per-frame output handed to render and indicator consumers.

use serde::Serialize;

/// Which motion regime the controller is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseKind {
    Idle,
    Dragging,
    Coasting,
    Springing,
}

impl PhaseKind {
    /// Coasting and springing advance on their own every tick.
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Coasting | Self::Springing)
    }
}

/// Scrollbar thumb geometry, in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Indicator {
    /// Thumb length along the scroll axis.
    pub extent: f64,
    /// Thumb distance from the top of the track.
    pub offset: f64,
}

/// Result of one controller tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// Content translation to apply, rounded to whole units.
    pub offset: i32,
    /// Unrounded scroll position.
    pub position: f64,
    pub indicator: Indicator,
    pub phase: PhaseKind,
}

impl Frame {
    /// Whether the driver must keep ticking to finish the current motion.
    pub fn moving(&self) -> bool {
        self.phase.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_coast_and_spring_animate() {
        assert!(!PhaseKind::Idle.is_animating());
        assert!(!PhaseKind::Dragging.is_animating());
        assert!(PhaseKind::Coasting.is_animating());
        assert!(PhaseKind::Springing.is_animating());
    }

    #[test]
    fn frame_serializes_to_json() {
        let frame = Frame {
            offset: 12,
            position: 12.4,
            indicator: Indicator {
                extent: 20.0,
                offset: 3.5,
            },
            phase: PhaseKind::Coasting,
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"offset\":12"));
        assert!(json.contains("\"Coasting\""));
        assert!(frame.moving());
    }
}
