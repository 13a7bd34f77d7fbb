//! Surface-agnostic pointer input.
//!
//! Every host adapter maps its native touch/mouse events to these types. The
//! scroll core never sees raw platform input. Only the vertical coordinate is
//! carried: flick scrolls along a single axis.

use serde::{Deserialize, Serialize};

/// Identity of a captured pointer (touch id, mouse = 0, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u32);

/// One event of a pointer session.
///
/// Timestamps are in milliseconds and must be monotonically non-decreasing
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer pressed; starts a drag session and captures the pointer.
    Down {
        pointer_id: PointerId,
        y: f64,
        timestamp_ms: f64,
    },
    /// Pointer moved while pressed.
    Move {
        pointer_id: PointerId,
        y: f64,
        timestamp_ms: f64,
    },
    /// Pointer released; ends the session.
    Up { pointer_id: PointerId },
    /// Session interrupted by the host (gesture stolen, window lost focus).
    Cancel { pointer_id: PointerId },
}

impl PointerEvent {
    /// The pointer this event belongs to.
    pub fn pointer_id(&self) -> PointerId {
        match *self {
            Self::Down { pointer_id, .. }
            | Self::Move { pointer_id, .. }
            | Self::Up { pointer_id }
            | Self::Cancel { pointer_id } => pointer_id,
        }
    }
}
