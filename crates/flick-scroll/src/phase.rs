//! Scroll state machine.
//!
//! [`Motion`] is the scroll position plus the active [`Phase`]. Every change
//! goes through [`transition`], which maps `(motion, trigger)` to the next
//! motion. Per-phase data lives inside its variant, so a drag session exists
//! exactly while dragging and a spring always targets one of the bounds.
//!
//! | Phase       | On tick                                   | Leaves when                      |
//! |-------------|-------------------------------------------|----------------------------------|
//! | `Idle`      | nothing                                   | press                            |
//! | `Dragging`  | nothing (input driven)                    | release / cancel                 |
//! | `Coasting`  | integrate, apply friction                 | too slow (idle), out of bounds (spring) |
//! | `Springing` | cover `spring_k` of the remaining distance | within snap distance (idle)      |

use flick_types::config::{PhysicsConfig, ResizePolicy};
use flick_types::frame::PhaseKind;
use flick_types::input::PointerId;

use crate::bounds::{Bounds, Edge};
use crate::physics::{self, SpringStep};
use crate::velocity::VelocityTracker;

/// A captured pointer and the moves it has made so far.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    /// Pointer coordinate of the previous event.
    pub reference_y: f64,
    /// Timestamp of the previous event.
    pub last_move_ms: f64,
    pub history: VelocityTracker,
}

/// Motion regime and its private data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging(DragSession),
    /// Inertial motion; `velocity` in units per second.
    Coasting { velocity: f64 },
    /// Returning to `edge`; `velocity` is the distance covered last tick.
    Springing { edge: Edge, velocity: f64 },
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Idle => PhaseKind::Idle,
            Self::Dragging(_) => PhaseKind::Dragging,
            Self::Coasting { .. } => PhaseKind::Coasting,
            Self::Springing { .. } => PhaseKind::Springing,
        }
    }
}

/// Something that can move the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Pointer down. Always starts a fresh drag, whatever was going on.
    Press {
        pointer_id: PointerId,
        y: f64,
        timestamp_ms: f64,
    },
    /// Pointer move of the captured pointer.
    Drag { y: f64, timestamp_ms: f64 },
    /// Pointer up or cancel.
    Release,
    /// One render frame of `dt` seconds.
    Frame { dt: f64 },
}

/// Scroll position and phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Motion {
    pub position: f64,
    pub phase: Phase,
}

impl Motion {
    /// Feed `trigger` through [`transition`] in place.
    pub fn apply(&mut self, trigger: Trigger, bounds: &Bounds, config: &PhysicsConfig) {
        let current = std::mem::take(self);
        *self = transition(current, trigger, bounds, config);
    }

    /// Speed of the current phase; zero unless coasting or springing.
    pub fn velocity(&self) -> f64 {
        match self.phase {
            Phase::Coasting { velocity } | Phase::Springing { velocity, .. } => velocity,
            Phase::Idle | Phase::Dragging(_) => 0.0,
        }
    }

    /// Bring the motion in line with bounds that just changed.
    ///
    /// A drag is left alone: damping and the eventual release already look
    /// at the new bounds.
    pub fn rebound(&mut self, bounds: &Bounds, policy: ResizePolicy) {
        if matches!(self.phase, Phase::Dragging(_)) {
            return;
        }
        let before = self.phase.kind();

        let springing = matches!(self.phase, Phase::Springing { .. });
        match policy {
            ResizePolicy::Spring => match bounds.violated(self.position) {
                Some(edge) => {
                    let velocity = if springing { self.velocity() } else { 0.0 };
                    self.phase = Phase::Springing { edge, velocity };
                },
                None if springing => self.phase = Phase::Idle,
                None => {},
            },
            ResizePolicy::Clamp => match self.phase {
                // Still past its edge: keep springing toward the edge's new value.
                Phase::Springing { edge, .. } if bounds.violated(self.position) == Some(edge) => {},
                _ => {
                    self.position = bounds.clamp(self.position);
                    if springing {
                        self.phase = Phase::Idle;
                    }
                },
            },
        }

        let after = self.phase.kind();
        if before != after {
            log::debug!("resize: {before:?} -> {after:?} at {:.1}", self.position);
        }
    }
}

/// The transition function of the scroll state machine.
pub fn transition(
    motion: Motion,
    trigger: Trigger,
    bounds: &Bounds,
    config: &PhysicsConfig,
) -> Motion {
    let Motion { position, phase } = motion;
    let before = phase.kind();

    let next = match (phase, trigger) {
        (
            _,
            Trigger::Press {
                pointer_id,
                y,
                timestamp_ms,
            },
        ) => Motion {
            position,
            phase: Phase::Dragging(DragSession {
                pointer_id,
                reference_y: y,
                last_move_ms: timestamp_ms,
                history: VelocityTracker::new(config.history_len),
            }),
        },

        (Phase::Dragging(mut session), Trigger::Drag { y, timestamp_ms }) => {
            let displacement = y - session.reference_y;
            session.reference_y = y;
            session
                .history
                .push(displacement, timestamp_ms - session.last_move_ms);
            session.last_move_ms = timestamp_ms;
            let position = physics::drag(position, displacement, bounds, config);
            log::trace!("drag {displacement:+.1} -> {position:.1}");
            Motion {
                position,
                phase: Phase::Dragging(session),
            }
        },

        (Phase::Dragging(session), Trigger::Release) => Motion {
            position,
            phase: release(position, session.history.estimate(), bounds, config),
        },

        (Phase::Coasting { velocity }, Trigger::Frame { dt }) => {
            let (position, velocity) = physics::coast(position, velocity, dt, config);
            let mut phase = if physics::coast_stopped(velocity, config) {
                Phase::Idle
            } else {
                Phase::Coasting { velocity }
            };
            if let Some(edge) = bounds.violated(position) {
                phase = Phase::Springing {
                    edge,
                    velocity: 0.0,
                };
            }
            Motion { position, phase }
        },

        (Phase::Springing { edge, .. }, Trigger::Frame { .. }) => {
            let target = bounds.edge(edge);
            match physics::spring(position, target, config) {
                SpringStep::Moving { position, velocity } => Motion {
                    position,
                    phase: Phase::Springing { edge, velocity },
                },
                SpringStep::Settled => Motion {
                    position: target,
                    phase: Phase::Idle,
                },
            }
        },

        // Moves and releases outside a drag, and ticks while idle or
        // dragging, change nothing.
        (phase, _) => Motion { position, phase },
    };

    let after = next.phase.kind();
    if before != after {
        log::debug!(
            "{before:?} -> {after:?} at {:.1} (v = {:.1})",
            next.position,
            next.velocity()
        );
    }
    next
}

/// Pick the phase that follows a release at `position` with estimated
/// `velocity`.
///
/// Being out of bounds wins over any fling; otherwise a fast enough release
/// coasts with its velocity clamped.
pub fn release(position: f64, velocity: f64, bounds: &Bounds, config: &PhysicsConfig) -> Phase {
    if let Some(edge) = bounds.violated(position) {
        Phase::Springing {
            edge,
            velocity: 0.0,
        }
    } else if velocity.abs() > config.stop_velocity {
        Phase::Coasting {
            velocity: physics::clamp_velocity(velocity, config),
        }
    } else {
        Phase::Idle
    }
}
