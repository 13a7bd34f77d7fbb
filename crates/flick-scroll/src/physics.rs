//! The three motion models: drag resistance, inertial decay, spring return.
//!
//! All functions are pure; the state machine in [`crate::phase`] decides when
//! each one runs.

use flick_types::config::PhysicsConfig;

use crate::bounds::Bounds;

/// Move `position` by a pointer displacement.
///
/// Inside the bounds the content tracks the pointer 1:1. Once past either
/// end every move is scaled by the flat `overscroll_damping` factor.
pub fn drag(position: f64, displacement: f64, bounds: &Bounds, config: &PhysicsConfig) -> f64 {
    let factor = if bounds.contains(position) {
        1.0
    } else {
        config.overscroll_damping
    };
    position + displacement * factor
}

/// One coasting tick: integrate, then apply friction.
///
/// Returns the new `(position, velocity)`. Velocity is in units per second,
/// friction is applied once per tick regardless of `dt`.
pub fn coast(position: f64, velocity: f64, dt: f64, config: &PhysicsConfig) -> (f64, f64) {
    (position + velocity * dt, velocity * config.friction)
}

/// Whether a coasting velocity has decayed enough to stop.
pub fn coast_stopped(velocity: f64, config: &PhysicsConfig) -> bool {
    velocity.abs() < config.stop_velocity
}

/// Clamp a release velocity to the allowed range.
pub fn clamp_velocity(velocity: f64, config: &PhysicsConfig) -> f64 {
    velocity.clamp(-config.max_velocity, config.max_velocity)
}

/// Outcome of one spring tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpringStep {
    /// Still travelling. `velocity` is the distance covered this tick.
    Moving { position: f64, velocity: f64 },
    /// Close enough; the position snaps onto the target.
    Settled,
}

/// One spring tick towards `target`.
///
/// Covers `spring_k` of the remaining distance per tick, which converges
/// monotonically without overshoot.
pub fn spring(position: f64, target: f64, config: &PhysicsConfig) -> SpringStep {
    let delta = target - position;
    if delta.abs() < config.snap_distance {
        return SpringStep::Settled;
    }
    let velocity = delta * config.spring_k;
    SpringStep::Moving {
        position: position + velocity,
        velocity,
    }
}
