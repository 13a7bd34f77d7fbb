//! flick-scroll: momentum scrolling for a bounded surface in a fixed viewport.
//!
//! Content follows the pointer while dragged, coasts with decaying velocity
//! after release, resists being pulled past its ends, and springs back into
//! range. [`ScrollController`] is the entry point; the remaining modules are
//! the pure pieces it is built from and can be exercised on their own.
//!
//! The controller never schedules itself. An external driver calls
//! [`ScrollController::tick`] once per frame and forwards the resulting
//! [`Frame`](flick_types::frame::Frame) to its renderer.

pub mod bounds;
pub mod controller;
pub mod indicator;
pub mod phase;
pub mod physics;
pub mod velocity;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bounds::{Bounds, Edge};
pub use controller::ScrollController;
pub use phase::{Motion, Phase, Trigger};
pub use velocity::VelocityTracker;
