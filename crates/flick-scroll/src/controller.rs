//! The scroll controller: one instance per scrollable surface.

use flick_types::backend::FrameSink;
use flick_types::config::PhysicsConfig;
use flick_types::error::Result;
use flick_types::frame::{Frame, Indicator, PhaseKind};
use flick_types::geometry::Geometry;
use flick_types::input::{PointerEvent, PointerId};

use crate::bounds::Bounds;
use crate::indicator;
use crate::phase::{Motion, Phase, Trigger};

/// Owns the scroll position, the state machine and the geometry it runs in.
///
/// Input handlers and [`tick`](Self::tick) are the only ways to change state.
/// Nothing here blocks or schedules: the host delivers pointer events as they
/// arrive and calls `tick` once per frame.
#[derive(Debug, Clone)]
pub struct ScrollController {
    config: PhysicsConfig,
    geometry: Geometry,
    bounds: Bounds,
    motion: Motion,
}

impl ScrollController {
    /// Controller with the default physics, resting at the top.
    pub fn new(geometry: Geometry) -> Self {
        Self::build(geometry, PhysicsConfig::default())
    }

    /// Controller with custom physics. The config is validated first.
    pub fn with_config(geometry: Geometry, config: PhysicsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(geometry, config))
    }

    fn build(geometry: Geometry, config: PhysicsConfig) -> Self {
        let bounds = Bounds::from_geometry(&geometry);
        log::debug!(
            "scroll controller: viewport {} content {} range [{}, {}]",
            geometry.viewport_extent,
            geometry.content_extent,
            bounds.min,
            bounds.max
        );
        Self {
            config,
            geometry,
            bounds,
            motion: Motion::default(),
        }
    }

    // -- Input --

    /// Pointer down: capture `pointer_id` and start dragging.
    ///
    /// Any coast or spring in progress is dropped on the spot.
    pub fn session_start(&mut self, pointer_id: PointerId, y: f64, timestamp_ms: f64) {
        self.apply(Trigger::Press {
            pointer_id,
            y,
            timestamp_ms,
        });
    }

    /// Pointer move of the captured pointer. Ignored unless dragging.
    pub fn session_move(&mut self, y: f64, timestamp_ms: f64) {
        self.apply(Trigger::Drag { y, timestamp_ms });
    }

    /// Pointer up: release the capture and spring, coast or rest.
    pub fn session_end(&mut self) {
        self.apply(Trigger::Release);
    }

    /// Host interrupted the session. Handled exactly like a release so the
    /// controller can never be left dragging.
    pub fn session_cancel(&mut self) {
        log::debug!("pointer session cancelled");
        self.apply(Trigger::Release);
    }

    /// Dispatch a raw pointer event.
    ///
    /// Moves, releases and cancels only count for the captured pointer.
    pub fn handle_event(&mut self, event: &PointerEvent) {
        if let PointerEvent::Down {
            pointer_id,
            y,
            timestamp_ms,
        } = *event
        {
            self.session_start(pointer_id, y, timestamp_ms);
            return;
        }

        if self.captured_pointer() != Some(event.pointer_id()) {
            log::trace!("ignoring {event:?}: pointer not captured");
            return;
        }

        match *event {
            PointerEvent::Move { y, timestamp_ms, .. } => self.session_move(y, timestamp_ms),
            PointerEvent::Up { .. } => self.session_end(),
            PointerEvent::Cancel { .. } => self.session_cancel(),
            PointerEvent::Down { .. } => {},
        }
    }

    // -- Frame --

    /// Advance one frame of `dt` seconds and report what to draw.
    pub fn tick(&mut self, dt: f64) -> Frame {
        self.apply(Trigger::Frame { dt });
        self.frame()
    }

    /// [`tick`](Self::tick), then hand the frame to `sink`.
    pub fn tick_into(&mut self, dt: f64, sink: &mut dyn FrameSink) -> Result<Frame> {
        let frame = self.tick(dt);
        sink.present(&frame)?;
        Ok(frame)
    }

    /// Current output without advancing.
    pub fn frame(&self) -> Frame {
        Frame {
            offset: self.offset(),
            position: self.motion.position,
            indicator: self.indicator(),
            phase: self.phase(),
        }
    }

    // -- Geometry --

    /// New viewport/content extents (resize, content reflow).
    ///
    /// Bounds are recomputed and a position left outside them is handled
    /// per the configured resize policy.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.bounds = Bounds::from_geometry(&geometry);
        log::debug!(
            "geometry: viewport {} content {} range [{}, {}]",
            geometry.viewport_extent,
            geometry.content_extent,
            self.bounds.min,
            self.bounds.max
        );
        self.motion.rebound(&self.bounds, self.config.resize_policy);
    }

    // -- Accessors --

    pub fn position(&self) -> f64 {
        self.motion.position
    }

    /// Position rounded to whole units, as handed to the renderer.
    pub fn offset(&self) -> i32 {
        self.motion.position.round() as i32
    }

    /// Signed velocity; zero unless coasting or springing.
    pub fn velocity(&self) -> f64 {
        self.motion.velocity()
    }

    pub fn phase(&self) -> PhaseKind {
        self.motion.phase.kind()
    }

    /// Whether the host must keep ticking for the motion to finish.
    pub fn is_animating(&self) -> bool {
        self.phase().is_animating()
    }

    /// The bound being returned to, only while springing.
    pub fn spring_target(&self) -> Option<f64> {
        match self.motion.phase {
            Phase::Springing { edge, .. } => Some(self.bounds.edge(edge)),
            _ => None,
        }
    }

    /// The pointer owning the current drag.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        match &self.motion.phase {
            Phase::Dragging(session) => Some(session.pointer_id),
            _ => None,
        }
    }

    /// Release velocity the current drag would produce right now.
    pub fn estimate_velocity(&self) -> f64 {
        match &self.motion.phase {
            Phase::Dragging(session) => session.history.estimate(),
            _ => 0.0,
        }
    }

    pub fn indicator(&self) -> Indicator {
        indicator::compute(
            &self.geometry,
            self.motion.position,
            &self.bounds,
            self.config.min_indicator_extent,
        )
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Full state, for inspection in tests and debug overlays.
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    fn apply(&mut self, trigger: Trigger) {
        self.motion.apply(trigger, &self.bounds, &self.config);
    }
}

#[cfg(test)]
impl ScrollController {
    /// Force a state, bypassing input. Test-only.
    pub(crate) fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
    }
}
