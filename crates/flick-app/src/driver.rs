//! Frame loop that replays a gesture script.
//!
//! The controller never schedules itself, so this is the piece that owns
//! time: a simulated clock advancing `frame_dt` per frame. Events due at or
//! before the current frame are delivered before that frame's tick.

use std::collections::BTreeMap;

use flick_scroll::ScrollController;
use flick_types::backend::FrameSink;
use flick_types::config::PhysicsConfig;
use flick_types::error::Result;
use flick_types::frame::{Frame, PhaseKind};

use crate::script::{Action, GestureScript, ScriptEvent};

/// What happened during a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    pub frames: u32,
    pub events_delivered: usize,
    pub last_frame: Frame,
    /// Furthest distance past either bound.
    pub max_overscroll: f64,
    /// Frames spent in each phase.
    pub phase_frames: BTreeMap<&'static str, u32>,
    /// Whether the replay stopped because everything came to rest.
    pub settled: bool,
}

/// Drives one controller through a script.
pub struct Replay {
    controller: ScrollController,
    events: Vec<ScriptEvent>,
    next_event: usize,
    clock_ms: f64,
    frame_dt: f64,
    max_frames: u32,
}

impl Replay {
    pub fn new(script: GestureScript, config: PhysicsConfig) -> Result<Self> {
        script.validate()?;
        if !script.geometry().is_scrollable() {
            log::warn!(
                "content {} fits in viewport {}; nothing will scroll",
                script.content,
                script.viewport
            );
        }
        let frame_dt = config.frame_dt;
        let controller = ScrollController::with_config(script.geometry(), config)?;
        Ok(Self {
            controller,
            events: script.events,
            next_event: 0,
            clock_ms: 0.0,
            frame_dt,
            max_frames: script.max_frames,
        })
    }

    pub fn controller(&self) -> &ScrollController {
        &self.controller
    }

    /// Run frames until the script is exhausted and motion has stopped, or
    /// the frame cap is hit.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> Result<ReplaySummary> {
        let mut phase_frames = BTreeMap::new();
        let mut max_overscroll: f64 = 0.0;
        let mut frames: u32 = 0;
        let mut last_frame = self.controller.frame();
        let mut settled = false;

        while frames < self.max_frames {
            self.deliver_due_events();

            let frame = self.controller.tick_into(self.frame_dt, sink)?;
            frames += 1;
            self.clock_ms = f64::from(frames) * self.frame_dt * 1000.0;

            *phase_frames.entry(phase_name(frame.phase)).or_insert(0) += 1;
            let bounds = self.controller.bounds();
            let past = (bounds.min - frame.position).max(frame.position - bounds.max);
            max_overscroll = max_overscroll.max(past);
            last_frame = frame;

            if self.is_finished(&frame) {
                settled = true;
                break;
            }
        }

        if !settled {
            log::warn!(
                "Replay hit the {} frame cap while {:?}",
                self.max_frames,
                last_frame.phase
            );
        }

        Ok(ReplaySummary {
            frames,
            events_delivered: self.next_event,
            last_frame,
            max_overscroll,
            phase_frames,
            settled,
        })
    }

    fn deliver_due_events(&mut self) {
        while let Some(event) = self.events.get(self.next_event) {
            if event.at_ms() > self.clock_ms {
                break;
            }
            match event.action() {
                Action::Pointer(pointer) => self.controller.handle_event(&pointer),
                Action::Resize(geometry) => self.controller.set_geometry(geometry),
            }
            self.next_event += 1;
        }
    }

    fn is_finished(&self, frame: &Frame) -> bool {
        self.next_event == self.events.len()
            && !frame.moving()
            && frame.phase != PhaseKind::Dragging
    }
}

fn phase_name(phase: PhaseKind) -> &'static str {
    match phase {
        PhaseKind::Idle => "idle",
        PhaseKind::Dragging => "dragging",
        PhaseKind::Coasting => "coasting",
        PhaseKind::Springing => "springing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{FrameDump, LogSink};
    use flick_types::config::ResizePolicy;

    fn replay(text: &str) -> (Replay, ReplaySummary) {
        let script = GestureScript::from_toml(text).unwrap();
        let mut replay = Replay::new(script, PhysicsConfig::default()).unwrap();
        let mut sink = LogSink::default();
        let summary = replay.run(&mut sink).unwrap();
        assert_eq!(sink.last_offset, Some(summary.last_frame.offset));
        (replay, summary)
    }

    #[test]
    fn builtin_demo_settles_at_new_end() {
        let script = GestureScript::builtin().unwrap();
        let mut replay = Replay::new(script, PhysicsConfig::default()).unwrap();
        let summary = replay.run(&mut LogSink::default()).unwrap();
        assert!(summary.settled);
        assert_eq!(summary.events_delivered, 9);
        assert_eq!(summary.last_frame.phase, PhaseKind::Idle);
        // Content shrank to 1200 under a 500 viewport.
        assert_eq!(summary.last_frame.offset, 700);
        assert!(summary.max_overscroll > 0.0);
        assert!(summary.phase_frames["springing"] > 0);
        assert!(summary.phase_frames["coasting"] > 0);
    }

    #[test]
    fn builtin_demo_with_clamp_policy() {
        let script = GestureScript::builtin().unwrap();
        let config = PhysicsConfig {
            resize_policy: ResizePolicy::Clamp,
            ..PhysicsConfig::default()
        };
        let mut replay = Replay::new(script, config).unwrap();
        let summary = replay.run(&mut LogSink::default()).unwrap();
        assert!(summary.settled);
        assert_eq!(summary.last_frame.offset, 700);
        assert_eq!(replay.controller().position(), 700.0);
    }

    #[test]
    fn cancelled_drag_does_not_stick() {
        let (replay, summary) = replay(
            r#"
viewport = 500.0
content = 1500.0

[[events]]
kind = "down"
at_ms = 0.0
pointer = 1
y = 0.0

[[events]]
kind = "move"
at_ms = 16.0
pointer = 1
y = 8.0

[[events]]
kind = "cancel"
at_ms = 20.0
pointer = 1
"#,
        );
        assert!(summary.settled);
        assert!(replay.controller().captured_pointer().is_none());
        assert_eq!(summary.last_frame.phase, PhaseKind::Idle);
        assert!(replay.controller().bounds().contains(summary.last_frame.position));
    }

    #[test]
    fn held_drag_runs_into_frame_cap() {
        let (_, summary) = replay(
            r#"
viewport = 500.0
content = 1500.0
max_frames = 30

[[events]]
kind = "down"
at_ms = 0.0
pointer = 1
y = 0.0
"#,
        );
        assert!(!summary.settled);
        assert_eq!(summary.frames, 30);
        assert_eq!(summary.last_frame.phase, PhaseKind::Dragging);
    }

    #[test]
    fn events_wait_for_their_frame() {
        let (_, summary) = replay(
            r#"
viewport = 500.0
content = 1500.0

[[events]]
kind = "resize"
at_ms = 990.0
viewport = 500.0
content = 500.0
"#,
        );
        // Frame 61 is the first whose clock (1000 ms) has reached 990 ms.
        assert_eq!(summary.frames, 61);
        assert_eq!(summary.events_delivered, 1);
    }

    #[test]
    fn dump_records_every_frame_of_the_demo() {
        let script = GestureScript::builtin().unwrap();
        let mut replay = Replay::new(script, PhysicsConfig::default()).unwrap();
        let mut dump = FrameDump::new(Vec::new(), LogSink::default());
        let summary = replay.run(&mut dump).unwrap();
        assert_eq!(dump.written(), summary.frames);

        let (bytes, sink) = dump.finish().unwrap();
        assert_eq!(sink.last_offset, Some(700));
        let text = String::from_utf8(bytes).unwrap();
        let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last["offset"], 700);
        assert_eq!(last["phase"], "Idle");
        assert_eq!(text.lines().count(), summary.frames as usize);
    }
}
