//! Gesture scripts: timed pointer and resize events loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use flick_types::error::{FlickError, Result};
use flick_types::geometry::Geometry;
use flick_types::input::{PointerEvent, PointerId};

/// One scripted event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    Down { at_ms: f64, pointer: u32, y: f64 },
    Move { at_ms: f64, pointer: u32, y: f64 },
    Up { at_ms: f64, pointer: u32 },
    Cancel { at_ms: f64, pointer: u32 },
    Resize { at_ms: f64, viewport: f64, content: f64 },
}

/// What the driver does with a scripted event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Pointer(PointerEvent),
    Resize(Geometry),
}

impl ScriptEvent {
    /// Scheduled time since the start of the replay.
    pub fn at_ms(&self) -> f64 {
        match *self {
            Self::Down { at_ms, .. }
            | Self::Move { at_ms, .. }
            | Self::Up { at_ms, .. }
            | Self::Cancel { at_ms, .. }
            | Self::Resize { at_ms, .. } => at_ms,
        }
    }

    pub fn action(&self) -> Action {
        match *self {
            Self::Down { at_ms, pointer, y } => Action::Pointer(PointerEvent::Down {
                pointer_id: PointerId(pointer),
                y,
                timestamp_ms: at_ms,
            }),
            Self::Move { at_ms, pointer, y } => Action::Pointer(PointerEvent::Move {
                pointer_id: PointerId(pointer),
                y,
                timestamp_ms: at_ms,
            }),
            Self::Up { pointer, .. } => Action::Pointer(PointerEvent::Up {
                pointer_id: PointerId(pointer),
            }),
            Self::Cancel { pointer, .. } => Action::Pointer(PointerEvent::Cancel {
                pointer_id: PointerId(pointer),
            }),
            Self::Resize {
                viewport, content, ..
            } => Action::Resize(Geometry::new(viewport, content)),
        }
    }
}

fn default_max_frames() -> u32 {
    600
}

/// A whole replay: starting geometry, frame cap and the event timeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GestureScript {
    pub viewport: f64,
    pub content: f64,
    #[serde(default = "default_max_frames")]
    pub max_frames: u32,
    pub events: Vec<ScriptEvent>,
}

impl GestureScript {
    /// Parse and validate a TOML script.
    pub fn from_toml(text: &str) -> Result<Self> {
        let script: Self = toml::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// The built-in demo script.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(include_str!("../../../scripts/fling.toml"))
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.viewport, self.content)
    }

    /// Timestamps must be finite and non-decreasing; geometry finite and
    /// non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.events.is_empty() {
            return Err(FlickError::Script("script has no events".into()));
        }
        for (name, v) in [("viewport", self.viewport), ("content", self.content)] {
            if !v.is_finite() || v < 0.0 {
                return Err(FlickError::Script(format!("{name} must be >= 0, got {v}")));
            }
        }
        let mut last = 0.0;
        for (i, event) in self.events.iter().enumerate() {
            let at = event.at_ms();
            if !at.is_finite() || at < last {
                return Err(FlickError::Script(format!(
                    "event {i} at {at} ms is out of order (previous at {last} ms)"
                )));
            }
            last = at;
        }
        Ok(())
    }
}

/// Load the script named on the command line, or the built-in demo.
///
/// A path that does not exist falls back to the demo with a warning.
pub fn resolve_script(path: Option<&str>) -> Result<GestureScript> {
    if let Some(path) = path {
        let path = Path::new(path);
        if path.is_file() {
            log::info!("Loading gesture script {}", path.display());
            return GestureScript::from_file(path);
        }
        log::warn!(
            "Gesture script '{}' not found -- falling back to built-in demo",
            path.display()
        );
    }
    GestureScript::builtin()
}
