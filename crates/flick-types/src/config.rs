//! Physics configuration.
//!
//! Every tunable of the scroll model lives here with the defaults that give
//! the classic touch-scroll feel. Loaded from TOML; missing keys fall back to
//! the defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FlickError, Result};

/// What to do with a position left out of range by a geometry change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    /// Spring back to the violated bound on the following ticks.
    #[default]
    Spring,
    /// Jump into the new bounds immediately.
    Clamp,
}

/// Tunables of the drag, coast and spring models.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Drag factor applied while the position is past a bound.
    pub overscroll_damping: f64,
    /// Per-tick velocity multiplier while coasting.
    pub friction: f64,
    /// Below this speed (units/s) a release does not coast and a coast stops.
    pub stop_velocity: f64,
    /// Release velocity clamp (units/s).
    pub max_velocity: f64,
    /// Fraction of the remaining distance covered per spring tick.
    pub spring_k: f64,
    /// Spring snaps onto its target once closer than this.
    pub snap_distance: f64,
    /// Number of drag moves averaged into the release velocity.
    pub history_len: usize,
    /// Indicator never gets shorter than this.
    pub min_indicator_extent: f64,
    /// Nominal timestep (seconds) the driver passes to `tick`.
    pub frame_dt: f64,
    pub resize_policy: ResizePolicy,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            overscroll_damping: 0.4,
            friction: 0.95,
            stop_velocity: 5.0,
            max_velocity: 2000.0,
            spring_k: 0.15,
            snap_distance: 0.5,
            history_len: 5,
            min_indicator_extent: 20.0,
            frame_dt: 1.0 / 60.0,
            resize_policy: ResizePolicy::Spring,
        }
    }
}

impl PhysicsConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loading physics config from {}", path.display());
        Self::from_toml(&text)
    }

    /// Reject values that would make the model diverge or never settle.
    pub fn validate(&self) -> Result<()> {
        let unit = |name: &str, v: f64| -> Result<()> {
            if v.is_finite() && v > 0.0 && v <= 1.0 {
                Ok(())
            } else {
                Err(FlickError::Config(format!("{name} must be in (0, 1], got {v}")))
            }
        };
        let positive = |name: &str, v: f64| -> Result<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(FlickError::Config(format!("{name} must be positive, got {v}")))
            }
        };

        unit("overscroll_damping", self.overscroll_damping)?;
        unit("friction", self.friction)?;
        unit("spring_k", self.spring_k)?;
        positive("stop_velocity", self.stop_velocity)?;
        positive("max_velocity", self.max_velocity)?;
        positive("snap_distance", self.snap_distance)?;
        positive("frame_dt", self.frame_dt)?;
        if !self.min_indicator_extent.is_finite() || self.min_indicator_extent < 0.0 {
            return Err(FlickError::Config(format!(
                "min_indicator_extent must be non-negative, got {}",
                self.min_indicator_extent
            )));
        }
        if self.history_len == 0 {
            return Err(FlickError::Config("history_len must be at least 1".into()));
        }
        if self.max_velocity < self.stop_velocity {
            return Err(FlickError::Config(
                "max_velocity must not be below stop_velocity".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let cfg = PhysicsConfig::default();
        assert!((cfg.overscroll_damping - 0.4).abs() < f64::EPSILON);
        assert!((cfg.friction - 0.95).abs() < f64::EPSILON);
        assert_eq!(cfg.stop_velocity, 5.0);
        assert_eq!(cfg.max_velocity, 2000.0);
        assert!((cfg.spring_k - 0.15).abs() < f64::EPSILON);
        assert_eq!(cfg.snap_distance, 0.5);
        assert_eq!(cfg.history_len, 5);
        assert_eq!(cfg.min_indicator_extent, 20.0);
        assert!((cfg.frame_dt - 1.0 / 60.0).abs() < f64::EPSILON);
        assert_eq!(cfg.resize_policy, ResizePolicy::Spring);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = PhysicsConfig::from_toml("friction = 0.9\nresize_policy = \"clamp\"").unwrap();
        assert!((cfg.friction - 0.9).abs() < f64::EPSILON);
        assert_eq!(cfg.resize_policy, ResizePolicy::Clamp);
        assert_eq!(cfg.history_len, 5);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(PhysicsConfig::from_toml("").unwrap(), PhysicsConfig::default());
    }

    #[test]
    fn friction_above_one_rejected() {
        let err = PhysicsConfig::from_toml("friction = 1.5").unwrap_err();
        assert!(matches!(err, FlickError::Config(_)));
        assert!(format!("{err}").contains("friction"));
    }

    #[test]
    fn zero_history_rejected() {
        let cfg = PhysicsConfig {
            history_len: 0,
            ..PhysicsConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn max_below_stop_rejected() {
        let cfg = PhysicsConfig {
            max_velocity: 1.0,
            ..PhysicsConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unknown_policy_is_parse_error() {
        let err = PhysicsConfig::from_toml("resize_policy = \"wobble\"").unwrap_err();
        assert!(matches!(err, FlickError::TomlParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PhysicsConfig::from_file(Path::new("/nonexistent/flick.toml")).unwrap_err();
        assert!(matches!(err, FlickError::Io(_)));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn in_range_friction_validates(friction in 0.01f64..=1.0) {
                let cfg = PhysicsConfig { friction, ..PhysicsConfig::default() };
                prop_assert!(cfg.validate().is_ok());
            }

            #[test]
            fn non_positive_dt_rejected(frame_dt in -1.0f64..=0.0) {
                let cfg = PhysicsConfig { frame_dt, ..PhysicsConfig::default() };
                prop_assert!(cfg.validate().is_err());
            }
        }
    }
}
