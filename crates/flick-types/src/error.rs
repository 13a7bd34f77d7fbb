//! Error types for flick.

use std::io;

/// Errors produced by the flick crates.
///
/// The scroll core itself is infallible; these cover the surfaces around it.
#[derive(Debug, thiserror::Error)]
pub enum FlickError {
    #[error("config error: {0}")]
    Config(String),

    #[error("sink error: {0}")]
    Sink(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FlickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = FlickError::Config("friction out of range".into());
        assert_eq!(format!("{e}"), "config error: friction out of range");
    }

    #[test]
    fn sink_error_display() {
        let e = FlickError::Sink("surface detached".into());
        assert_eq!(format!("{e}"), "sink error: surface detached");
    }

    #[test]
    fn script_error_display() {
        let e = FlickError::Script("no events".into());
        assert_eq!(format!("{e}"), "script error: no events");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: FlickError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("friction = [[[").unwrap_err();
        let e: FlickError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: FlickError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(FlickError::Sink("oops".into()));
        assert!(r.is_err());
    }
}
