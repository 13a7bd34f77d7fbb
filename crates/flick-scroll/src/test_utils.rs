//! Shared test utilities for flick-scroll tests.
//!
//! Provides a [`RecordingSink`] that records everything presented to it.

use flick_types::backend::FrameSink;
use flick_types::error::{FlickError, Result};
use flick_types::frame::Indicator;

/// A sink that records offsets and indicators for assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub offsets: Vec<i32>,
    pub indicators: Vec<Indicator>,
    fail: bool,
}

impl RecordingSink {
    /// A sink whose every call fails, as a detached surface would.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl FrameSink for RecordingSink {
    fn present_offset(&mut self, offset: i32) -> Result<()> {
        if self.fail {
            return Err(FlickError::Sink("surface detached".into()));
        }
        self.offsets.push(offset);
        Ok(())
    }

    fn present_indicator(&mut self, indicator: &Indicator) -> Result<()> {
        if self.fail {
            return Err(FlickError::Sink("surface detached".into()));
        }
        self.indicators.push(*indicator);
        Ok(())
    }
}
