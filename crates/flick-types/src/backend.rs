//! Consumer traits for per-frame output.
//!
//! A host surface implements [`FrameSink`] to receive the content offset and
//! the scrollbar indicator after every tick. Painting is entirely the sink's
//! business; the scroll core only computes numbers.

use crate::error::Result;
use crate::frame::{Frame, Indicator};

/// Render and indicator consumer.
pub trait FrameSink {
    /// Apply `offset` as the content translation along the scroll axis.
    fn present_offset(&mut self, offset: i32) -> Result<()>;

    /// Mirror the scroll position on the indicator (thumb).
    fn present_indicator(&mut self, indicator: &Indicator) -> Result<()>;

    /// Deliver a whole frame: offset first, then the indicator.
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.present_offset(frame.offset)?;
        self.present_indicator(&frame.indicator)
    }
}
