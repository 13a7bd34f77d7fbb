//! Frame sinks that log or record instead of painting.

use std::io::Write;

use flick_types::backend::FrameSink;
use flick_types::error::Result;
use flick_types::frame::{Frame, Indicator};

/// Logs each offset change and keeps the latest values.
///
/// Stands in for a real surface: it is the render consumer and the
/// indicator consumer at once.
#[derive(Debug, Default)]
pub struct LogSink {
    pub last_offset: Option<i32>,
    pub last_indicator: Option<Indicator>,
    /// Frames whose offset differed from the previous one.
    pub changes: u32,
}

impl FrameSink for LogSink {
    fn present_offset(&mut self, offset: i32) -> Result<()> {
        if self.last_offset != Some(offset) {
            log::debug!("offset {offset}");
            self.changes += 1;
        }
        self.last_offset = Some(offset);
        Ok(())
    }

    fn present_indicator(&mut self, indicator: &Indicator) -> Result<()> {
        log::trace!(
            "thumb {:.1} long at {:.1}",
            indicator.extent,
            indicator.offset
        );
        self.last_indicator = Some(*indicator);
        Ok(())
    }
}

/// Writes every frame as one JSON line, then passes it on to `inner`.
pub struct FrameDump<W: Write, S: FrameSink> {
    out: W,
    inner: S,
    written: u32,
}

impl<W: Write, S: FrameSink> FrameDump<W, S> {
    pub fn new(out: W, inner: S) -> Self {
        Self {
            out,
            inner,
            written: 0,
        }
    }

    /// Frames written so far.
    pub fn written(&self) -> u32 {
        self.written
    }

    /// Flush the output and hand back both halves.
    pub fn finish(mut self) -> Result<(W, S)> {
        self.out.flush()?;
        Ok((self.out, self.inner))
    }
}

impl<W: Write, S: FrameSink> FrameSink for FrameDump<W, S> {
    fn present_offset(&mut self, offset: i32) -> Result<()> {
        self.inner.present_offset(offset)
    }

    fn present_indicator(&mut self, indicator: &Indicator) -> Result<()> {
        self.inner.present_indicator(indicator)
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        self.inner.present(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_types::error::FlickError;
    use flick_types::frame::PhaseKind;

    fn frame(offset: i32, phase: PhaseKind) -> Frame {
        Frame {
            offset,
            position: f64::from(offset) + 0.25,
            indicator: Indicator {
                extent: 40.0,
                offset: 2.0,
            },
            phase,
        }
    }

    /// Accepts nothing.
    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::StorageFull, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn counts_only_changes() {
        let mut sink = LogSink::default();
        for offset in [0, 0, 4, 9, 9, 9, 10] {
            sink.present_offset(offset).unwrap();
        }
        assert_eq!(sink.changes, 4);
        assert_eq!(sink.last_offset, Some(10));
    }

    #[test]
    fn keeps_last_indicator() {
        let mut sink = LogSink::default();
        let ind = Indicator {
            extent: 30.0,
            offset: 12.0,
        };
        sink.present_indicator(&ind).unwrap();
        assert_eq!(sink.last_indicator, Some(ind));
    }

    #[test]
    fn dump_writes_one_json_line_per_frame() {
        let mut dump = FrameDump::new(Vec::new(), LogSink::default());
        dump.present(&frame(5, PhaseKind::Coasting)).unwrap();
        dump.present(&frame(9, PhaseKind::Idle)).unwrap();
        assert_eq!(dump.written(), 2);

        let (bytes, inner) = dump.finish().unwrap();
        assert_eq!(inner.last_offset, Some(9));
        assert_eq!(inner.changes, 2);
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["offset"], 5);
        assert_eq!(lines[0]["phase"], "Coasting");
        assert_eq!(lines[1]["position"], 9.25);
        assert_eq!(lines[1]["indicator"]["extent"], 40.0);
    }

    #[test]
    fn dump_write_failure_is_json_error() {
        let mut dump = FrameDump::new(Full, LogSink::default());
        let err = dump.present(&frame(1, PhaseKind::Idle)).unwrap_err();
        assert!(matches!(err, FlickError::Json(_)));
        assert_eq!(dump.written(), 0);
        let (_, inner) = dump.finish().unwrap();
        assert_eq!(inner.last_offset, None);
    }
}
