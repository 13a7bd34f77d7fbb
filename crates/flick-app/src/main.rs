//! flick replay driver.
//!
//! Replays a gesture script through a scroll controller at a fixed frame
//! rate and logs what a renderer would have been asked to draw.
//!
//! Usage: `flick-replay [script.toml]`. The script may also come from
//! `FLICK_SCRIPT`; physics overrides are read from the TOML file named by
//! `FLICK_CONFIG`. `FLICK_DUMP` names a file that receives every frame as
//! one JSON line. Without a script the built-in fling demo runs. Set
//! `RUST_LOG=debug` to see every transition and offset change.

mod driver;
mod script;
mod sink;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use driver::Replay;
use flick_types::config::PhysicsConfig;
use sink::{FrameDump, LogSink};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var("FLICK_CONFIG") {
        Ok(path) => PhysicsConfig::from_file(Path::new(&path))
            .with_context(|| format!("loading physics config {path}"))?,
        Err(_) => PhysicsConfig::default(),
    };

    // Resolve script from CLI arg, FLICK_SCRIPT env var, or the built-in demo.
    let script_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FLICK_SCRIPT").ok());
    let script = script::resolve_script(script_path.as_deref())?;

    log::info!(
        "Replaying {} events: viewport {} content {} at {:.0} fps",
        script.events.len(),
        script.viewport,
        script.content,
        1.0 / config.frame_dt,
    );

    let mut replay = Replay::new(script, config)?;
    let (summary, sink) = match std::env::var("FLICK_DUMP") {
        Ok(path) => {
            let file =
                File::create(&path).with_context(|| format!("creating frame dump {path}"))?;
            let mut dump = FrameDump::new(BufWriter::new(file), LogSink::default());
            let summary = replay.run(&mut dump)?;
            log::info!("Wrote {} frames to {path}", dump.written());
            let (_, sink) = dump.finish()?;
            (summary, sink)
        },
        Err(_) => {
            let mut sink = LogSink::default();
            let summary = replay.run(&mut sink)?;
            (summary, sink)
        },
    };

    log::info!(
        "{} after {} frames: offset {}, {} offset changes, max overscroll {:.1}",
        if summary.settled { "Settled" } else { "Stopped" },
        summary.frames,
        summary.last_frame.offset,
        sink.changes,
        summary.max_overscroll,
    );
    let bounds = replay.controller().bounds();
    log::info!(
        "{} events delivered, final range [{}, {}]",
        summary.events_delivered,
        bounds.min,
        bounds.max
    );
    for (phase, frames) in &summary.phase_frames {
        log::info!("  {phase:<10} {frames} frames");
    }
    if let Some(thumb) = sink.last_indicator {
        log::info!(
            "Indicator: {:.1} long at {:.1}",
            thumb.extent,
            thumb.offset
        );
    }

    Ok(())
}
