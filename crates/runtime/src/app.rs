//! Display loop.
//!
//! Drives a [`Renderer`] at a fixed rate and repaints each frame over the
//! previous one. The loop owns no rendering state of its own; everything
//! it shows comes from the renderer's buffers.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use field::{Clock, Shape};
use render::Renderer;

use crate::config::Args;

/// Moves the cursor to the top-left corner.
const CURSOR_HOME: &str = "\x1b[H";
/// Clears the whole screen.
const CLEAR_SCREEN: &str = "\x1b[2J";

/// How often progress is logged.
const LOG_EVERY: u64 = 100;

/// Run the display loop described by `args` on stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails, e.g. when the pipe on the
/// other end is closed.
pub fn run(args: &Args) -> Result<()> {
    let mut renderer = Renderer::with_clock(Clock::at(args.start_tick));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(planar) = args.silhouette {
        tracing::info!(shape = %planar, "drawing silhouette");
        let frame = renderer.silhouette(planar);
        write!(out, "{}", frame.as_str()).context("failed to write silhouette")?;
        return out.flush().context("failed to flush stdout");
    }

    if !args.no_clear {
        write!(out, "{CLEAR_SCREEN}").context("failed to clear screen")?;
    }

    tracing::info!(
        shape = %args.shape,
        frames = args.frames,
        fps = args.fps,
        "starting display loop"
    );
    let drawn = play(
        &mut renderer,
        &mut out,
        args.shape,
        args.frames,
        args.frame_interval(),
    )?;
    tracing::info!(frames = drawn, tick = renderer.clock().tick(), "display loop finished");
    Ok(())
}

/// Draws `frames` frames of `shape` into `out` (forever when `frames` is 0),
/// sleeping off whatever is left of `interval` after each one.
///
/// Returns the number of frames drawn.
///
/// # Errors
///
/// Fails when `out` rejects a write.
pub fn play<W: Write>(
    renderer: &mut Renderer,
    out: &mut W,
    shape: Shape,
    frames: u64,
    interval: Option<Duration>,
) -> Result<u64> {
    let mut drawn = 0;
    while frames == 0 || drawn < frames {
        let frame_start = Instant::now();

        let frame = renderer.frame(shape);
        write!(out, "{CURSOR_HOME}{}", frame.as_str())
            .with_context(|| format!("failed to write frame {drawn}"))?;
        out.flush().context("failed to flush frame")?;
        drawn += 1;

        if drawn % LOG_EVERY == 0 {
            tracing::debug!(frames = drawn, tick = renderer.clock().tick(), "frame progress");
        }

        if let Some(interval) = interval {
            let elapsed = frame_start.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
    }
    Ok(drawn)
}
