//! Command-line configuration of the display loop.

use std::time::Duration;

use clap::Parser;
use field::{PlanarShape, Shape};
use tracing::Level;

/// Animated ASCII renderings of signed distance fields
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Shape to animate (torus, sphere, octahedron, capsule, gyroid,
    /// twisted-torus, dna-helix, morph, organic, wave)
    #[arg(short, long, default_value = "torus")]
    pub shape: Shape,

    /// Number of frames to draw; 0 runs until interrupted
    #[arg(short, long, default_value_t = 0)]
    pub frames: u64,

    /// Target frame rate; 0 draws as fast as possible
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    /// Tick of the first frame
    #[arg(long, default_value_t = 0)]
    pub start_tick: u64,

    /// Draw one flat silhouette (circle, annulus) instead of animating
    #[arg(long)]
    pub silhouette: Option<PlanarShape>,

    /// Do not clear the terminal before the first frame
    #[arg(long)]
    pub no_clear: bool,

    /// Log progress at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Time budget of one frame, if pacing is enabled.
    #[must_use]
    pub fn frame_interval(&self) -> Option<Duration> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return None;
        }
        Duration::try_from_secs_f32(1.0 / self.fps).ok()
    }

    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["sdf_ascii"]);
        assert_eq!(args.shape, Shape::Torus);
        assert_eq!(args.frames, 0);
        assert!(args.silhouette.is_none());
        assert_eq!(args.log_level(), Level::INFO);
    }

    #[test]
    fn parses_shape_names() {
        let args = Args::parse_from(["sdf_ascii", "--shape", "dna-helix", "--frames", "3"]);
        assert_eq!(args.shape, Shape::DnaHelix);
        assert_eq!(args.frames, 3);
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!(Args::try_parse_from(["sdf_ascii", "--shape", "teapot"]).is_err());
    }

    #[test]
    fn zero_fps_disables_pacing() {
        let args = Args::parse_from(["sdf_ascii", "--fps", "0"]);
        assert_eq!(args.frame_interval(), None);
        let args = Args::parse_from(["sdf_ascii", "--fps", "4"]);
        assert_eq!(args.frame_interval(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn subnormal_fps_disables_pacing() {
        // 1 / 1e-40 overflows to infinity, which no Duration can hold.
        let args = Args::parse_from(["sdf_ascii", "--fps", "1e-40"]);
        assert_eq!(args.frame_interval(), None);
    }
}
