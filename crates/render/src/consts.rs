//! Grid and tracer constants.

/// Characters per row.
pub const WIDTH: usize = 120;
/// Rows per frame.
pub const HEIGHT: usize = 40;
/// Exact length of a frame: every row plus its line break, plus the
/// trailing sentinel.
pub const CAPACITY: usize = HEIGHT * (WIDTH + 1) + 1;

/// Row terminator.
pub const LINE_BREAK: char = '\n';
/// Frame terminator.
pub const SENTINEL: char = '\0';

/// Step budget of one ray.
pub const MAX_STEPS: usize = 30;
/// Distance at or below which a ray counts as touching the surface.
pub const HIT_THRESHOLD: f32 = 0.01;
/// Offset of the central-difference normal stencil.
pub const NORMAL_EPSILON: f32 = 0.001;
/// Depth every ray starts marching from.
pub const START_DEPTH: f32 = -10.0;
