//! Animation clock.
//!
//! A frame counter that every time-dependent field reads. The renderer
//! captures one [`Clock`] value before a pass and hands it to every field
//! evaluation of that pass, then advances its own copy once the pass is
//! written, so no evaluation can observe a tick from a different frame.

use std::f64::consts::TAU;

/// Camera rotation in radians per tick.
pub const ROTATION_RATE: f32 = 0.003;

/// Monotonic frame counter, starting at zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clock {
    tick: u64,
}

impl Clock {
    /// Creates a clock positioned at `tick`.
    #[must_use]
    pub const fn at(tick: u64) -> Self {
        Self { tick }
    }

    /// Number of frames finished so far.
    #[must_use]
    pub const fn tick(self) -> u64 {
        self.tick
    }

    /// The tick as a float, the unit every phase multiplier is applied to.
    #[must_use]
    pub fn time(self) -> f32 {
        self.tick as f32
    }

    /// Global camera rotation `(tick * 0.003) mod 2π`.
    ///
    /// The product is taken in `f32` and the modulo in `f64`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rotation(self) -> f32 {
        (f64::from(self.time() * ROTATION_RATE) % TAU) as f32
    }

    /// Moves the clock forward by exactly one frame.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
