//! Fixed orthographic camera spinning about the vertical axis.
//!
//! Every grid cell owns one ray whose lateral position `(rx, ry)` never
//! changes; only its depth advances while marching. The camera, not the
//! shape, is rotated by the clock, which gives every shape the same slow
//! spin without touching the fields themselves.

use field::Clock;
use glam::{Vec2, Vec3};

use crate::consts::{HEIGHT, WIDTH};

/// Camera orientation for one frame.
///
/// Built once per pass from the captured [`Clock`], so every cell of the
/// frame sees the same rotation.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    clock: Clock,
    sin: f32,
    cos: f32,
}

impl Camera {
    /// Camera at the rotation implied by `clock`.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        let (sin, cos) = clock.rotation().sin_cos();
        Self { clock, sin, cos }
    }

    /// The clock this camera was built from.
    #[must_use]
    pub const fn clock(&self) -> Clock {
        self.clock
    }

    /// Maps grid cell `(x, y)` to its aspect-corrected ray position.
    ///
    /// `rx` spans `[-1, 1)` across the row. `ry` is scaled by
    /// `2 * HEIGHT / WIDTH` since a character cell is roughly twice as tall
    /// as it is wide.
    #[must_use]
    pub fn ray(x: usize, y: usize) -> Vec2 {
        let rx = (x as f32 / WIDTH as f32) * 2.0 - 1.0;
        let ry = ((y as f32 / HEIGHT as f32) * 2.0 - 1.0) * (2.0 * HEIGHT as f32 / WIDTH as f32);
        Vec2::new(rx, ry)
    }

    /// Field-space point of `ray` at `depth`, rotated about the y axis.
    #[must_use]
    pub fn sample(&self, ray: Vec2, depth: f32) -> Vec3 {
        let x = ray.x * self.cos - depth * self.sin;
        let z = ray.x * self.sin + depth * self.cos;
        Vec3::new(x, ray.y, z)
    }
}
