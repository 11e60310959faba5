//! Sphere tracing along a single camera ray.

use field::DistanceField;
use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::consts::{HIT_THRESHOLD, MAX_STEPS, START_DEPTH};

/// A ray that reached the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Field-space point where the distance fell below the threshold.
    pub point: Vec3,
    /// Field evaluations spent, including the final one.
    pub steps: usize,
}

/// Terminal state of a traced ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Trace {
    Hit(Hit),
    /// The step budget ran out before the surface was reached.
    Miss,
}

impl Trace {
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Trace::Hit(_))
    }
}

/// Marching parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tracer {
    pub max_steps: usize,
    pub threshold: f32,
    pub start_depth: f32,
}

impl Default for Tracer {
    fn default() -> Self {
        Self {
            max_steps: MAX_STEPS,
            threshold: HIT_THRESHOLD,
            start_depth: START_DEPTH,
        }
    }
}

impl Tracer {
    #[must_use]
    pub fn steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    #[must_use]
    pub fn precision(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn start(mut self, depth: f32) -> Self {
        self.start_depth = depth;
        self
    }

    /// Marches `ray` through `field` until it touches the surface or the
    /// step budget is spent.
    ///
    /// Each step advances the depth by the sampled distance, which never
    /// overshoots as long as the field is a lower bound on the true
    /// distance.
    #[must_use]
    pub fn trace<F>(&self, field: &F, camera: &Camera, ray: Vec2) -> Trace
    where
        F: DistanceField + ?Sized,
    {
        let clock = camera.clock();
        let mut depth = self.start_depth;
        for step in 0..self.max_steps {
            let point = camera.sample(ray, depth);
            let d = field.distance(point, clock);
            if d <= self.threshold {
                return Trace::Hit(Hit {
                    point,
                    steps: step + 1,
                });
            }
            depth += d;
        }
        Trace::Miss
    }
}
