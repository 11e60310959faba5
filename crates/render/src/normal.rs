//! Surface orientation from finite differences.

use field::{Clock, DistanceField};
use glam::Vec3;

use crate::consts::NORMAL_EPSILON;

/// Unit normal of `field` at `p` from a six-sample central difference.
///
/// Only used for shading, so the stencil is fixed at [`NORMAL_EPSILON`] to
/// keep glyphs reproducible from frame to frame.
#[must_use]
pub fn estimate_normal<F>(field: &F, p: Vec3, clock: Clock) -> Vec3
where
    F: DistanceField + ?Sized,
{
    let f = |x: f32, y: f32, z: f32| field.distance(Vec3::new(x, y, z), clock);
    let e = NORMAL_EPSILON;
    let gradient = Vec3::new(
        f(p.x + e, p.y, p.z) - f(p.x - e, p.y, p.z),
        f(p.x, p.y + e, p.z) - f(p.x, p.y - e, p.z),
        f(p.x, p.y, p.z + e) - f(p.x, p.y, p.z - e),
    );
    gradient / gradient.length()
}
