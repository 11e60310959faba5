//! Static distance fields centred at the origin.

use glam::{Vec2, Vec3};

use crate::consts::{
    CAPSULE_HALF_LENGTH, GYROID_OFFSET, GYROID_SCALE, INV_SQRT_3, RADIUS, THICKNESS,
};

/// Sphere of radius [`RADIUS`].
#[must_use]
pub fn sphere(p: Vec3) -> f32 {
    p.length() - RADIUS
}

/// Torus lying in the xy plane: major radius [`RADIUS`], tube [`THICKNESS`].
#[must_use]
pub fn torus(p: Vec3) -> f32 {
    let ring = Vec2::new(p.x, p.y).length() - RADIUS;
    Vec2::new(ring, p.z).length() - THICKNESS / 2.0
}

/// Regular octahedron with vertices at distance [`RADIUS`] on each axis.
///
/// This is a bound rather than the exact distance, which is all the tracer
/// needs.
#[must_use]
pub fn octahedron(p: Vec3) -> f32 {
    let q = p.abs();
    (q.x + q.y + q.z - RADIUS) * INV_SQRT_3
}

/// Capsule around the unit segment `(-0.5, 0, 0)..(0.5, 0, 0)`.
#[must_use]
pub fn capsule(p: Vec3) -> f32 {
    let start = Vec3::new(-CAPSULE_HALF_LENGTH, 0.0, 0.0);
    let end = Vec3::new(CAPSULE_HALF_LENGTH, 0.0, 0.0);
    let axis = end - start;
    let rel = p - start;
    let h = (rel.dot(axis) / axis.dot(axis)).clamp(0.0, 1.0);
    (rel - axis * h).length() - THICKNESS
}

/// Infinite gyroid lattice.
#[must_use]
pub fn gyroid(p: Vec3) -> f32 {
    let q = p * GYROID_SCALE;
    let g = q.x.sin() * q.y.cos() + q.y.sin() * q.z.cos() + q.z.sin() * q.x.cos();
    g / GYROID_SCALE - GYROID_OFFSET
}

/// Axis-aligned cube of half size [`RADIUS`] under the Chebyshev metric.
#[must_use]
pub fn chebyshev_cube(p: Vec3) -> f32 {
    p.abs().max_element() - RADIUS
}
