//! Time-varying fields.
//!
//! Each field here deforms its input point (or blends other fields) by an
//! amount derived from the [`Clock`]. For a fixed point and tick the result
//! is fully deterministic.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::clock::Clock;
use crate::combinators::{smax, smin};
use crate::consts::{
    BUBBLE_BLEND, BUBBLE_COUNT, BUBBLE_RADIUS, BUBBLE_RING, BUBBLE_SPIN, HELIX_BLEND,
    HELIX_FREQUENCY, HELIX_RADIUS, HELIX_SPEED, HELIX_TUBE, MORPH_DEPTH, MORPH_SPEED,
    RIPPLE_AMPLITUDE, RIPPLE_FREQUENCY, RIPPLE_SPEED, TWIST_RATE, TWIST_SPEED, WAVE_AMPLITUDE,
    WAVE_FREQUENCY, WAVE_SPEED,
};
use crate::primitives::{chebyshev_cube, sphere, torus};

/// Torus whose xz plane is rotated by an angle linear in height and time.
#[must_use]
pub fn twisted_torus(p: Vec3, clock: Clock) -> f32 {
    let angle = p.y * TWIST_RATE + clock.time() * TWIST_SPEED;
    let (s, c) = angle.sin_cos();
    let x = c * p.x - s * p.z;
    let z = s * p.x + c * p.z;
    torus(Vec3::new(x, p.y, z))
}

/// Distance in the xz plane from `p` to one helix strand at `phase`.
fn strand(p: Vec3, phase: f32) -> f32 {
    let (s, c) = phase.sin_cos();
    let centre = Vec2::new(HELIX_RADIUS * c, HELIX_RADIUS * s);
    (Vec2::new(p.x, p.z) - centre).length() - HELIX_TUBE
}

/// Double helix running along the y axis, the strands fused with [`smin`].
#[must_use]
pub fn dna_helix(p: Vec3, clock: Clock) -> f32 {
    let phase = p.y * HELIX_FREQUENCY + clock.time() * HELIX_SPEED;
    smin(strand(p, phase), strand(p, phase + PI), HELIX_BLEND)
}

/// Sphere weight of the morph, oscillating in `[0, MORPH_DEPTH]`.
#[must_use]
pub fn morph_weight(clock: Clock) -> f32 {
    MORPH_DEPTH * (1.0 + (clock.time() * MORPH_SPEED).sin()) * 0.5
}

/// Linear blend between a Chebyshev cube and a sphere.
#[must_use]
pub fn cube_sphere_morph(p: Vec3, clock: Clock) -> f32 {
    let w = morph_weight(clock);
    chebyshev_cube(p) * (1.0 - w) + sphere(p) * w
}

/// Union of the slowly spinning bubbles around the organic sphere.
fn bubbles(p: Vec3, clock: Clock) -> f32 {
    let spin = clock.time() * BUBBLE_SPIN;
    (0..BUBBLE_COUNT)
        .map(|i| {
            let angle = TAU * i as f32 / BUBBLE_COUNT as f32 + spin;
            let (s, c) = angle.sin_cos();
            let centre = Vec3::new(BUBBLE_RING * c, 0.0, BUBBLE_RING * s);
            (p - centre).length() - BUBBLE_RADIUS
        })
        .fold(f32::INFINITY, f32::min)
}

/// Sphere with bubbles carved out of its equator and a rippling skin.
#[must_use]
pub fn organic(p: Vec3, clock: Clock) -> f32 {
    let carved = smax(sphere(p), -bubbles(p, clock), BUBBLE_BLEND);
    let phase = clock.time() * RIPPLE_SPEED;
    let ripple = (RIPPLE_FREQUENCY * p.x + phase).sin() * (RIPPLE_FREQUENCY * p.y + phase).sin();
    carved + RIPPLE_AMPLITUDE * ripple
}

/// Sphere whose height input is displaced by a travelling sine along x.
#[must_use]
pub fn wave(p: Vec3, clock: Clock) -> f32 {
    let offset = WAVE_AMPLITUDE * (WAVE_FREQUENCY * p.x + clock.time() * WAVE_SPEED).sin();
    sphere(Vec3::new(p.x, p.y - offset, p.z))
}
