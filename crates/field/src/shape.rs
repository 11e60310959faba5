//! Closed set of renderable shapes and the distance-evaluation interface.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::animated::{cube_sphere_morph, dna_helix, organic, twisted_torus, wave};
use crate::clock::Clock;
use crate::error::FieldError;
use crate::primitives::{capsule, gyroid, octahedron, sphere, torus};

/// Anything that can report a signed distance at a point and time.
///
/// Implemented by [`Shape`] and by any closure `Fn(Vec3, Clock) -> f32`,
/// which keeps the tracer usable with ad hoc fields in tests.
pub trait DistanceField {
    /// Signed distance from `p` to the surface at the given clock.
    fn distance(&self, p: Vec3, clock: Clock) -> f32;
}

impl<F> DistanceField for F
where
    F: Fn(Vec3, Clock) -> f32,
{
    fn distance(&self, p: Vec3, clock: Clock) -> f32 {
        self(p, clock)
    }
}

/// Every shape the renderer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Torus,
    Sphere,
    Octahedron,
    Capsule,
    Gyroid,
    TwistedTorus,
    DnaHelix,
    CubeSphereMorph,
    Organic,
    Wave,
}

impl Shape {
    /// Number of variants.
    pub const COUNT: usize = 10;

    /// All shapes in declaration order; `ALL[s.index()] == s`.
    pub const ALL: [Shape; Shape::COUNT] = [
        Shape::Torus,
        Shape::Sphere,
        Shape::Octahedron,
        Shape::Capsule,
        Shape::Gyroid,
        Shape::TwistedTorus,
        Shape::DnaHelix,
        Shape::CubeSphereMorph,
        Shape::Organic,
        Shape::Wave,
    ];

    /// Position of the shape in [`Shape::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Command-line name of the shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Torus => "torus",
            Shape::Sphere => "sphere",
            Shape::Octahedron => "octahedron",
            Shape::Capsule => "capsule",
            Shape::Gyroid => "gyroid",
            Shape::TwistedTorus => "twisted-torus",
            Shape::DnaHelix => "dna-helix",
            Shape::CubeSphereMorph => "morph",
            Shape::Organic => "organic",
            Shape::Wave => "wave",
        }
    }

    /// Whether the shape reads the clock itself (beyond the camera spin).
    #[must_use]
    pub const fn is_animated(self) -> bool {
        matches!(
            self,
            Shape::TwistedTorus
                | Shape::DnaHelix
                | Shape::CubeSphereMorph
                | Shape::Organic
                | Shape::Wave
        )
    }

    /// Whether the surface stays within a finite distance of the y axis.
    ///
    /// The gyroid fills all of space, so any ray eventually meets it.
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Shape::Gyroid)
    }
}

impl DistanceField for Shape {
    fn distance(&self, p: Vec3, clock: Clock) -> f32 {
        match self {
            Shape::Torus => torus(p),
            Shape::Sphere => sphere(p),
            Shape::Octahedron => octahedron(p),
            Shape::Capsule => capsule(p),
            Shape::Gyroid => gyroid(p),
            Shape::TwistedTorus => twisted_torus(p, clock),
            Shape::DnaHelix => dna_helix(p, clock),
            Shape::CubeSphereMorph => cube_sphere_morph(p, clock),
            Shape::Organic => organic(p, clock),
            Shape::Wave => wave(p, clock),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let alias = match name.as_str() {
            "donut" => Some(Shape::Torus),
            "octa" => Some(Shape::Octahedron),
            "dna" | "helix" => Some(Shape::DnaHelix),
            "cube-sphere" | "cube_sphere_morph" => Some(Shape::CubeSphereMorph),
            "twisted_torus" => Some(Shape::TwistedTorus),
            _ => None,
        };
        alias
            .or_else(|| Shape::ALL.into_iter().find(|shape| shape.name() == name))
            .ok_or_else(|| FieldError::UnknownShape {
                name: s.to_owned(),
                expected: Shape::ALL.map(Shape::name).join(", "),
            })
    }
}
