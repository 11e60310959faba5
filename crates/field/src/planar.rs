//! Flat two-dimensional fields, drawn as filled silhouettes.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;

use crate::consts::{RADIUS, THICKNESS};
use crate::error::FieldError;

/// Circle of radius [`RADIUS`].
#[must_use]
pub fn circle(p: Vec2) -> f32 {
    p.length() - RADIUS
}

/// Ring of mean radius [`RADIUS`] and width [`THICKNESS`].
#[must_use]
pub fn annulus(p: Vec2) -> f32 {
    (p.length() - RADIUS).abs() - THICKNESS / 2.0
}

/// A signed distance in the plane.
pub trait PlanarField {
    fn distance(&self, p: Vec2) -> f32;

    /// Whether `p` lies on or inside the outline.
    fn contains(&self, p: Vec2) -> bool {
        self.distance(p) <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanarShape {
    Circle,
    Annulus,
}

impl PlanarShape {
    pub const COUNT: usize = 2;
    pub const ALL: [PlanarShape; PlanarShape::COUNT] = [PlanarShape::Circle, PlanarShape::Annulus];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlanarShape::Circle => "circle",
            PlanarShape::Annulus => "annulus",
        }
    }
}

impl PlanarField for PlanarShape {
    fn distance(&self, p: Vec2) -> f32 {
        match self {
            PlanarShape::Circle => circle(p),
            PlanarShape::Annulus => annulus(p),
        }
    }
}

impl fmt::Display for PlanarShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlanarShape {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(PlanarShape::Circle),
            "annulus" | "ring" | "donut" => Ok(PlanarShape::Annulus),
            _ => Err(FieldError::UnknownShape {
                name: s.to_owned(),
                expected: PlanarShape::ALL.map(PlanarShape::name).join(", "),
            }),
        }
    }
}
