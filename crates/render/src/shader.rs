//! Two-test lighting quantised to four glyphs.

use glam::Vec3;

/// Normal y below which a surface faces the light.
pub const LIT_THRESHOLD: f32 = -0.25;
/// Normal z below which a surface faces the viewer head-on.
pub const FROSTED_THRESHOLD: f32 = -0.5;

/// One cell of a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Nothing was hit.
    Background,
    FrostedLit,
    Frosted,
    Lit,
    Dim,
    /// Inside a flat silhouette.
    Solid,
}

impl Glyph {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Background => ' ',
            Glyph::FrostedLit => '@',
            Glyph::Frosted | Glyph::Solid => '#',
            Glyph::Lit => '=',
            Glyph::Dim => '.',
        }
    }
}

impl From<Glyph> for char {
    fn from(glyph: Glyph) -> Self {
        glyph.as_char()
    }
}

/// Glyph for a surface with unit normal `n`.
#[must_use]
pub fn shade(n: Vec3) -> Glyph {
    let lit = n.y < LIT_THRESHOLD;
    let frosted = n.z < FROSTED_THRESHOLD;
    match (frosted, lit) {
        (true, true) => Glyph::FrostedLit,
        (true, false) => Glyph::Frosted,
        (false, true) => Glyph::Lit,
        (false, false) => Glyph::Dim,
    }
}
