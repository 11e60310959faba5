//! Flat silhouettes of planar fields.
//!
//! No marching or lighting: a cell is solid when its ray position lies
//! inside the outline. Planar fields do not animate, so drawing one never
//! touches the clock.

use field::PlanarField;

use crate::camera::Camera;
use crate::frame::FrameBuffer;
use crate::shader::Glyph;

/// Glyph for the cell at ray position `(x, y)` of a planar field.
#[must_use]
pub fn sample<F>(field: &F, x: usize, y: usize) -> Glyph
where
    F: PlanarField + ?Sized,
{
    if field.contains(Camera::ray(x, y)) {
        Glyph::Solid
    } else {
        Glyph::Background
    }
}

/// Draws the silhouette of `field` into `frame`.
pub fn draw<F>(frame: &mut FrameBuffer, field: &F)
where
    F: PlanarField + ?Sized,
{
    frame.fill(|x, y| sample(field, x, y));
}
