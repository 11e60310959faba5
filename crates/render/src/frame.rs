//! Fixed-size text frames and the rasterizer that fills them.
//!
//! A frame is `HEIGHT` rows of `WIDTH` glyphs, each row followed by a line
//! break, the whole frame followed by a `'\0'` sentinel. That layout is the
//! contract with whatever displays the frame, so its length is always
//! exactly [`CAPACITY`].

use field::{Clock, DistanceField};

use crate::camera::Camera;
use crate::consts::{CAPACITY, HEIGHT, LINE_BREAK, SENTINEL, WIDTH};
use crate::normal::estimate_normal;
use crate::shader::{shade, Glyph};
use crate::tracer::{Trace, Tracer};

/// Text buffer for one shape, allocated once and overwritten in place.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    text: String,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// A blank frame with the full layout already in place.
    #[must_use]
    pub fn new() -> Self {
        let mut frame = Self {
            text: String::with_capacity(CAPACITY),
        };
        frame.fill(|_, _| Glyph::Background);
        frame
    }

    /// Rewrites every cell, row by row, left to right.
    ///
    /// The loop bounds alone fix the length at [`CAPACITY`]; every glyph is
    /// ASCII, so the string never grows past its initial allocation.
    pub fn fill(&mut self, mut cell: impl FnMut(usize, usize) -> Glyph) {
        self.text.clear();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                self.text.push(cell(x, y).into());
            }
            self.text.push(LINE_BREAK);
        }
        self.text.push(SENTINEL);
        debug_assert_eq!(self.text.len(), CAPACITY);
    }

    /// Traces one frame of `field` as seen at `clock`.
    ///
    /// The camera is built once from `clock` and shared by every cell, so
    /// the whole frame is drawn at a single instant. The caller advances
    /// the clock afterwards.
    pub fn rasterize<F>(&mut self, field: &F, clock: Clock, tracer: &Tracer)
    where
        F: DistanceField + ?Sized,
    {
        let camera = Camera::new(clock);
        self.fill(|x, y| match tracer.trace(field, &camera, Camera::ray(x, y)) {
            Trace::Hit(hit) => shade(estimate_normal(field, hit.point, clock)),
            Trace::Miss => Glyph::Background,
        });
    }

    /// The full wire layout, sentinel included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// The frame text without the trailing sentinel.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.strip_suffix(SENTINEL).unwrap_or(&self.text)
    }

    /// Iterator over the `HEIGHT` rows, line breaks stripped.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.as_str().lines()
    }

    /// Glyph character at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        self.as_bytes()
            .get(y * (WIDTH + 1) + x)
            .map(|&b| char::from(b))
    }

    /// Number of non-background cells.
    #[must_use]
    pub fn coverage(&self) -> usize {
        self.rows()
            .flat_map(str::chars)
            .filter(|&c| c != Glyph::Background.as_char())
            .count()
    }
}
