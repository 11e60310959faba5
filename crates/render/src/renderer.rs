//! Per-shape frame buffers driven by one shared clock.
//!
//! ```rust
//! use render::Renderer;
//!
//! let mut renderer = Renderer::new();
//! renderer.torus();
//! renderer.wave();
//! assert_eq!(renderer.clock().tick(), 2);
//! ```

use field::{Clock, PlanarShape, Shape};

use crate::frame::FrameBuffer;
use crate::silhouette;
use crate::tracer::Tracer;

/// Owns one frame buffer per shape and the clock they all share.
///
/// Each accessor rasterizes the next frame of its shape into that shape's
/// buffer, advances the shared clock by one tick and hands back a view of
/// the buffer. The view stays valid until the next `&mut` call. Only the
/// requested shape is redrawn, but the clock moves on regardless of which
/// shape asked, so shapes requested at different rates drift out of phase.
pub struct Renderer {
    clock: Clock,
    tracer: Tracer,
    frames: [FrameBuffer; Shape::COUNT],
    silhouettes: [FrameBuffer; PlanarShape::COUNT],
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer with blank buffers and the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Clock::default())
    }

    /// Create a renderer whose first frame is drawn at `clock`.
    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        tracing::debug!(tick = clock.tick(), shapes = Shape::COUNT, "allocating frame buffers");
        Self {
            clock,
            tracer: Tracer::default(),
            frames: std::array::from_fn(|_| FrameBuffer::new()),
            silhouettes: std::array::from_fn(|_| FrameBuffer::new()),
        }
    }

    /// Replace the marching parameters used for later frames.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// The clock the next frame will be drawn at.
    #[must_use]
    pub const fn clock(&self) -> Clock {
        self.clock
    }

    /// Rasterize the next frame of `shape` and advance the clock.
    pub fn frame(&mut self, shape: Shape) -> &FrameBuffer {
        let clock = self.clock;
        let frame = &mut self.frames[shape.index()];
        frame.rasterize(&shape, clock, &self.tracer);
        self.clock.advance();
        tracing::trace!(%shape, tick = clock.tick(), "rasterized frame");
        frame
    }

    /// Last frame drawn for `shape`, without drawing a new one.
    #[must_use]
    pub fn last(&self, shape: Shape) -> &FrameBuffer {
        &self.frames[shape.index()]
    }

    /// Draw the silhouette of a planar shape. Leaves the clock alone.
    pub fn silhouette(&mut self, shape: PlanarShape) -> &FrameBuffer {
        let frame = &mut self.silhouettes[shape.index()];
        silhouette::draw(frame, &shape);
        frame
    }

    /// Next frame of the torus.
    pub fn torus(&mut self) -> &FrameBuffer {
        self.frame(Shape::Torus)
    }

    /// Next frame of the sphere.
    pub fn sphere(&mut self) -> &FrameBuffer {
        self.frame(Shape::Sphere)
    }

    /// Next frame of the octahedron.
    pub fn octahedron(&mut self) -> &FrameBuffer {
        self.frame(Shape::Octahedron)
    }

    /// Next frame of the capsule.
    pub fn capsule(&mut self) -> &FrameBuffer {
        self.frame(Shape::Capsule)
    }

    /// Next frame of the gyroid lattice.
    pub fn gyroid(&mut self) -> &FrameBuffer {
        self.frame(Shape::Gyroid)
    }

    /// Next frame of the twisted torus.
    pub fn twisted_torus(&mut self) -> &FrameBuffer {
        self.frame(Shape::TwistedTorus)
    }

    /// Next frame of the double helix.
    pub fn dna_helix(&mut self) -> &FrameBuffer {
        self.frame(Shape::DnaHelix)
    }

    /// Next frame of the cube/sphere morph.
    pub fn cube_sphere_morph(&mut self) -> &FrameBuffer {
        self.frame(Shape::CubeSphereMorph)
    }

    /// Next frame of the bubbled organic sphere.
    pub fn organic(&mut self) -> &FrameBuffer {
        self.frame(Shape::Organic)
    }

    /// Next frame of the wave-deformed sphere.
    pub fn wave(&mut self) -> &FrameBuffer {
        self.frame(Shape::Wave)
    }
}
