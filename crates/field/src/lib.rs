#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]
//! # Distance fields
//!
//! Signed distance fields for the ASCII sphere tracer. Every field maps a
//! point in shape space to the signed distance to the nearest surface:
//! negative inside, zero on the surface, positive outside.
//!
//! ## Key Components
//!
//! -   **Primitives:** static shapes such as [`primitives::sphere`],
//!     [`primitives::torus`] and [`primitives::octahedron`].
//! -   **Animated fields:** shapes that read the shared [`Clock`] to spin,
//!     twist or morph, defined in [`animated`].
//! -   **Combinators:** [`smin`] and [`smax`] blend two fields with a
//!     rounded seam instead of a hard union or subtraction.
//! -   **Dispatch:** the closed [`Shape`] enum evaluates any of the above
//!     through the [`DistanceField`] trait, so the tracer stays
//!     shape-agnostic.
//!
//! ## Usage
//!
//! ```rust
//! use field::{Clock, DistanceField, Shape};
//! use glam::Vec3;
//!
//! let d = Shape::Sphere.distance(Vec3::new(1.0, 0.0, 0.0), Clock::default());
//! assert!((d - 0.5).abs() < 1e-6);
//! ```

pub mod animated;
pub mod clock;
pub mod combinators;
pub mod consts;
pub mod error;
pub mod planar;
pub mod primitives;
pub mod shape;

pub use clock::Clock;
pub use combinators::{smax, smin};
pub use error::FieldError;
pub use planar::{PlanarField, PlanarShape};
pub use shape::{DistanceField, Shape};
