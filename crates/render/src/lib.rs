#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]
//! # ASCII sphere tracer
//!
//! Turns the distance fields of the [`field`] crate into text frames.
//!
//! For every cell of a `WIDTH × HEIGHT` grid the [`camera`] picks a ray,
//! the [`tracer`] marches it towards the surface, the [`normal`] estimator
//! measures the orientation of whatever it hit and the [`shader`] turns that
//! orientation into one of four glyphs. [`frame`] drives the grid and owns
//! the fixed text layout; [`Renderer`] keeps one buffer per shape and the
//! clock that animates them.
//!
//! ```rust
//! use render::{consts::CAPACITY, Renderer};
//!
//! let mut renderer = Renderer::new();
//! let frame = renderer.sphere();
//! assert_eq!(frame.as_bytes().len(), CAPACITY);
//! assert_eq!(renderer.clock().tick(), 1);
//! ```

pub mod camera;
pub mod consts;
pub mod frame;
pub mod normal;
pub mod renderer;
pub mod shader;
pub mod silhouette;
pub mod tracer;

pub use camera::Camera;
pub use frame::FrameBuffer;
pub use renderer::Renderer;
pub use shader::Glyph;
pub use tracer::{Hit, Trace, Tracer};
