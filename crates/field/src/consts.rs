//! Geometry constants shared by every field.
//!
//! The animation rates are per clock tick. They fix the look of each
//! animated shape, so changing one changes every frame it produces.

/// Radius of the sphere and the major radius of the torus.
pub const RADIUS: f32 = 0.5;
/// Tube thickness of the torus (full width) and the capsule radius.
pub const THICKNESS: f32 = 0.3;

/// `1 / sqrt(3)`, the octahedron's distance normalisation.
pub const INV_SQRT_3: f32 = 0.577_350_27;

/// Half length of the capsule's segment along the x axis.
pub const CAPSULE_HALF_LENGTH: f32 = 0.5;

/// Spatial frequency of the gyroid lattice.
pub const GYROID_SCALE: f32 = 10.0;
/// Iso-level offset of the gyroid surface.
pub const GYROID_OFFSET: f32 = 0.03;

/// Twist in radians per unit of height.
pub const TWIST_RATE: f32 = 3.0;
/// Twist added per tick.
pub const TWIST_SPEED: f32 = 0.02;

/// Distance of each helix strand from the y axis.
pub const HELIX_RADIUS: f32 = 0.3;
/// Radians of strand phase per unit of height.
pub const HELIX_FREQUENCY: f32 = 4.0;
/// Strand phase added per tick.
pub const HELIX_SPEED: f32 = 0.05;
/// Tube thickness of each strand.
pub const HELIX_TUBE: f32 = 0.08;
/// Blend radius fusing the two strands.
pub const HELIX_BLEND: f32 = 0.1;

/// Peak weight of the sphere in the cube/sphere morph.
pub const MORPH_DEPTH: f32 = 0.2;
/// Morph oscillation per tick.
pub const MORPH_SPEED: f32 = 0.02;

/// Number of bubbles carved out of the organic sphere.
pub const BUBBLE_COUNT: usize = 6;
/// Radius of each bubble.
pub const BUBBLE_RADIUS: f32 = 0.15;
/// Distance of the bubble centres from the y axis.
pub const BUBBLE_RING: f32 = 0.45;
/// Bubble ring rotation per tick.
pub const BUBBLE_SPIN: f32 = 0.005;
/// Blend radius of the carved seams.
pub const BUBBLE_BLEND: f32 = 0.1;
/// Amplitude of the surface ripple.
pub const RIPPLE_AMPLITUDE: f32 = 0.02;
/// Spatial frequency of the surface ripple.
pub const RIPPLE_FREQUENCY: f32 = 10.0;
/// Ripple phase added per tick.
pub const RIPPLE_SPEED: f32 = 0.05;

/// Height of the wave displacement.
pub const WAVE_AMPLITUDE: f32 = 0.1;
/// Spatial frequency of the wave along x.
pub const WAVE_FREQUENCY: f32 = 3.0;
/// Wave phase added per tick.
pub const WAVE_SPEED: f32 = 0.1;
