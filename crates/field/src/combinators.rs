//! Smooth blending of two distances.

/// Polynomial smooth minimum with blend radius `k`.
///
/// Behaves like `a.min(b)` when the two distances differ by more than `k`
/// and rounds the seam otherwise. The result never exceeds `a.min(b)`.
/// A non-positive `k` degenerates to the hard minimum.
#[must_use]
pub fn smin(a: f32, b: f32, k: f32) -> f32 {
    if k <= 0.0 {
        return a.min(b);
    }
    let h = ((k - (a - b).abs()) / k).clamp(0.0, 1.0);
    a.min(b) - h * h * k * 0.25
}

/// Smooth maximum, the exact dual of [`smin`].
///
/// `smax(a, -b, k)` carves `b` out of `a` with a rounded seam.
#[must_use]
pub fn smax(a: f32, b: f32, k: f32) -> f32 {
    -smin(-a, -b, k)
}
