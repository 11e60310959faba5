use field::consts::RADIUS;
use field::primitives::sphere;
use field::{smax, smin, Clock, DistanceField, Shape};
use glam::Vec3;

/// Deterministic spread of sample values covering negatives, zero and
/// magnitudes on both sides of the blend radii used below.
fn samples() -> Vec<f32> {
    (-20..=20).map(|i| i as f32 * 0.137).collect()
}

fn points() -> Vec<Vec3> {
    let s = samples();
    let mut out = Vec::new();
    for (i, &x) in s.iter().enumerate() {
        let y = s[(i * 7) % s.len()];
        let z = s[(i * 13) % s.len()];
        out.push(Vec3::new(x, y, z));
    }
    out
}

#[test]
fn sphere_is_length_minus_radius() {
    for p in points() {
        let expected = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt() - RADIUS;
        assert!(
            (sphere(p) - expected).abs() < 1e-5,
            "sphere({p:?}) = {}, expected {expected}",
            sphere(p)
        );
    }
}

#[test]
fn smax_is_dual_of_smin() {
    for &a in &samples() {
        for &b in &samples() {
            for k in [0.01_f32, 0.1, 0.5, 2.0] {
                assert_eq!(
                    smax(a, b, k),
                    -smin(-a, -b, k),
                    "duality broken for a={a}, b={b}, k={k}"
                );
            }
        }
    }
}

#[test]
fn smin_never_exceeds_min() {
    for &a in &samples() {
        for &b in &samples() {
            for k in [0.0_f32, 0.01, 0.1, 0.5, 2.0] {
                let s = smin(a, b, k);
                assert!(s <= a.min(b), "smin({a}, {b}, {k}) = {s} > min");
            }
        }
    }
}

#[test]
fn fields_are_deterministic() {
    let clock = Clock::at(1234);
    for shape in Shape::ALL {
        for p in points() {
            assert_eq!(
                shape.distance(p, clock).to_bits(),
                shape.distance(p, clock).to_bits(),
                "{shape} is not deterministic at {p:?}"
            );
        }
    }
}

#[test]
fn static_shapes_ignore_the_clock() {
    for shape in Shape::ALL.into_iter().filter(|s| !s.is_animated()) {
        for p in points() {
            assert_eq!(
                shape.distance(p, Clock::default()),
                shape.distance(p, Clock::at(777)),
                "{shape} changed with time"
            );
        }
    }
}

#[test]
fn animated_shapes_change_over_time() {
    let p = Vec3::new(0.31, 0.22, -0.17);
    for shape in Shape::ALL.into_iter().filter(|s| s.is_animated()) {
        let before = shape.distance(p, Clock::default());
        let after = shape.distance(p, Clock::at(50));
        assert_ne!(before, after, "{shape} did not animate");
    }
}

#[test]
fn bounded_shapes_contain_a_point_near_the_origin() {
    // Every bounded shape has solid material within RADIUS of the origin
    // at tick zero. The torus and helix are hollow in the middle, hence
    // the off-centre candidates.
    let clock = Clock::default();
    for shape in Shape::ALL.into_iter().filter(|s| s.is_bounded()) {
        let candidates = [
            Vec3::ZERO,
            Vec3::new(RADIUS, 0.0, 0.0),
            Vec3::new(0.3, 0.0, 0.0),
        ];
        let inside = candidates.iter().any(|&p| shape.distance(p, clock) < 0.0);
        assert!(inside, "{shape} has no interior near the origin");
    }
}
