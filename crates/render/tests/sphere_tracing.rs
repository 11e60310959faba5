use field::{Clock, DistanceField, Shape};
use glam::{Vec2, Vec3};
use render::consts::MAX_STEPS;
use render::normal::estimate_normal;
use render::shader::shade;
use render::{Camera, Glyph, Trace, Tracer};

#[test]
fn ray_through_origin_hits_sphere() {
    let camera = Camera::new(Clock::default());
    match Tracer::default().trace(&Shape::Sphere, &camera, Vec2::ZERO) {
        Trace::Hit(hit) => {
            println!("hit {:?} after {} steps", hit.point, hit.steps);
            assert!(hit.steps <= MAX_STEPS);
            assert!(Shape::Sphere.distance(hit.point, Clock::default()) <= 0.01);
        }
        Trace::Miss => panic!("ray through the origin must hit the sphere"),
    }
}

#[test]
fn far_ray_misses_every_bounded_shape() {
    let ray = Vec2::new(5.0, 5.0);
    for tick in [0, 1, 250, 1000, 4321] {
        let camera = Camera::new(Clock::at(tick));
        for shape in Shape::ALL.into_iter().filter(|s| s.is_bounded()) {
            let trace = Tracer::default().trace(&shape, &camera, ray);
            assert_eq!(trace, Trace::Miss, "{shape} was hit at tick {tick}");
        }
    }
}

#[test]
fn miss_renders_background() {
    let camera = Camera::new(Clock::default());
    let trace = Tracer::default().trace(&Shape::Torus, &camera, Vec2::new(5.0, 5.0));
    let glyph = match trace {
        Trace::Hit(hit) => shade(estimate_normal(&Shape::Torus, hit.point, Clock::default())),
        Trace::Miss => Glyph::Background,
    };
    assert_eq!(glyph.as_char(), ' ');
}

#[test]
fn sphere_normal_on_positive_x() {
    let n = estimate_normal(&Shape::Sphere, Vec3::new(0.5, 0.0, 0.0), Clock::default());
    println!("normal at +x: {n:?}");
    assert!((n - Vec3::X).length() < 1e-3, "expected ~(1, 0, 0), got {n:?}");
    assert!((n.length() - 1.0).abs() < 1e-5);
}

#[test]
fn every_bounded_shape_is_visible_head_on() {
    // Sweep a horizontal line of rays through the middle row; a bounded
    // shape centred at the origin must show up somewhere on it.
    let clock = Clock::default();
    let camera = Camera::new(clock);
    for shape in Shape::ALL.into_iter().filter(|s| s.is_bounded()) {
        let hits = (0..render::consts::WIDTH)
            .map(|x| Camera::ray(x, render::consts::HEIGHT / 2))
            .filter(|&ray| Tracer::default().trace(&shape, &camera, ray).is_hit())
            .count();
        println!("{shape}: {hits} hits on the middle row");
        assert!(hits > 0, "{shape} is invisible on the middle row");
    }
}

#[test]
fn custom_fields_trace_too() {
    // A wall at z = 1, solid behind it, is reached in a single step from
    // any lateral offset.
    let wall = |p: Vec3, _clock: Clock| 1.0 - p.z;
    let camera = Camera::new(Clock::default());
    let trace = Tracer::default().trace(&wall, &camera, Vec2::new(0.7, -0.2));
    let Trace::Hit(hit) = trace else {
        panic!("wall was missed");
    };
    assert!((hit.point.z - 1.0).abs() < 1e-5);
    assert_eq!(hit.steps, 2);
}
