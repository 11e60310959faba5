use criterion::{black_box, criterion_group, criterion_main, Criterion};
use field::{Clock, Shape};
use render::{FrameBuffer, Renderer, Tracer};

fn bench_sphere_frame(c: &mut Criterion) {
    let mut renderer = Renderer::new();
    c.bench_function("sphere_frame", |b| b.iter(|| black_box(renderer.sphere().coverage())));
}

fn bench_every_shape(c: &mut Criterion) {
    let tracer = Tracer::default();
    let mut frame = FrameBuffer::new();
    let mut group = c.benchmark_group("rasterize");
    for shape in Shape::ALL {
        group.bench_function(shape.name(), |b| {
            b.iter(|| frame.rasterize(black_box(&shape), Clock::at(120), &tracer));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere_frame, bench_every_shape);
criterion_main!(benches);
