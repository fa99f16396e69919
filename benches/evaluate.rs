use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::{
    ColourMapKind, Viewport, colour_map_factory, evaluate, evaluate_serial, generate_pixel_buffer,
};

const MAX_ITER: u32 = 200;

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let viewport = Viewport::default();

    for size in [200_u32, 400, 800] {
        group.bench_with_input(BenchmarkId::new("serial", size), &size, |b, &size| {
            b.iter(|| evaluate_serial(black_box(viewport), size, size, MAX_ITER));
        });

        group.bench_with_input(BenchmarkId::new("rayon", size), &size, |b, &size| {
            b.iter(|| evaluate(black_box(viewport), size, size, MAX_ITER));
        });
    }

    group.finish();
}

fn bench_colour(c: &mut Criterion) {
    let mut group = c.benchmark_group("colour");
    let grid = evaluate(Viewport::default(), 800, 800, MAX_ITER).expect("default viewport evaluates");

    for &kind in ColourMapKind::ALL {
        let mapper = colour_map_factory(kind, MAX_ITER);

        group.bench_function(BenchmarkId::from_parameter(kind), |b| {
            b.iter(|| generate_pixel_buffer(black_box(&grid), &mapper));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_colour);
criterion_main!(benches);
