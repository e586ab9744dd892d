//! Benchmarks for transform operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use affinum::{AffineTransform, Point2};

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    let left: AffineTransform<f64> = AffineTransform::identity().rotate(30.0).translate(10.0, 20.0);
    let right = AffineTransform::identity().scale_xy(2.0, 0.5).skew_x(15.0);

    group.bench_function("pair", |b| {
        b.iter(|| black_box(left).compose(&black_box(right)))
    });

    // Chains of prepended primitives
    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("chain", count), &count, |b, &count| {
            b.iter(|| {
                let mut m: AffineTransform<f64> = AffineTransform::identity();
                for i in 0..count {
                    m = m.rotate(black_box(i as f64));
                }
                m
            })
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let m: AffineTransform<f64> = AffineTransform::identity()
        .rotate(37.0)
        .translate(10.0, 20.0)
        .scale_xy(2.0, 0.25);

    c.bench_function("inverse", |b| b.iter(|| black_box(m).inverse().unwrap()));
}

fn bench_extract(c: &mut Criterion) {
    let m: AffineTransform<f64> = AffineTransform::identity()
        .rotate(37.0)
        .translate(10.0, 20.0)
        .scale(2.0)
        .skew_x(15.0);

    c.bench_function("extract", |b| b.iter(|| black_box(m).extract()));
}

fn bench_at(c: &mut Criterion) {
    let mut m: AffineTransform<f64> = AffineTransform::new(2.0, 0.0, 0.0, 5.0, 0.0, 0.0);
    m.morph((1.0, 0.0, 0.0, 1.0, 4.0, 3.0)).unwrap();

    c.bench_function("at", |b| b.iter(|| m.at(black_box(0.5)).unwrap()));
}

fn bench_apply_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_point");

    let m: AffineTransform<f64> = AffineTransform::identity().rotate(30.0).translate(10.0, 20.0);

    group.bench_function("single", |b| {
        b.iter(|| m.apply_point(black_box(Point2::new(3.0, 4.0))))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let source = "matrix(1.9696155786514282,-0.3472963869571686,0.3472963869571686,1.9696155786514282,-8.373950958251953,7.758301258087158)";

    c.bench_function("parse", |b| {
        b.iter(|| black_box(source).parse::<AffineTransform<f64>>().unwrap())
    });
}

criterion_group!(
    benches,
    bench_compose,
    bench_inverse,
    bench_extract,
    bench_at,
    bench_apply_point,
    bench_parse
);
criterion_main!(benches);
