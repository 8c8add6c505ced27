use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fov_line::{dda_compute, dda_count, Bresenham};

fn bench_bresenham(c: &mut Criterion) {
    c.bench_function("bresenham_200x137", |b| {
        b.iter(|| {
            let line = Bresenham::new(0, 0, black_box(200), black_box(137));
            line.count()
        })
    });
}

fn bench_dda(c: &mut Criterion) {
    c.bench_function("dda_200x137", |b| {
        b.iter(|| {
            let n = dda_count(0.0, 0.0, black_box(200.0), black_box(137.0));
            let mut out = vec![(0, 0); n];
            dda_compute(0.0, 0.0, 200.0, 137.0, &mut out);
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_bresenham, bench_dda);
criterion_main!(benches);
