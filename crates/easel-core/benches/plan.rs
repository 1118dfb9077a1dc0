use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use easel_core::prelude::*;

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    let easel = Easel::standard();

    group.bench_function("standard_easel", |b| {
        b.iter(|| {
            black_box(easel.plan(
                black_box(10.0),
                black_box(8.0),
                black_box("4x5"),
                black_box(0.5),
            ))
        })
    });

    let cfg = EaselConfig::builder()
        .frame("xpan", 24.0, 65.0)
        .slot(4.0, 6.0)
        .slot(8.0, 10.0)
        .slot(11.0, 14.0)
        .build();
    group.bench_function("configured_easel", |b| {
        b.iter(|| {
            let easel = Easel::from_config(black_box(&cfg)).expect("config");
            black_box(easel.plan(8.0, 10.0, "-xpan", 0.25))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
