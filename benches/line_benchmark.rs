#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tilegrid::prelude::*;

fn line_rasterization_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_rasterization");

    for length in [16, 256, 4096] {
        let start = Tile::new(0, 0);
        let end = Tile::new(length, length / 3);

        for (name, algorithm) in [
            ("bresenham", LineAlgorithm::Bresenham),
            ("lerp", LineAlgorithm::Lerp),
            ("walk_grid", LineAlgorithm::WalkGrid),
            ("supercover", LineAlgorithm::Supercover),
        ] {
            group.bench_with_input(BenchmarkId::new(name, length), &length, |b, _| {
                b.iter(|| algorithm.rasterize(black_box(start), black_box(end)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, line_rasterization_benchmark);
criterion_main!(benches);
