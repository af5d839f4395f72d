//! Benchmarks for reading through views and copies vs reading the container
//!
//! Run with: `cargo bench --bench views`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vitrine_core::prelude::*;

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in [16, 256, 4096] {
        let items: Vec<u64> = (0..size).collect();
        let source = shared(items.clone());
        let view = ListView::over(&source);
        let copy = ListCopy::of(&source);
        let needle = size - 1;

        group.bench_with_input(BenchmarkId::new("Vec", size), &needle, |b, needle| {
            b.iter(|| black_box(items.contains(black_box(needle))));
        });

        group.bench_with_input(BenchmarkId::new("ListView", size), &needle, |b, needle| {
            b.iter(|| black_box(view.contains(black_box(needle))));
        });

        group.bench_with_input(BenchmarkId::new("ListCopy", size), &needle, |b, needle| {
            b.iter(|| black_box(copy.contains(black_box(needle))));
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in [16, 256, 4096] {
        let items: Vec<u64> = (0..size).collect();
        let source = shared(items.clone());
        let view = ListView::over(&source);

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, _| {
            b.iter(|| black_box(items.iter().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("ListView", size), &size, |b, _| {
            b.iter(|| black_box(view.elements().iter().sum::<u64>()));
        });
    }

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");

    for size in [16, 256, 4096] {
        let source = shared((0..size).collect::<Vec<u64>>());

        group.bench_with_input(BenchmarkId::new("ListCopy::of", size), &size, |b, _| {
            b.iter(|| black_box(ListCopy::of(&source)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contains, bench_iterate, bench_copy);
criterion_main!(benches);
