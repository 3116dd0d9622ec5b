//! Benchmarks for the dimension search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brickbox::geometry::all_orientations;
use brickbox::report::format_report;
use brickbox::search::{distinct_shapes, search};
use brickbox::{Config, SearchConfig};

/// Benchmark the full 40x40x40 default scan.
fn bench_search(c: &mut Criterion) {
    let config = SearchConfig::default();

    c.bench_function("search_default", |b| b.iter(|| search(black_box(&config))));
}

/// Benchmark a wider scan (100 values per axis).
fn bench_search_wide(c: &mut Criterion) {
    let config = SearchConfig {
        range_min: 10,
        range_max: 110,
        ..SearchConfig::default()
    };

    let mut group = c.benchmark_group("wide");
    group.sample_size(10);
    group.bench_function("search_10_110", |b| b.iter(|| search(black_box(&config))));
    group.finish();
}

/// Benchmark collapsing permutations of the default result.
fn bench_distinct_shapes(c: &mut Criterion) {
    let solutions = search(&SearchConfig::default());

    c.bench_function("distinct_shapes", |b| {
        b.iter(|| distinct_shapes(black_box(&solutions)))
    });
}

/// Benchmark computing all orientations for a single box.
fn bench_orientations(c: &mut Criterion) {
    c.bench_function("all_orientations", |b| {
        b.iter(|| all_orientations(black_box((38, 43, 48))))
    });
}

/// Benchmark formatting the default report.
fn bench_format_report(c: &mut Criterion) {
    let config = Config::default();
    let solutions = search(&config.search);

    c.bench_function("format_report", |b| {
        b.iter(|| format_report(black_box(&solutions), &config))
    });
}

criterion_group!(
    benches,
    bench_search,
    bench_search_wide,
    bench_distinct_shapes,
    bench_orientations,
    bench_format_report
);
criterion_main!(benches);
