//! Matrix multiplication benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Strategy comparison at a fixed dimension
//! - Scalability (64 to 512)
//! - Block-size sweep for the tiled strategy
//! - Strassen threshold crossing
//!
//! For serial execution, use `FASTMATMUL_MODE=serial cargo bench`.
//! For parallel execution, use `FASTMATMUL_MODE=parallel cargo bench` (default).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastMatmul::prelude::*;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTMATMUL_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

/// Seeded operand pair of side `n`.
fn operands(n: usize) -> (Matrix, Matrix) {
    let a = generate(n, 0xA).unwrap();
    let b = generate(n, 0xB).unwrap();
    (a, b)
}

fn build_engine(n: usize, strategy: Strategy, block_size: usize, parallel: bool) -> MatmulEngine {
    Matmul::new()
        .dimension(n)
        .strategy(strategy)
        .block_size(block_size)
        .parallel(parallel)
        .build()
        .unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

/// All five strategies at one dimension.
fn bench_strategies(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("strategies_{}", mode_name));
    group.sample_size(20);

    let n = 512;
    group.throughput(Throughput::Elements((n * n * n) as u64));
    let (a, b) = operands(n);

    for strategy in Strategy::ALL {
        let engine = build_engine(n, strategy, 64, use_parallel);
        group.bench_function(strategy.name(), |bench| {
            bench.iter(|| engine.multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

/// Reordered strategy across dimensions.
fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(20);

    for n in [64, 128, 256, 512] {
        group.throughput(Throughput::Elements((n * n * n) as u64));
        let (a, b) = operands(n);
        let engine = build_engine(n, Reordered, 64, use_parallel);

        group.bench_with_input(BenchmarkId::new("reordered", n), &n, |bench, _| {
            bench.iter(|| engine.multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

/// Tile-size sweep for the blocked strategy.
fn bench_block_sizes(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("block_sizes_{}", mode_name));
    group.sample_size(20);

    let n = 512;
    let (a, b) = operands(n);

    for block_size in [16, 32, 64, 128] {
        let engine = build_engine(n, Blocked, block_size, use_parallel);
        group.bench_with_input(
            BenchmarkId::new("blocked", block_size),
            &block_size,
            |bench, _| bench.iter(|| engine.multiply(black_box(&a), black_box(&b)).unwrap()),
        );
    }
    group.finish();
}

/// Strassen below, at, and above its base threshold.
fn bench_strassen_threshold(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("strassen_threshold_{}", mode_name));
    group.sample_size(20);

    for n in [128, 256, 512] {
        group.throughput(Throughput::Elements((n * n * n) as u64));
        let (a, b) = operands(n);
        let engine = build_engine(n, Strassen, 64, use_parallel);

        group.bench_with_input(BenchmarkId::new("strassen", n), &n, |bench, _| {
            bench.iter(|| engine.multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_strategies,
    bench_scalability,
    bench_block_sizes,
    bench_strassen_threshold
);
criterion_main!(benches);
