//! Tests for the Strassen recursion around its base threshold.
//!
//! At n = 128 the recursion must not split at all; at n = 256 it must split
//! exactly once into seven 128-sized base products. Both cases are compared
//! element-for-element against the naive reference.

use fastMatmul::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn compare_with_naive(n: usize, parallel: bool) {
    let a = generate(n, 0xA).unwrap();
    let b = generate(n, 0xB).unwrap();

    let naive = Matmul::new()
        .dimension(n)
        .strategy(Naive)
        .parallel(false)
        .build()
        .unwrap();
    let strassen = Matmul::new()
        .dimension(n)
        .strategy(Strassen)
        .parallel(parallel)
        .build()
        .unwrap();

    let expected = naive.multiply(&a, &b).unwrap();
    let actual = strassen.multiply(&a, &b).unwrap();
    assert_eq!(actual, expected);
}

// ============================================================================
// Boundary Tests
// ============================================================================

/// Exactly at the threshold the base case handles the whole product.
#[test]
fn test_base_case_at_threshold() {
    compare_with_naive(128, false);
}

/// One level above the threshold exercises the split-recurse-combine path.
#[test]
fn test_single_recursion_level() {
    compare_with_naive(256, false);
}

/// The parallel task fan-out agrees with the serial recursion.
#[test]
fn test_parallel_recursion_matches_naive() {
    compare_with_naive(256, true);
}

/// A tiny literal product through the Strassen entry point.
#[test]
fn test_literal_product() {
    let a = Matrix::from_elements(2, vec![1, 2, 3, 4]).unwrap();
    let b = Matrix::from_elements(2, vec![5, 6, 7, 8]).unwrap();
    let engine = Matmul::new()
        .dimension(2)
        .strategy(Strassen)
        .parallel(false)
        .build()
        .unwrap();
    let c = engine.multiply(&a, &b).unwrap();
    assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
}

/// Wrapping accumulation stays consistent between Strassen and the naive
/// kernel even when intermediate sums overflow i64.
#[test]
fn test_overflow_consistency() {
    let big = i64::MAX / 2;
    let a = Matrix::from_elements(2, vec![big, big, big, big]).unwrap();
    let b = Matrix::from_elements(2, vec![big, big, big, big]).unwrap();

    let naive = Matmul::new()
        .dimension(2)
        .strategy(Naive)
        .parallel(false)
        .build()
        .unwrap();
    let strassen = Matmul::new()
        .dimension(2)
        .strategy(Strassen)
        .parallel(false)
        .build()
        .unwrap();

    assert_eq!(
        strassen.multiply(&a, &b).unwrap(),
        naive.multiply(&a, &b).unwrap()
    );
}
