//! Tests for matrix storage and deterministic generation.
//!
//! These tests verify the foundational data layer:
//! - Zero-initialized, fallible allocation
//! - Row-major layout and 2D indexing
//! - Seeded fill determinism and element range
//! - Transposition
//!
//! ## Test Organization
//!
//! 1. **Allocation** - Dimensions, zero fill, shape checks
//! 2. **Layout** - Indexing, row access
//! 3. **Generation** - Determinism, range, seed sensitivity
//! 4. **Transpose** - Correctness and involution

use fastMatmul::prelude::*;

// ============================================================================
// Allocation Tests
// ============================================================================

/// A fresh matrix is fully zeroed and reports its dimension.
#[test]
fn test_zeroed_allocation() {
    let m = Matrix::zeroed(7).unwrap();
    assert_eq!(m.dimension(), 7);
    assert_eq!(m.as_slice().len(), 49);
    assert!(m.as_slice().iter().all(|&e| e == 0));
}

/// Zero dimensions are rejected.
#[test]
fn test_zero_dimension_rejected() {
    assert_eq!(Matrix::zeroed(0), Err(MatmulError::InvalidDimension(0)));
}

/// Element vectors must match `n * n` exactly.
#[test]
fn test_from_elements_shape_check() {
    assert!(Matrix::from_elements(2, vec![1, 2, 3, 4]).is_ok());
    assert_eq!(
        Matrix::from_elements(2, vec![1, 2, 3]),
        Err(MatmulError::ShapeMismatch {
            dimension: 2,
            elements: 3
        })
    );
    assert_eq!(
        Matrix::from_elements(0, vec![]),
        Err(MatmulError::InvalidDimension(0))
    );
}

// ============================================================================
// Layout Tests
// ============================================================================

/// 2D indexing addresses row-major storage.
#[test]
fn test_row_major_indexing() {
    let mut m = Matrix::zeroed(3).unwrap();
    m[(0, 2)] = 5;
    m[(2, 0)] = 9;
    assert_eq!(m.as_slice()[2], 5);
    assert_eq!(m.as_slice()[6], 9);
    assert_eq!(m[(0, 2)], 5);
    assert_eq!(m[(2, 0)], 9);
}

/// Rows are contiguous slices.
#[test]
fn test_row_access() {
    let m = Matrix::from_elements(3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    assert_eq!(m.row(0), &[1, 2, 3]);
    assert_eq!(m.row(2), &[7, 8, 9]);
}

// ============================================================================
// Generation Tests
// ============================================================================

/// The same seed and dimension reproduce the exact element sequence.
#[test]
fn test_fill_determinism() {
    let first = generate(16, 0xA).unwrap();
    let second = generate(16, 0xA).unwrap();
    assert_eq!(first, second);
}

/// Different seeds diverge.
#[test]
fn test_fill_seed_sensitivity() {
    let a = generate(16, 0xA).unwrap();
    let b = generate(16, 0xB).unwrap();
    assert_ne!(a, b);
}

/// Every generated element lies in `[0, ELEMENT_MAX)`.
#[test]
fn test_fill_element_range() {
    let m = generate(32, 42).unwrap();
    assert!(m
        .as_slice()
        .iter()
        .all(|&e| (0..ELEMENT_MAX as i64).contains(&e)));
}

/// `fill` overwrites previous contents completely.
#[test]
fn test_fill_overwrites() {
    let mut m = Matrix::zeroed(8).unwrap();
    fill(&mut m, 1);
    let once = m.clone();
    fill(&mut m, 2);
    assert_ne!(m, once);
    fill(&mut m, 1);
    assert_eq!(m, once);
}

// ============================================================================
// Transpose Tests
// ============================================================================

/// Transposition swaps rows and columns.
#[test]
fn test_transpose_swaps_axes() {
    let m = Matrix::from_elements(2, vec![1, 2, 3, 4]).unwrap();
    let t = transpose(&m).unwrap();
    assert_eq!(t.as_slice(), &[1, 3, 2, 4]);
}

/// Transposing twice restores the original matrix.
#[test]
fn test_transpose_involution() {
    let m = generate(20, 7).unwrap();
    let back = transpose(&transpose(&m).unwrap()).unwrap();
    assert_eq!(m, back);
}
