//! Tests for the order-sensitive matrix checksum.
//!
//! ## Test Organization
//!
//! 1. **Purity** - Repeated calls agree, the matrix is untouched
//! 2. **Known values** - Hand-computed checksums
//! 3. **Sensitivity** - Permutations and element changes move the checksum

use fastMatmul::prelude::*;

// ============================================================================
// Purity Tests
// ============================================================================

/// Two calls on the same matrix return the same value and leave it unchanged.
#[test]
fn test_checksum_is_pure() {
    let m = generate(24, 0xA).unwrap();
    let before = m.clone();
    let first = hash(&m);
    let second = hash(&m);
    assert_eq!(first, second);
    assert_eq!(m, before);
}

/// Equal matrices hash equal.
#[test]
fn test_equal_matrices_hash_equal() {
    let a = generate(24, 3).unwrap();
    let b = generate(24, 3).unwrap();
    assert_eq!(hash(&a), hash(&b));
}

// ============================================================================
// Known Value Tests
// ============================================================================

/// An all-zero matrix hashes to a weighted sum of the bare magic mask.
#[test]
fn test_zero_matrix_checksum() {
    let m = Matrix::zeroed(2).unwrap();
    // Column weights over [0, 1, 0, 1]: MAGIC contributes twice.
    let expected = MAGIC.wrapping_add(MAGIC);
    assert_eq!(hash(&m), expected);
}

/// The 2x2 product [[1,2],[3,4]] * [[5,6],[7,8]] = [[19,22],[43,50]] hashes
/// to the weighted column-1 elements: (22 ^ MAGIC) + (50 ^ MAGIC) mod 2^32.
#[test]
fn test_known_product_checksum() {
    let c = Matrix::from_elements(2, vec![19, 22, 43, 50]).unwrap();
    let expected = (22u32 ^ MAGIC).wrapping_add(50u32 ^ MAGIC);
    assert_eq!(hash(&c), expected);
}

// ============================================================================
// Sensitivity Tests
// ============================================================================

/// Swapping two elements in different columns changes the checksum.
#[test]
fn test_checksum_order_sensitivity() {
    let m = Matrix::from_elements(2, vec![19, 22, 43, 50]).unwrap();
    let swapped = Matrix::from_elements(2, vec![22, 19, 43, 50]).unwrap();
    assert_ne!(hash(&m), hash(&swapped));
}

/// Changing one element changes the checksum unless it sits in column zero.
#[test]
fn test_column_zero_is_unweighted() {
    let base = Matrix::from_elements(2, vec![19, 22, 43, 50]).unwrap();
    let mut col0 = base.clone();
    col0[(1, 0)] = -7;
    // Column 0 carries weight 0, so the checksum cannot see it.
    assert_eq!(hash(&base), hash(&col0));

    let mut col1 = base;
    col1[(1, 1)] = -7;
    assert_ne!(hash(&col1), hash(&col0));
}
