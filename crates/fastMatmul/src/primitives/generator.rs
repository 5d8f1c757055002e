//! Deterministic matrix generation and layout transforms.
//!
//! ## Purpose
//!
//! This module fills matrices with reproducible pseudo-random elements and
//! produces the transposed copies that the SIMD strategy consumes. Given the
//! same seed and dimension, `fill` writes the identical element sequence on
//! every run and platform.
//!
//! ## Design notes
//!
//! * **Seeded RNG**: `StdRng::seed_from_u64` gives a portable, reproducible
//!   stream; elements are `next_u64() % ELEMENT_MAX` in row-major order.
//! * **Small elements**: Keeping elements in `[0, 100)` delays (but does not
//!   prevent) 64-bit wraparound in long accumulation chains; all strategies
//!   use wrapping arithmetic so results stay bit-identical regardless.
//!
//! ## Invariants
//!
//! * `fill` visits elements strictly in row-major order.
//! * `transpose` allocates a fresh matrix; the source is untouched.

// Internal dependencies
use crate::primitives::errors::MatmulError;
use crate::primitives::matrix::Matrix;

// External dependencies
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

// ============================================================================
// Constants
// ============================================================================

/// Exclusive upper bound for generated elements.
pub const ELEMENT_MAX: u64 = 100;

// ============================================================================
// Generation
// ============================================================================

/// Fill `matrix` with pseudo-random elements in `[0, ELEMENT_MAX)`.
///
/// The element sequence is fully determined by `seed` and the matrix
/// dimension.
pub fn fill(matrix: &mut Matrix, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for element in matrix.as_mut_slice() {
        *element = (rng.next_u64() % ELEMENT_MAX) as i64;
    }
}

/// Allocate an `n x n` matrix and fill it from `seed`.
pub fn generate(n: usize, seed: u64) -> Result<Matrix, MatmulError> {
    let mut matrix = Matrix::zeroed(n)?;
    fill(&mut matrix, seed);
    Ok(matrix)
}

/// Produce the transpose of `matrix` as a fresh allocation.
pub fn transpose(matrix: &Matrix) -> Result<Matrix, MatmulError> {
    let n = matrix.dimension();
    let mut out = Matrix::zeroed(n)?;
    {
        let src = matrix.as_slice();
        let dst = out.as_mut_slice();
        for i in 0..n {
            for j in 0..n {
                dst[j * n + i] = src[i * n + j];
            }
        }
    }
    Ok(out)
}
