//! Naive triple-loop multiplication (i-j-k order).
//!
//! ## Purpose
//!
//! The textbook reference strategy: for each output element, walk a row of A
//! against a column of B. The column walk strides by `n` through B, which is
//! exactly the cache behavior the other strategies exist to avoid, so this
//! kernel doubles as the correctness baseline and the performance floor.
//!
//! ## Invariants
//!
//! * Accumulates into `c_band` with wrapping `i64` arithmetic; the band must
//!   arrive zeroed for a plain product.
//! * `c_band.len()` is a multiple of `n`; `first_row` is the index of its
//!   first row within C.

// ============================================================================
// Kernel
// ============================================================================

/// Compute a contiguous band of C rows, `C[i][j] += Σ_k A[i][k] * B[k][j]`.
pub fn multiply_band(a: &[i64], b: &[i64], c_band: &mut [i64], n: usize, first_row: usize) {
    for (local_i, c_row) in c_band.chunks_exact_mut(n).enumerate() {
        let a_row = &a[(first_row + local_i) * n..][..n];
        for (j, c_ij) in c_row.iter_mut().enumerate() {
            let mut acc = *c_ij;
            for (k, &a_ik) in a_row.iter().enumerate() {
                acc = acc.wrapping_add(a_ik.wrapping_mul(b[k * n + j]));
            }
            *c_ij = acc;
        }
    }
}
