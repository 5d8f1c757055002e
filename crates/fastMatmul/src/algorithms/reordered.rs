//! Loop-reordered multiplication (i-k-j order).
//!
//! ## Purpose
//!
//! Swapping the two inner loops makes the innermost loop walk a row of B and
//! a row of C with unit stride, turning the naive kernel's strided column
//! reads into sequential ones. Same arithmetic, same result, far better cache
//! behavior; this is also the base case the Strassen recursion bottoms out on.
//!
//! ## Invariants
//!
//! * Accumulates into `c_band` with wrapping `i64` arithmetic.
//! * `c_band.len()` is a multiple of `n`; `first_row` is the index of its
//!   first row within C.

// ============================================================================
// Kernel
// ============================================================================

/// Compute a contiguous band of C rows with the k loop hoisted above j.
pub fn multiply_band(a: &[i64], b: &[i64], c_band: &mut [i64], n: usize, first_row: usize) {
    for (local_i, c_row) in c_band.chunks_exact_mut(n).enumerate() {
        let a_row = &a[(first_row + local_i) * n..][..n];
        for (k, &a_ik) in a_row.iter().enumerate() {
            let b_row = &b[k * n..][..n];
            for (c_ij, &b_kj) in c_row.iter_mut().zip(b_row) {
                *c_ij = c_ij.wrapping_add(a_ik.wrapping_mul(b_kj));
            }
        }
    }
}
