//! SIMD dot-product multiplication over a pre-transposed B.
//!
//! ## Purpose
//!
//! With B stored transposed, `C[i][j]` is the dot product of two contiguous
//! rows, which vectorizes cleanly: four `i64` lanes multiply-accumulate per
//! step, followed by one horizontal reduction per output element. A scalar
//! tail covers dimensions that are not a multiple of the lane width.
//!
//! ## Design notes
//!
//! * **Safe SIMD**: `wide::i64x4` compiles to 256-bit vector ops where the
//!   target supports them and to portable scalar code elsewhere, so results
//!   are identical on every platform.
//! * Lane arithmetic wraps on overflow, matching the scalar kernels' wrapping
//!   `i64` semantics, so this strategy is bit-identical to the others.
//!
//! ## Invariants
//!
//! * `bt` is the transpose of the right operand; the executor prepares it.
//! * `c_band.len()` is a multiple of `n`; `first_row` is the index of its
//!   first row within C.

// External dependencies
use wide::i64x4;

// ============================================================================
// Constants
// ============================================================================

/// Lane width of the vector accumulator.
const LANES: usize = 4;

// ============================================================================
// Kernel
// ============================================================================

/// Compute a contiguous band of C rows as vectorized dot products against
/// rows of the transposed right operand.
pub fn multiply_band(a: &[i64], bt: &[i64], c_band: &mut [i64], n: usize, first_row: usize) {
    let vector_end = n - n % LANES;
    for (local_i, c_row) in c_band.chunks_exact_mut(n).enumerate() {
        let a_row = &a[(first_row + local_i) * n..][..n];
        for (j, c_ij) in c_row.iter_mut().enumerate() {
            let bt_row = &bt[j * n..][..n];

            let mut acc = i64x4::splat(0);
            for k in (0..vector_end).step_by(LANES) {
                let a_lanes = i64x4::new([a_row[k], a_row[k + 1], a_row[k + 2], a_row[k + 3]]);
                let b_lanes =
                    i64x4::new([bt_row[k], bt_row[k + 1], bt_row[k + 2], bt_row[k + 3]]);
                acc = acc + a_lanes * b_lanes;
            }

            let lanes = acc.to_array();
            let mut dot = lanes[0]
                .wrapping_add(lanes[1])
                .wrapping_add(lanes[2])
                .wrapping_add(lanes[3]);

            // Scalar tail for n % 4 != 0.
            for k in vector_end..n {
                dot = dot.wrapping_add(a_row[k].wrapping_mul(bt_row[k]));
            }

            *c_ij = c_ij.wrapping_add(dot);
        }
    }
}
