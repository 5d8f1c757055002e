//! Cache-blocked (tiled) multiplication.
//!
//! ## Purpose
//!
//! Partitions the iteration space into `block_size` cubes so each tile of A,
//! B, and C fits in cache while it is being reused. Within a tile the loops
//! run in the reordered i-k-j order; tiles along k accumulate into the same C
//! tile, which is why the band must stay zeroed between strategies.
//!
//! ## Invariants
//!
//! * `block_size` divides `n`; the validator rejects anything else before a
//!   kernel ever runs.
//! * `c_band` covers whole rows and its height is a multiple of `block_size`.

// ============================================================================
// Kernel
// ============================================================================

/// Compute a contiguous band of C rows, one `block_size` tile at a time.
pub fn multiply_band(
    a: &[i64],
    b: &[i64],
    c_band: &mut [i64],
    n: usize,
    first_row: usize,
    block_size: usize,
) {
    let band_rows = c_band.len() / n;
    for i0 in (0..band_rows).step_by(block_size) {
        for j0 in (0..n).step_by(block_size) {
            for k0 in (0..n).step_by(block_size) {
                for i in i0..i0 + block_size {
                    let a_tile_row = &a[(first_row + i) * n + k0..][..block_size];
                    for (k_local, &a_ik) in a_tile_row.iter().enumerate() {
                        let b_tile_row = &b[(k0 + k_local) * n + j0..][..block_size];
                        let c_tile_row = &mut c_band[i * n + j0..][..block_size];
                        for (c_ij, &b_kj) in c_tile_row.iter_mut().zip(b_tile_row) {
                            *c_ij = c_ij.wrapping_add(a_ik.wrapping_mul(b_kj));
                        }
                    }
                }
            }
        }
    }
}
