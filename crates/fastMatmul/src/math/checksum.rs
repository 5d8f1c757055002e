//! Order-sensitive 32-bit matrix checksum.
//!
//! ## Purpose
//!
//! This module condenses a whole matrix into one `u32` so that two strategies
//! can be compared for bit-identical output with a single equality check. The
//! checksum is pure: it never mutates the matrix and two calls on equal
//! matrices always agree.
//!
//! ## Key concepts
//!
//! * Each element is reduced to its low 32 bits, XORed with `MAGIC`, and
//!   weighted by its column index (`i mod n` in flat row-major order), so
//!   most permutations of the element sequence change the result.
//! * All arithmetic wraps modulo 2^32.
//!
//! ## Non-goals
//!
//! * Cryptographic strength; this is a cheap consistency probe, not a digest.

// Internal dependencies
use crate::primitives::matrix::Matrix;

// ============================================================================
// Constants
// ============================================================================

/// Per-element XOR mask folded into the checksum.
pub const MAGIC: u32 = 0xDEAD_10CC;

// ============================================================================
// Checksum
// ============================================================================

/// Compute the order-sensitive checksum of `matrix`.
pub fn hash(matrix: &Matrix) -> u32 {
    let n = matrix.dimension();
    let mut acc: u32 = 0;
    for (i, &element) in matrix.as_slice().iter().enumerate() {
        let weight = (i % n) as u32;
        acc = acc.wrapping_add(weight.wrapping_mul((element as u32) ^ MAGIC));
    }
    acc
}
