//! Result reporting for a timed multiplication run.
//!
//! ## Purpose
//!
//! This module defines the report a harness run returns: what was multiplied,
//! how, how long the multiplication itself took, and the three checksums that
//! let runs be compared across strategies, thread counts, and machines.
//!
//! ## Design notes
//!
//! * **Timing scope**: `elapsed` covers only the multiplication call; input
//!   generation and checksum computation happen outside the timed window.
//! * **Checksums in hex**: `Display` prints checksums as `0x`-prefixed hex,
//!   which is how they are typically diffed between runs.

// Internal dependencies
use crate::engine::executor::Strategy;

// External dependencies
use core::fmt::{Display, Formatter};
use core::time::Duration;

// ============================================================================
// MultiplyReport
// ============================================================================

/// Outcome of one timed multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplyReport {
    /// Side length of the multiplied matrices.
    pub dimension: usize,
    /// Strategy that produced the result.
    pub strategy: Strategy,
    /// Whether the run used a worker pool.
    pub parallel: bool,
    /// Wall-clock duration of the multiplication call alone.
    pub elapsed: Duration,
    /// Checksum of the left operand.
    pub hash_a: u32,
    /// Checksum of the right operand.
    pub hash_b: u32,
    /// Checksum of the product.
    pub hash_c: u32,
}

impl Display for MultiplyReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Dimension:  {n} x {n}", n = self.dimension)?;
        writeln!(f, "  Strategy:   {}", self.strategy)?;
        writeln!(
            f,
            "  Mode:       {}",
            if self.parallel { "parallel" } else { "serial" }
        )?;
        writeln!(f, "  Multiplication time: {:.6} s", self.elapsed.as_secs_f64())?;
        writeln!(f)?;
        writeln!(f, "hash(A) = {:#010x}", self.hash_a)?;
        writeln!(f, "hash(B) = {:#010x}", self.hash_b)?;
        write!(f, "hash(C) = {:#010x}", self.hash_c)
    }
}
