//! The five multiplication strategies.
//!
//! Every O(n³) strategy is written as a row-band kernel: it fills a
//! contiguous band of C rows, so the executor can hand disjoint bands to
//! worker threads without any locking. Strassen recurses on whole matrices
//! and manages its own task fan-out.

pub mod blocked;
pub mod naive;
pub mod reordered;
pub mod simd;
pub mod strassen;
