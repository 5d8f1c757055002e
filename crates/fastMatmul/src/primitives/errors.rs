//! Error types for matrix multiplication operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring and
//! running a multiplication, including allocation failure, shape violations,
//! and strategy contract violations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual dimension vs. block size).
//! * **Deferred**: Builder misuse is often caught and stored during configuration,
//!   then surfaced by `build()`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Allocation**: Backing-store reservation is fallible and reported, never aborted.
//! 2. **Shape validation**: Zero dimensions, mismatched operands.
//! 3. **Strategy contracts**: Block divisibility, Strassen halvability.
//! 4. **Pool construction**: Thread counts and pool build failures.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for matrix multiplication operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    /// Reserving the backing store for a matrix failed.
    AllocationFailed {
        /// Number of `i64` elements that could not be reserved.
        elements: usize,
    },

    /// Matrix dimensions must be at least 1.
    InvalidDimension(usize),

    /// Operand matrices must share one square dimension.
    DimensionMismatch {
        /// Dimension of the left operand.
        a: usize,
        /// Dimension of the right operand.
        b: usize,
    },

    /// Element count does not match `dimension * dimension`.
    ShapeMismatch {
        /// Declared square dimension.
        dimension: usize,
        /// Number of elements actually provided.
        elements: usize,
    },

    /// The blocked strategy requires the block size to divide the dimension.
    IndivisibleBlockSize {
        /// Matrix dimension.
        dimension: usize,
        /// Configured block size.
        block_size: usize,
    },

    /// Strassen requires the dimension to halve evenly down to the base threshold.
    IndivisibleStrassenDimension {
        /// Matrix dimension.
        dimension: usize,
        /// Base-case threshold below which recursion stops.
        threshold: usize,
    },

    /// Worker pools require at least one thread.
    InvalidThreadCount(usize),

    /// The rayon thread pool could not be constructed.
    ThreadPoolBuild(String),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Display for MatmulError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            MatmulError::AllocationFailed { elements } => {
                write!(f, "failed to allocate backing store for {elements} elements")
            }
            MatmulError::InvalidDimension(n) => {
                write!(f, "matrix dimension must be at least 1, got {n}")
            }
            MatmulError::DimensionMismatch { a, b } => {
                write!(f, "operand dimensions differ: left is {a}x{a}, right is {b}x{b}")
            }
            MatmulError::ShapeMismatch { dimension, elements } => {
                write!(
                    f,
                    "expected {} elements for a {dimension}x{dimension} matrix, got {elements}",
                    dimension * dimension
                )
            }
            MatmulError::IndivisibleBlockSize { dimension, block_size } => {
                write!(
                    f,
                    "block size {block_size} does not divide matrix dimension {dimension}"
                )
            }
            MatmulError::IndivisibleStrassenDimension { dimension, threshold } => {
                write!(
                    f,
                    "dimension {dimension} does not halve evenly down to the Strassen base threshold {threshold}"
                )
            }
            MatmulError::InvalidThreadCount(n) => {
                write!(f, "thread count must be at least 1, got {n}")
            }
            MatmulError::ThreadPoolBuild(msg) => {
                write!(f, "failed to build worker thread pool: {msg}")
            }
            MatmulError::DuplicateParameter { parameter } => {
                write!(f, "parameter '{parameter}' was set more than once")
            }
        }
    }
}

impl Error for MatmulError {}
