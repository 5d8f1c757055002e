//! Fail-fast validation of configuration and operands.
//!
//! ## Purpose
//!
//! This module centralizes every contract check so that violations surface as
//! typed errors before any multiplication starts. Checks are ordered cheapest
//! first; nothing here allocates.
//!
//! ## Key concepts
//!
//! 1. **Shape checks**: Non-zero dimensions, matching operand dimensions.
//! 2. **Strategy contracts**: Block divisibility for Blocked, even halvability
//!    down to the base threshold for Strassen.
//! 3. **Pool checks**: Explicit thread counts must be at least 1.
//! 4. **Builder hygiene**: Duplicate parameter assignments are rejected.
//!
//! ## Non-goals
//!
//! * This module does not repair invalid configurations (no truncation of
//!   indivisible dimensions, no silent fallback strategy).

// Internal dependencies
use crate::algorithms::strassen::BASE_THRESHOLD;
use crate::engine::executor::Strategy;
use crate::primitives::errors::MatmulError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Stateless collection of contract checks.
pub struct Validator;

impl Validator {
    /// Reject zero dimensions.
    pub fn validate_dimension(dimension: usize) -> Result<(), MatmulError> {
        if dimension == 0 {
            return Err(MatmulError::InvalidDimension(0));
        }
        Ok(())
    }

    /// Reject operand pairs of different dimension.
    pub fn validate_operands(a: &Matrix, b: &Matrix) -> Result<(), MatmulError> {
        if a.dimension() != b.dimension() {
            return Err(MatmulError::DimensionMismatch {
                a: a.dimension(),
                b: b.dimension(),
            });
        }
        Ok(())
    }

    /// Reject block sizes that are zero or do not divide the dimension.
    pub fn validate_block_size(dimension: usize, block_size: usize) -> Result<(), MatmulError> {
        if block_size == 0 || dimension % block_size != 0 {
            return Err(MatmulError::IndivisibleBlockSize {
                dimension,
                block_size,
            });
        }
        Ok(())
    }

    /// Reject dimensions that do not halve evenly down to the Strassen base
    /// threshold.
    pub fn validate_strassen_dimension(dimension: usize) -> Result<(), MatmulError> {
        let mut remaining = dimension;
        while remaining > BASE_THRESHOLD {
            if remaining % 2 != 0 {
                return Err(MatmulError::IndivisibleStrassenDimension {
                    dimension,
                    threshold: BASE_THRESHOLD,
                });
            }
            remaining /= 2;
        }
        Ok(())
    }

    /// Reject explicit zero thread counts. `None` defers to the pool default.
    pub fn validate_threads(threads: Option<usize>) -> Result<(), MatmulError> {
        if threads == Some(0) {
            return Err(MatmulError::InvalidThreadCount(0));
        }
        Ok(())
    }

    /// Reject a builder parameter that was assigned twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), MatmulError> {
        if let Some(parameter) = duplicate {
            return Err(MatmulError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    /// Run the strategy-specific contract for `dimension`.
    pub fn validate_strategy(
        strategy: Strategy,
        dimension: usize,
        block_size: usize,
    ) -> Result<(), MatmulError> {
        match strategy {
            Strategy::Blocked => Self::validate_block_size(dimension, block_size),
            Strategy::Strassen => Self::validate_strassen_dimension(dimension),
            Strategy::Naive | Strategy::Reordered | Strategy::Simd => Ok(()),
        }
    }
}
