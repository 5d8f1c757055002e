//! Owned matrix storage for multiplication operations.
//!
//! ## Purpose
//!
//! This module provides the square, row-major `i64` matrix that every strategy
//! reads from and writes into. Allocation is fallible and zero-initializing;
//! release happens exactly once, through `Drop` on the owned backing vector.
//!
//! ## Design notes
//!
//! * **Row-major**: Element `(i, j)` lives at index `i * n + j`, so a row is a
//!   contiguous slice and the executor can split the output into disjoint
//!   row bands.
//! * **Fallible allocation**: The backing store is reserved via
//!   `try_reserve_exact`, turning an out-of-memory condition into an error
//!   value instead of a process abort.
//! * **No implicit copies**: Matrices move; cloning is explicit.
//!
//! ## Invariants
//!
//! * `data.len() == dimension * dimension` at all times.
//! * `dimension >= 1`; a zero dimension is rejected at construction.
//!
//! ## Non-goals
//!
//! * Rectangular shapes or element types other than `i64`.
//! * Views or slicing beyond whole rows; quadrant extraction is the Strassen
//!   module's concern.

// Internal dependencies
use crate::primitives::errors::MatmulError;

// External dependencies
use core::ops::{Index, IndexMut};

// ============================================================================
// Matrix
// ============================================================================

/// A square, row-major matrix of `i64` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    /// Backing store, `dimension * dimension` elements.
    data: Vec<i64>,
    /// Side length of the square matrix.
    dimension: usize,
}

impl Matrix {
    /// Allocate a zero-filled `n x n` matrix.
    ///
    /// Fails with `InvalidDimension` for `n == 0` and `AllocationFailed` when
    /// the backing store cannot be reserved.
    pub fn zeroed(n: usize) -> Result<Self, MatmulError> {
        if n == 0 {
            return Err(MatmulError::InvalidDimension(0));
        }
        let elements = n
            .checked_mul(n)
            .ok_or(MatmulError::AllocationFailed { elements: usize::MAX })?;
        let mut data = Vec::new();
        data.try_reserve_exact(elements)
            .map_err(|_| MatmulError::AllocationFailed { elements })?;
        data.resize(elements, 0);
        Ok(Self { data, dimension: n })
    }

    /// Build a matrix from an existing row-major element vector.
    ///
    /// Fails with `ShapeMismatch` when `elements.len() != n * n`.
    pub fn from_elements(n: usize, elements: Vec<i64>) -> Result<Self, MatmulError> {
        if n == 0 {
            return Err(MatmulError::InvalidDimension(0));
        }
        if elements.len() != n * n {
            return Err(MatmulError::ShapeMismatch {
                dimension: n,
                elements: elements.len(),
            });
        }
        Ok(Self { data: elements, dimension: n })
    }

    /// Side length of the matrix.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The whole backing store as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// The whole backing store as a mutable row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[i64] {
        let n = self.dimension;
        &self.data[i * n..(i + 1) * n]
    }

    /// Row `i` as a mutable contiguous slice.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [i64] {
        let n = self.dimension;
        &mut self.data[i * n..(i + 1) * n]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        &self.data[i * self.dimension + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i64 {
        &mut self.data[i * self.dimension + j]
    }
}
