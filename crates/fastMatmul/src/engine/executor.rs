//! Strategy dispatch and worker-pool execution.
//!
//! ## Purpose
//!
//! This module owns the multiplication pass: it validates the operands, zeros
//! the output, and routes the work to the configured strategy kernel, either
//! sequentially or across an explicitly owned rayon pool.
//!
//! ## Design notes
//!
//! * **Row-band partitioning**: Every O(n³) strategy fills disjoint,
//!   contiguous bands of C rows, so the parallel pass is a lock-free
//!   `par_chunks_mut` over the output. Blocked uses `block_size`-row bands to
//!   keep whole tiles on one worker; the other kernels get one row per band.
//! * **Owned pool**: Parallelism is a property of the executor, not of the
//!   process. The pool is built once at construction and every parallel
//!   region runs inside `pool.install`, so two executors with different
//!   thread counts coexist in one process.
//! * **Serial twin**: With no pool, the identical kernels run in a plain
//!   loop, which is what makes parallel-vs-serial output bit-identical.
//!
//! ## Invariants
//!
//! * The output matrix is freshly zeroed before any kernel runs.
//! * Strategy contracts have been validated before a kernel is dispatched.

// Internal dependencies
use crate::algorithms::{blocked, naive, reordered, simd, strassen};
use crate::engine::validator::Validator;
use crate::primitives::errors::MatmulError;
use crate::primitives::generator;
use crate::primitives::matrix::Matrix;

// External dependencies
use core::fmt::{Display, Formatter};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

// ============================================================================
// Strategy
// ============================================================================

/// The multiplication strategies the executor can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Textbook i-j-k triple loop.
    #[default]
    Naive,
    /// Cache-friendly i-k-j loop order.
    Reordered,
    /// Tiled multiplication with a configurable block size.
    Blocked,
    /// Vectorized dot products over a pre-transposed right operand.
    Simd,
    /// Seven-product divide-and-conquer recursion.
    Strassen,
}

impl Strategy {
    /// Every strategy, in documentation order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Naive,
        Strategy::Reordered,
        Strategy::Blocked,
        Strategy::Simd,
        Strategy::Strassen,
    ];

    /// Lower-case strategy name used in reports and environment variables.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Reordered => "reordered",
            Strategy::Blocked => "blocked",
            Strategy::Simd => "simd",
            Strategy::Strassen => "strassen",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Executes multiplications with a fixed strategy and execution mode.
#[derive(Debug)]
pub struct MatmulExecutor {
    strategy: Strategy,
    block_size: usize,
    pool: Option<ThreadPool>,
}

impl MatmulExecutor {
    /// Build an executor; constructs the worker pool when `parallel` is set.
    pub fn new(
        strategy: Strategy,
        block_size: usize,
        parallel: bool,
        threads: Option<usize>,
    ) -> Result<Self, MatmulError> {
        let pool = if parallel {
            let mut builder = ThreadPoolBuilder::new();
            if let Some(count) = threads {
                builder = builder.num_threads(count);
            }
            let pool = builder
                .build()
                .map_err(|e| MatmulError::ThreadPoolBuild(e.to_string()))?;
            Some(pool)
        } else {
            None
        };
        Ok(Self {
            strategy,
            block_size,
            pool,
        })
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether this executor runs on a worker pool.
    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    /// Multiply `a * b` into a freshly allocated output matrix.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatmulError> {
        Validator::validate_operands(a, b)?;
        Validator::validate_strategy(self.strategy, a.dimension(), self.block_size)?;

        let mut c = Matrix::zeroed(a.dimension())?;
        match &self.pool {
            Some(pool) => pool.install(|| self.dispatch(a, b, &mut c, true))?,
            None => self.dispatch(a, b, &mut c, false)?,
        }
        Ok(c)
    }

    fn dispatch(
        &self,
        a: &Matrix,
        b: &Matrix,
        c: &mut Matrix,
        parallel: bool,
    ) -> Result<(), MatmulError> {
        let n = a.dimension();
        match self.strategy {
            Strategy::Naive => {
                run_banded(
                    a.as_slice(),
                    b.as_slice(),
                    c.as_mut_slice(),
                    n,
                    1,
                    parallel,
                    naive::multiply_band,
                );
                Ok(())
            }
            Strategy::Reordered => {
                run_banded(
                    a.as_slice(),
                    b.as_slice(),
                    c.as_mut_slice(),
                    n,
                    1,
                    parallel,
                    reordered::multiply_band,
                );
                Ok(())
            }
            Strategy::Blocked => {
                let block_size = self.block_size;
                run_banded(
                    a.as_slice(),
                    b.as_slice(),
                    c.as_mut_slice(),
                    n,
                    block_size,
                    parallel,
                    move |a, b, band, n, first_row| {
                        blocked::multiply_band(a, b, band, n, first_row, block_size)
                    },
                );
                Ok(())
            }
            Strategy::Simd => {
                let bt = generator::transpose(b)?;
                run_banded(
                    a.as_slice(),
                    bt.as_slice(),
                    c.as_mut_slice(),
                    n,
                    1,
                    parallel,
                    simd::multiply_band,
                );
                Ok(())
            }
            Strategy::Strassen => strassen::multiply(a, b, c, parallel),
        }
    }
}

// ============================================================================
// Band runner
// ============================================================================

/// Run a row-band kernel over C, in parallel bands or one sequential sweep.
fn run_banded<K>(
    a: &[i64],
    b: &[i64],
    c: &mut [i64],
    n: usize,
    band_rows: usize,
    parallel: bool,
    kernel: K,
) where
    K: Fn(&[i64], &[i64], &mut [i64], usize, usize) + Sync,
{
    let band_len = band_rows * n;
    if parallel {
        c.par_chunks_mut(band_len)
            .enumerate()
            .for_each(|(band_idx, band)| kernel(a, b, band, n, band_idx * band_rows));
    } else {
        for (band_idx, band) in c.chunks_mut(band_len).enumerate() {
            kernel(a, b, band, n, band_idx * band_rows);
        }
    }
}
