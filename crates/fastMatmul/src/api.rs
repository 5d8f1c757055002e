//! High-level API for matrix multiplication runs.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent builder
//! that configures dimension, strategy, execution mode, and input seeds, and
//! the engine it produces, which multiplies caller-supplied matrices or runs
//! the full generate-multiply-checksum harness.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Every contract is checked when `.build()` is called; a
//!   built engine cannot fail validation at multiply time for configured runs.
//! * **Self-contained**: The engine owns its worker pool, so process-global
//!   state is never touched.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MatmulBuilder`] via `Matmul::new()`.
//! 2. Chain configuration methods (`.dimension()`, `.strategy()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`MatmulEngine`].

// Internal dependencies
use crate::engine::executor::{MatmulExecutor, Strategy};
use crate::engine::output::MultiplyReport;
use crate::engine::validator::Validator;
use crate::math::checksum;
use crate::primitives::errors::MatmulError;
use crate::primitives::generator;
use crate::primitives::matrix::Matrix;

// External dependencies
use std::time::Instant;

// ============================================================================
// Defaults
// ============================================================================

/// Default matrix dimension.
pub const DEFAULT_DIMENSION: usize = 256;

/// Default block size for the blocked strategy.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Default seed for the left operand.
pub const DEFAULT_SEED_A: u64 = 0xA;

/// Default seed for the right operand.
pub const DEFAULT_SEED_B: u64 = 0xB;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a multiplication engine.
#[derive(Debug, Clone, Default)]
pub struct MatmulBuilder {
    /// Side length of the square matrices.
    pub dimension: Option<usize>,

    /// Multiplication strategy.
    pub strategy: Option<Strategy>,

    /// Tile side length (Blocked only).
    pub block_size: Option<usize>,

    /// Run on a worker pool.
    pub parallel: Option<bool>,

    /// Worker pool size; defaults to available hardware parallelism.
    pub threads: Option<usize>,

    /// Seed for the generated left operand.
    pub seed_a: Option<u64>,

    /// Seed for the generated right operand.
    pub seed_b: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MatmulBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matrix dimension.
    pub fn dimension(mut self, dimension: usize) -> Self {
        if self.dimension.is_some() {
            self.duplicate_param = Some("dimension");
        }
        self.dimension = Some(dimension);
        self
    }

    /// Set the multiplication strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Set the tile side length (Blocked only).
    pub fn block_size(mut self, block_size: usize) -> Self {
        if self.block_size.is_some() {
            self.duplicate_param = Some("block_size");
        }
        self.block_size = Some(block_size);
        self
    }

    /// Enable or disable the worker pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Set the worker pool size.
    pub fn threads(mut self, threads: usize) -> Self {
        if self.threads.is_some() {
            self.duplicate_param = Some("threads");
        }
        self.threads = Some(threads);
        self
    }

    /// Set the seed for the generated left operand.
    pub fn seed_a(mut self, seed: u64) -> Self {
        if self.seed_a.is_some() {
            self.duplicate_param = Some("seed_a");
        }
        self.seed_a = Some(seed);
        self
    }

    /// Set the seed for the generated right operand.
    pub fn seed_b(mut self, seed: u64) -> Self {
        if self.seed_b.is_some() {
            self.duplicate_param = Some("seed_b");
        }
        self.seed_b = Some(seed);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<MatmulEngine, MatmulError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let dimension = self.dimension.unwrap_or(DEFAULT_DIMENSION);
        let strategy = self.strategy.unwrap_or_default();
        let block_size = self.block_size.unwrap_or(DEFAULT_BLOCK_SIZE);
        let parallel = self.parallel.unwrap_or(true);

        Validator::validate_dimension(dimension)?;
        Validator::validate_strategy(strategy, dimension, block_size)?;
        Validator::validate_threads(self.threads)?;

        let executor = MatmulExecutor::new(strategy, block_size, parallel, self.threads)?;
        Ok(MatmulEngine {
            dimension,
            seed_a: self.seed_a.unwrap_or(DEFAULT_SEED_A),
            seed_b: self.seed_b.unwrap_or(DEFAULT_SEED_B),
            executor,
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// A validated multiplication engine with a fixed strategy and execution mode.
#[derive(Debug)]
pub struct MatmulEngine {
    dimension: usize,
    seed_a: u64,
    seed_b: u64,
    executor: MatmulExecutor,
}

impl MatmulEngine {
    /// Configured matrix dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.executor.strategy()
    }

    /// Whether runs use a worker pool.
    pub fn is_parallel(&self) -> bool {
        self.executor.is_parallel()
    }

    /// Multiply two caller-supplied matrices with the configured strategy.
    ///
    /// The operands may have any dimension that satisfies the strategy's
    /// contract; they are not required to match the configured harness
    /// dimension.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatmulError> {
        self.executor.multiply(a, b)
    }

    /// Run the full harness: generate both operands from the configured
    /// seeds, time the single multiplication, and checksum all three
    /// matrices.
    pub fn run(&self) -> Result<MultiplyReport, MatmulError> {
        let a = generator::generate(self.dimension, self.seed_a)?;
        let b = generator::generate(self.dimension, self.seed_b)?;

        let start = Instant::now();
        let c = self.executor.multiply(&a, &b)?;
        let elapsed = start.elapsed();

        Ok(MultiplyReport {
            dimension: self.dimension,
            strategy: self.executor.strategy(),
            parallel: self.executor.is_parallel(),
            elapsed,
            hash_a: checksum::hash(&a),
            hash_b: checksum::hash(&b),
            hash_c: checksum::hash(&c),
        })
    }
}
