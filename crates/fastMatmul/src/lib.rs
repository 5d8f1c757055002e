//! # fastMatmul — Dense square-matrix multiplication engine
//!
//! Multiplies dense square `i64` matrices with five interchangeable
//! strategies — naive, loop-reordered, cache-blocked, SIMD, and Strassen —
//! that all produce bit-identical results, so any two runs can be compared by
//! a single 32-bit checksum.
//!
//! ## What is this for?
//!
//! The crate is a benchmarking and verification harness as much as a math
//! library: it generates reproducible pseudo-random inputs from seeds, times
//! exactly one multiplication, and reports order-sensitive checksums of both
//! operands and the product. Strategies can run sequentially or on an
//! engine-owned worker pool, and a serial run is bit-identical to a parallel
//! one.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastMatmul::prelude::*;
//!
//! // Build the engine
//! let engine = Matmul::new()
//!     .dimension(64)          // 64 x 64 matrices
//!     .strategy(Reordered)    // cache-friendly i-k-j loops
//!     .parallel(false)        // single-threaded
//!     .build()?;
//!
//! // Generate seeded inputs, multiply once, checksum everything
//! let report = engine.run()?;
//!
//! println!("{}", report);
//! # Result::<(), MatmulError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Dimension:  64 x 64
//!   Strategy:   reordered
//!   Mode:       serial
//!   Multiplication time: 0.000412 s
//!
//! hash(A) = 0x1d0a864c
//! hash(B) = 0x9bc01b22
//! hash(C) = 0x57f6a3e1
//! ```
//!
//! ### Multiplying Your Own Matrices
//!
//! ```rust
//! use fastMatmul::prelude::*;
//!
//! let a = Matrix::from_elements(2, vec![1, 2, 3, 4])?;
//! let b = Matrix::from_elements(2, vec![5, 6, 7, 8])?;
//!
//! let engine = Matmul::new().strategy(Naive).parallel(false).build()?;
//! let c = engine.multiply(&a, &b)?;
//!
//! assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
//! # Result::<(), MatmulError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `build`, `multiply`, and `run` return `Result<_, MatmulError>`; the `?`
//! operator is idiomatic, but errors can also be handled explicitly:
//!
//! ```rust
//! use fastMatmul::prelude::*;
//!
//! match Matmul::new().dimension(129).strategy(Strassen).build() {
//!     Ok(engine) => {
//!         let report = engine.run().unwrap();
//!         println!("hash(C) = {:#010x}", report.hash_c);
//!     }
//!     Err(e) => {
//!         // 129 does not halve evenly down to the Strassen base threshold
//!         eprintln!("configuration rejected: {}", e);
//!     }
//! }
//! ```
//!
//! ## Strategy Notes
//!
//! | Strategy    | Idea                                      | Contract                   |
//! |-------------|-------------------------------------------|----------------------------|
//! | `Naive`     | textbook i-j-k loops                      | none                       |
//! | `Reordered` | i-k-j loops, unit-stride inner loop       | none                       |
//! | `Blocked`   | cache tiling with `block_size` cubes      | block size divides n       |
//! | `Simd`      | 4-lane dot products over transposed B     | none (scalar tail)         |
//! | `Strassen`  | seven recursive products, task fan-out    | n halves evenly to 128     |
//!
//! All strategies use wrapping 64-bit arithmetic, so even inputs that
//! overflow during accumulation yield identical results everywhere.

#![allow(non_snake_case)]

// Layer 1: Primitives - matrix storage, generation, and errors.
mod primitives;

// Layer 2: Math - pure functions (checksums).
mod math;

// Layer 3: Algorithms - the five multiplication strategies.
mod algorithms;

// Layer 4: Engine - validation, dispatch, and reporting.
mod engine;

// High-level fluent API for multiplication runs.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{MatmulBuilder as Matmul, MatmulEngine};
    pub use crate::engine::executor::Strategy::{
        self, Blocked, Naive, Reordered, Simd, Strassen,
    };
    pub use crate::engine::output::MultiplyReport;
    pub use crate::math::checksum::{hash, MAGIC};
    pub use crate::primitives::errors::MatmulError;
    pub use crate::primitives::generator::{fill, generate, transpose, ELEMENT_MAX};
    pub use crate::primitives::matrix::Matrix;
}

// Internal modules for development and testing.
//
// Not part of the supported API surface; paths and signatures in here may
// change in patch releases.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
