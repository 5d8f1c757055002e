//! Timed multiplication harness.
//!
//! Generates seeded inputs, multiplies them once per strategy, and prints a
//! report with the elapsed time and the checksums of A, B, and C. Matching
//! `hash(C)` values across strategies, modes, and machines mean the runs
//! agreed bit-for-bit.
//!
//! Configuration via environment variables:
//! - `FASTMATMUL_STRATEGY`: `naive`, `reordered`, `blocked`, `simd`,
//!   `strassen`, or `all` (default: `all`)
//! - `FASTMATMUL_DIM`: matrix dimension (default: 256)
//! - `FASTMATMUL_MODE`: `serial` or `parallel` (default: `parallel`)
//!
//! Example: `FASTMATMUL_STRATEGY=simd FASTMATMUL_DIM=512 cargo run --release --example multiply_report`

use fastMatmul::prelude::*;
use std::env;
use std::process;

fn main() -> Result<(), MatmulError> {
    let dimension = env::var("FASTMATMUL_DIM")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(256);
    let parallel = !matches!(env::var("FASTMATMUL_MODE").ok().as_deref(), Some("serial"));

    let requested = env::var("FASTMATMUL_STRATEGY").ok();
    let strategies: Vec<Strategy> = match requested.as_deref() {
        None | Some("all") => Strategy::ALL.to_vec(),
        Some(name) => match Strategy::ALL.into_iter().find(|s| s.name() == name) {
            Some(strategy) => vec![strategy],
            None => {
                eprintln!("unknown strategy '{name}'; expected one of naive, reordered, blocked, simd, strassen, all");
                process::exit(2);
            }
        },
    };

    println!("{}", "=".repeat(60));
    println!("fastMatmul multiplication harness");
    println!("{}", "=".repeat(60));
    println!();

    for strategy in strategies {
        let engine = Matmul::new()
            .dimension(dimension)
            .strategy(strategy)
            .parallel(parallel)
            .build()?;
        let report = engine.run()?;
        println!("{report}");
        println!();
    }

    Ok(())
}
