//! Benchmark-only crate; see `src/bench.rs`.
