//! Foundational types: matrix storage, deterministic generation, and errors.

pub mod errors;
pub mod generator;
pub mod matrix;
