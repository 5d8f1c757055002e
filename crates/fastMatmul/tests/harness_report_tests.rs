//! Tests for the generate-multiply-checksum harness and its report.
//!
//! ## Test Organization
//!
//! 1. **Determinism** - Same seeds, same checksums, across strategies
//! 2. **Report contents** - Fields and Display formatting

use fastMatmul::prelude::*;

// ============================================================================
// Determinism Tests
// ============================================================================

/// Two runs with the same configuration report identical checksums.
#[test]
fn test_run_is_deterministic() {
    let engine = Matmul::new()
        .dimension(48)
        .strategy(Reordered)
        .parallel(false)
        .build()
        .unwrap();
    let first = engine.run().unwrap();
    let second = engine.run().unwrap();
    assert_eq!(first.hash_a, second.hash_a);
    assert_eq!(first.hash_b, second.hash_b);
    assert_eq!(first.hash_c, second.hash_c);
}

/// The reported input checksums match hashing the generated inputs directly.
#[test]
fn test_input_checksums_match_generation() {
    let report = Matmul::new()
        .dimension(48)
        .parallel(false)
        .build()
        .unwrap()
        .run()
        .unwrap();
    let a = generate(48, 0xA).unwrap();
    let b = generate(48, 0xB).unwrap();
    assert_eq!(report.hash_a, hash(&a));
    assert_eq!(report.hash_b, hash(&b));
}

/// Every strategy reports the same product checksum for the same seeds.
#[test]
fn test_product_checksum_is_strategy_independent() {
    let mut product_hashes = Vec::new();
    for strategy in Strategy::ALL {
        let report = Matmul::new()
            .dimension(64)
            .strategy(strategy)
            .block_size(16)
            .parallel(false)
            .build()
            .unwrap()
            .run()
            .unwrap();
        product_hashes.push(report.hash_c);
    }
    assert!(
        product_hashes.windows(2).all(|pair| pair[0] == pair[1]),
        "strategies disagreed: {product_hashes:#x?}"
    );
}

/// Custom seeds flow into generation.
#[test]
fn test_custom_seeds() {
    let default_seeds = Matmul::new()
        .dimension(32)
        .parallel(false)
        .build()
        .unwrap()
        .run()
        .unwrap();
    let custom = Matmul::new()
        .dimension(32)
        .parallel(false)
        .seed_a(123)
        .seed_b(456)
        .build()
        .unwrap()
        .run()
        .unwrap();
    assert_ne!(default_seeds.hash_a, custom.hash_a);
    assert_ne!(default_seeds.hash_b, custom.hash_b);
}

// ============================================================================
// Report Tests
// ============================================================================

/// The report records the configuration that produced it.
#[test]
fn test_report_configuration_fields() {
    let report = Matmul::new()
        .dimension(32)
        .strategy(Simd)
        .parallel(false)
        .build()
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(report.dimension, 32);
    assert_eq!(report.strategy, Simd);
    assert!(!report.parallel);
}

/// Display shows the dimension, strategy, mode, and all three checksums.
#[test]
fn test_report_display() {
    let report = Matmul::new()
        .dimension(16)
        .strategy(Blocked)
        .block_size(4)
        .parallel(false)
        .build()
        .unwrap()
        .run()
        .unwrap();
    let rendered = report.to_string();
    assert!(rendered.contains("16 x 16"));
    assert!(rendered.contains("blocked"));
    assert!(rendered.contains("serial"));
    assert!(rendered.contains("Multiplication time:"));
    assert!(rendered.contains(&format!("hash(A) = {:#010x}", report.hash_a)));
    assert!(rendered.contains(&format!("hash(B) = {:#010x}", report.hash_b)));
    assert!(rendered.contains(&format!("hash(C) = {:#010x}", report.hash_c)));
}
