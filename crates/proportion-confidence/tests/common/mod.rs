//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_abs_diff_eq;

pub const EPSILON: f64 = 1e-9;

/// Confidence levels spanning the useful range
pub fn common_levels() -> Vec<f64> {
    vec![0.5, 0.8, 0.9, 0.95, 0.99, 0.999]
}

/// (successes, trials) pairs that exercise the edges of the method
pub fn edge_case_counts() -> Vec<(u64, u64)> {
    vec![
        (0, 1),           // Single failure
        (1, 1),           // Single success
        (0, 10),          // No successes
        (10, 10),         // All successes
        (1, 2),           // Even split, tiny sample
        (5, 10),          // Even split
        (1, 1_000),       // Rare event
        (999, 1_000),     // Near certain
        (0, 1_000_000),   // Large sample, no successes
        (500_000, 1_000_000),
        (u32::MAX as u64, u32::MAX as u64), // Counts far beyond f64 mantissa concerns
    ]
}
