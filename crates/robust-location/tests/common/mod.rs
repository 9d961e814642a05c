//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Sample lengths covering both parities and the degenerate sizes
pub fn edge_case_lengths() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 7, 8, 16, 17, 31, 64, 101, 128]
}

/// Generate normal distribution data
pub fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Generate uniform distribution data
pub fn generate_uniform(n: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

/// Generate data drawn from a handful of repeated values
pub fn generate_ties(n: usize, distinct: u32, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..distinct) as f64).collect()
}

/// Install a tracing subscriber once so debug events are exercised
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("robust_location=trace")
        .with_test_writer()
        .try_init();
}
