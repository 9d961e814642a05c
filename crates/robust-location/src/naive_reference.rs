//! Naive reference implementations of the location estimators
//!
//! These implementations are intentionally simple and unoptimized: they
//! build every pair with nested loops and fully sort. They serve as a
//! reference for verifying the selection-based implementations.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

#![allow(dead_code)]

/// Mean of two values, halving first if the sum overflows
pub fn naive_midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() || !(a.is_finite() && b.is_finite()) {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

/// Median by full sort
pub fn naive_median(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute median of empty data");

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        naive_midpoint(sorted[n / 2 - 1], sorted[n / 2])
    }
}

/// Hodges-Lehmann location estimate from an explicit pair list
pub fn naive_hle1(data: &[f64], include_self: bool) -> f64 {
    let mut averages = Vec::new();
    for i in 0..data.len() {
        for j in i..data.len() {
            if i == j && !include_self {
                continue;
            }
            averages.push(naive_midpoint(data[i], data[j]));
        }
    }
    naive_median(&averages)
}

/// Hodges-Lehmann shift estimate from an explicit difference list
pub fn naive_hle2(a: &[f64], b: &[f64]) -> f64 {
    let mut differences = Vec::new();
    for &x in a {
        for &y in b {
            differences.push(y - x);
        }
    }
    naive_median(&differences)
}
