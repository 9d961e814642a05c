//! Free-function entry points
//!
//! These are the operations a host environment calls. Each one is a pure
//! function of its inputs; the `_with_config` variants take an explicit
//! size guard and execution strategy, the plain ones use
//! [`DEFAULT_CONFIG`].

use crate::estimators::{HodgesLehmann, HodgesLehmannShift, Median};
use num_traits::Float;
use robust_core::{
    CentralTendencyEstimator, ExpansionConfig, Result, TwoSampleEstimator, DEFAULT_CONFIG,
};

/// Median of `sample`
///
/// The sample is copied; the caller's slice is never reordered.
///
/// # Examples
///
/// ```rust
/// use robust_location::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// assert!(median::<f64>(&[]).is_err());
/// ```
pub fn median<T: Float + Send + Sync>(sample: &[T]) -> Result<T> {
    Median.estimate(sample)
}

/// One-sample Hodges-Lehmann location estimate, self-pairs included
///
/// # Examples
///
/// ```rust
/// use robust_location::hle1;
///
/// assert_eq!(hle1(&[5.0]).unwrap(), 5.0);
/// // Walsh averages {1, 2, 3}
/// assert_eq!(hle1(&[1.0, 3.0]).unwrap(), 2.0);
/// ```
pub fn hle1<T: Float + Send + Sync>(sample: &[T]) -> Result<T> {
    hle1_with_config(sample, &DEFAULT_CONFIG)
}

/// One-sample Hodges-Lehmann location estimate under `config`
pub fn hle1_with_config<T: Float + Send + Sync>(
    sample: &[T],
    config: &ExpansionConfig,
) -> Result<T> {
    HodgesLehmann::new(*config)?.estimate(sample)
}

/// Two-sample Hodges-Lehmann shift estimate `b - a`
///
/// # Examples
///
/// ```rust
/// use robust_location::hle2;
///
/// assert_eq!(hle2(&[0.0, 0.0], &[2.0, 2.0]).unwrap(), 2.0);
/// ```
pub fn hle2<T: Float + Send + Sync>(a: &[T], b: &[T]) -> Result<T> {
    hle2_with_config(a, b, &DEFAULT_CONFIG)
}

/// Two-sample Hodges-Lehmann shift estimate `b - a` under `config`
pub fn hle2_with_config<T: Float + Send + Sync>(
    a: &[T],
    b: &[T],
    config: &ExpansionConfig,
) -> Result<T> {
    HodgesLehmannShift::new(*config)?.estimate_two_sample(a, b)
}
