//! Core traits for robust location estimation
//!
//! Algorithm-specific types (median, Hodges-Lehmann) live in
//! `robust-location`; this module only fixes the interfaces they share.

use crate::Result;
use num_traits::Float;

/// Descriptive properties shared by all estimators
pub trait EstimatorProperties {
    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The asymptotic breakdown point (fraction of contamination the
    /// estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}

/// Base trait for central tendency estimators
///
/// Implementations never mutate the caller's sample; any reordering
/// happens on a private working copy.
///
/// # Example
///
/// ```rust
/// use robust_core::{CentralTendencyEstimator, EstimatorProperties, Error, Result};
/// use num_traits::Float;
///
/// #[derive(Clone)]
/// struct Midrange;
///
/// impl EstimatorProperties for Midrange {
///     fn name(&self) -> &str { "Midrange" }
///     fn is_robust(&self) -> bool { false }
///     fn breakdown_point(&self) -> f64 { 0.0 }
/// }
///
/// impl<T: Float + Send + Sync> CentralTendencyEstimator<T> for Midrange {
///     fn estimate(&self, sample: &[T]) -> Result<T> {
///         let first = *sample.first().ok_or(Error::empty_input("midrange"))?;
///         let (lo, hi) = sample
///             .iter()
///             .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x)));
///         Ok((lo + hi) / (T::one() + T::one()))
///     }
/// }
///
/// assert_eq!(Midrange.estimate(&[1.0, 5.0, 3.0]).unwrap(), 3.0);
/// ```
pub trait CentralTendencyEstimator<T: Float = f64>: EstimatorProperties + Send + Sync + Clone {
    /// Estimate the central tendency from a sample
    fn estimate(&self, sample: &[T]) -> Result<T>;
}

/// Trait for two-sample estimators
///
/// The estimate describes how `sample2` differs from `sample1`
/// (e.g. a location shift `sample2 - sample1`).
pub trait TwoSampleEstimator<T: Float = f64>: EstimatorProperties + Send + Sync + Clone {
    /// Estimate the comparison between two samples
    fn estimate_two_sample(&self, sample1: &[T], sample2: &[T]) -> Result<T>;
}
