//! Estimator types backing the free-function API

use crate::selection::select_median;
use crate::shift::expand_shift;
use crate::walsh::expand_walsh;
use num_traits::Float;
use robust_core::{
    CentralTendencyEstimator, Error, EstimatorProperties, ExpansionConfig, Result,
    TwoSampleEstimator,
};
use tracing::instrument;

/// Asymptotic breakdown point of both Hodges-Lehmann estimators, `1 - 1/√2`
pub const HODGES_LEHMANN_BREAKDOWN: f64 = 1.0 - std::f64::consts::FRAC_1_SQRT_2;

/// Sample median by exact selection
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Median {
    /// Create a new median estimator
    pub fn new() -> Self {
        Self
    }
}

impl EstimatorProperties for Median {
    fn name(&self) -> &str {
        "Median"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

impl<T: Float + Send + Sync> CentralTendencyEstimator<T> for Median {
    #[instrument(level = "debug", skip_all, fields(n = sample.len()))]
    fn estimate(&self, sample: &[T]) -> Result<T> {
        if sample.is_empty() {
            return Err(Error::empty_input("median"));
        }
        let mut scratch = sample.to_vec();
        select_median(&mut scratch)
    }
}

/// One-sample Hodges-Lehmann location estimator
///
/// The median of all Walsh averages of the sample. Whether self-pairs
/// `(x[i] + x[i]) / 2` take part is set by [`ExpansionConfig::walsh_pairs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HodgesLehmann {
    config: ExpansionConfig,
}

impl HodgesLehmann {
    /// Create an estimator with a validated configuration
    pub fn new(config: ExpansionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this estimator expands with
    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }
}

impl EstimatorProperties for HodgesLehmann {
    fn name(&self) -> &str {
        "Hodges-Lehmann"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        HODGES_LEHMANN_BREAKDOWN
    }
}

impl<T: Float + Send + Sync> CentralTendencyEstimator<T> for HodgesLehmann {
    #[instrument(level = "debug", skip_all, fields(n = sample.len()))]
    fn estimate(&self, sample: &[T]) -> Result<T> {
        if sample.is_empty() {
            return Err(Error::empty_input("Hodges-Lehmann estimate"));
        }
        let mut averages = expand_walsh(sample, &self.config)?;
        if averages.is_empty() {
            // A single value has no distinct pair to average
            return Err(Error::empty_input("Hodges-Lehmann estimate"));
        }
        select_median(&mut averages)
    }
}

/// Two-sample Hodges-Lehmann shift estimator
///
/// The median of all differences `sample2[j] - sample1[i]`: a positive
/// estimate means the second sample sits higher.
#[derive(Debug, Clone, Copy, Default)]
pub struct HodgesLehmannShift {
    config: ExpansionConfig,
}

impl HodgesLehmannShift {
    /// Create an estimator with a validated configuration
    pub fn new(config: ExpansionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this estimator expands with
    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }
}

impl EstimatorProperties for HodgesLehmannShift {
    fn name(&self) -> &str {
        "Hodges-Lehmann Shift"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        HODGES_LEHMANN_BREAKDOWN
    }
}

impl<T: Float + Send + Sync> TwoSampleEstimator<T> for HodgesLehmannShift {
    #[instrument(level = "debug", skip_all, fields(n1 = sample1.len(), n2 = sample2.len()))]
    fn estimate_two_sample(&self, sample1: &[T], sample2: &[T]) -> Result<T> {
        if sample1.is_empty() || sample2.is_empty() {
            return Err(Error::empty_input("Hodges-Lehmann shift"));
        }
        let mut differences = expand_shift(sample1, sample2, &self.config)?;
        select_median(&mut differences)
    }
}

/// Create the median estimator
pub fn median_estimator() -> Median {
    Median::new()
}

/// Create a one-sample Hodges-Lehmann estimator
pub fn hodges_lehmann(config: ExpansionConfig) -> Result<HodgesLehmann> {
    HodgesLehmann::new(config)
}

/// Create a two-sample Hodges-Lehmann shift estimator
pub fn hodges_lehmann_shift(config: ExpansionConfig) -> Result<HodgesLehmannShift> {
    HodgesLehmannShift::new(config)
}
