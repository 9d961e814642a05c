//! Configuration for combinatorial expansions
//!
//! The Hodges-Lehmann estimators expand a sample of length `n` into roughly
//! `n²/2` Walsh averages, or two samples into `|a|·|b|` differences. The
//! size guard caps the length of each input so that the derived buffer
//! stays inside the deployment's memory budget: with the default of 40 000,
//! a shift expansion holds at most 1.6×10⁹ values (12.8 GB of `f64`) and a
//! Walsh expansion about half that.

use crate::error::{Error, Result};
use crate::execution::ExecutionStrategy;

/// Default maximum length of any single input sample
pub const DEFAULT_MAX_SAMPLE_LEN: usize = 40_000;

/// Default configuration, shared read-only by the free-function API
pub const DEFAULT_CONFIG: ExpansionConfig = ExpansionConfig {
    max_sample_len: DEFAULT_MAX_SAMPLE_LEN,
    walsh_pairs: WalshPairs::IncludeSelf,
    strategy: ExecutionStrategy::Sequential,
};

/// Which index pairs contribute to the Walsh expansion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalshPairs {
    /// All pairs `i <= j`, giving `n(n+1)/2` averages
    #[default]
    IncludeSelf,
    /// Only pairs `i < j`, giving `n(n-1)/2` averages
    ExcludeSelf,
}

impl WalshPairs {
    /// Whether `i == j` pairs are part of the expansion
    pub fn includes_self(self) -> bool {
        matches!(self, Self::IncludeSelf)
    }
}

/// Size guard and execution settings for the expanders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionConfig {
    /// Maximum accepted length of each input sample
    pub max_sample_len: usize,
    /// Self-pair convention for the one-sample estimator
    pub walsh_pairs: WalshPairs,
    /// How expansion loops are executed
    pub strategy: ExecutionStrategy,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl ExpansionConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size guard
    pub fn with_max_sample_len(mut self, max_sample_len: usize) -> Self {
        self.max_sample_len = max_sample_len;
        self
    }

    /// Set the self-pair convention
    pub fn with_walsh_pairs(mut self, walsh_pairs: WalshPairs) -> Self {
        self.walsh_pairs = walsh_pairs;
        self
    }

    /// Set the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check that the configuration describes a usable size guard
    ///
    /// The guard must be positive and `max_sample_len²` must be
    /// representable as a buffer length.
    pub fn validate(&self) -> Result<()> {
        if self.max_sample_len == 0 {
            return Err(Error::InvalidParameter(
                "max_sample_len must be positive".to_string(),
            ));
        }
        if self.max_sample_len.checked_mul(self.max_sample_len).is_none() {
            return Err(Error::InvalidParameter(format!(
                "max_sample_len {} squared overflows the addressable buffer length",
                self.max_sample_len
            )));
        }
        Ok(())
    }

    /// Reject a sample length above the size guard
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len > self.max_sample_len {
            return Err(Error::too_large(len, self.max_sample_len));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExpansionConfig::default();
        assert_eq!(config.max_sample_len, 40_000);
        assert_eq!(config.walsh_pairs, WalshPairs::IncludeSelf);
        assert_eq!(config.strategy, ExecutionStrategy::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = ExpansionConfig::new()
            .with_max_sample_len(10)
            .with_walsh_pairs(WalshPairs::ExcludeSelf)
            .with_strategy(ExecutionStrategy::Auto);
        assert_eq!(config.max_sample_len, 10);
        assert!(!config.walsh_pairs.includes_self());
        assert_eq!(config.strategy, ExecutionStrategy::Auto);
    }

    #[test]
    fn test_check_len_boundary() {
        let config = ExpansionConfig::new().with_max_sample_len(5);
        assert!(config.check_len(0).is_ok());
        assert!(config.check_len(5).is_ok());
        assert_eq!(
            config.check_len(6),
            Err(Error::InputTooLarge { len: 6, max: 5 })
        );
    }

    #[test]
    fn test_validate_rejects_bad_guards() {
        let zero = ExpansionConfig::new().with_max_sample_len(0);
        assert!(matches!(zero.validate(), Err(Error::InvalidParameter(_))));

        let huge = ExpansionConfig::new().with_max_sample_len(usize::MAX);
        assert!(matches!(huge.validate(), Err(Error::InvalidParameter(_))));
    }
}
