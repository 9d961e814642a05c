//! Core traits and types for robust location estimation
//!
//! This crate provides the pieces shared by every estimator in the
//! workspace:
//!
//! - [`Error`] / [`Result`]: the typed failure modes (empty input, size
//!   guard exceeded, bad configuration)
//! - [`ExpansionConfig`]: the read-only size guard and execution settings
//!   for combinatorial expansions
//! - [`CentralTendencyEstimator`] and [`TwoSampleEstimator`]: the seams
//!   estimators plug into
//! - [`utils`]: NaN-aware ordering helpers
//!
//! # Example
//!
//! ```rust
//! use robust_core::{ExpansionConfig, WalshPairs};
//!
//! let config = ExpansionConfig::new()
//!     .with_max_sample_len(10_000)
//!     .with_walsh_pairs(WalshPairs::IncludeSelf);
//! assert!(config.validate().is_ok());
//! assert!(config.check_len(10_001).is_err());
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod traits;
pub mod utils;

// Re-export core types
pub use config::{ExpansionConfig, WalshPairs, DEFAULT_CONFIG, DEFAULT_MAX_SAMPLE_LEN};
pub use error::{Error, Result};
pub use execution::{ExecutionStrategy, PARALLEL_THRESHOLD};
pub use traits::{CentralTendencyEstimator, EstimatorProperties, TwoSampleEstimator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CentralTendencyEstimator, Error, EstimatorProperties, ExecutionStrategy, ExpansionConfig,
        Result, TwoSampleEstimator, WalshPairs,
    };
}
