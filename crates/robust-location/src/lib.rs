//! Robust location and shift estimators
//!
//! This crate provides three distribution-free point estimators:
//!
//! - [`median`]: the sample median, by exact selection rather than sorting
//! - [`hle1`]: the one-sample Hodges-Lehmann estimator, the median of all
//!   Walsh averages `(x[i] + x[j]) / 2`
//! - [`hle2`]: the two-sample Hodges-Lehmann shift estimator, the median of
//!   all differences `b[j] - a[i]`
//!
//! # Estimator Properties
//!
//! | Estimator | Breakdown Point | Gaussian Efficiency | Derived Buffer |
//! |-----------|----------------|---------------------|----------------|
//! | Median | 50% | 64% | `n` |
//! | HL location | 29% | 95% | `n(n+1)/2` |
//! | HL shift | 29% | 95% | `|a|·|b|` |
//!
//! The Hodges-Lehmann estimators materialize their derived buffer, so each
//! input is capped by [`ExpansionConfig::max_sample_len`] (40 000 by
//! default) and rejected with `InputTooLarge` before anything is allocated.
//!
//! # Examples
//!
//! ```rust
//! use robust_location::{hle1, hle2, median};
//!
//! let control = [1.1, 0.9, 1.0, 1.2, 25.0];
//! let treated = [2.1, 1.8, 2.0, 2.3, 1.9];
//!
//! assert_eq!(median(&control).unwrap(), 1.1);
//! let location = hle1(&control).unwrap();
//! assert!(location < 2.0);
//! let shift = hle2(&control, &treated).unwrap();
//! assert!(shift > 0.5 && shift < 1.5);
//! ```
//!
//! ## Custom size guard
//!
//! ```rust
//! use robust_location::{hle1_with_config, ExecutionStrategy, ExpansionConfig};
//!
//! let config = ExpansionConfig::new()
//!     .with_max_sample_len(1_000)
//!     .with_strategy(ExecutionStrategy::Auto);
//! let too_long = vec![0.0; 1_001];
//! assert!(hle1_with_config(&too_long, &config).unwrap_err().is_too_large());
//! ```

pub mod api;
pub mod estimators;
pub mod selection;
pub mod shift;
pub mod walsh;

pub use api::{hle1, hle1_with_config, hle2, hle2_with_config, median};
pub use estimators::{
    hodges_lehmann, hodges_lehmann_shift, median_estimator, HodgesLehmann, HodgesLehmannShift,
    Median, HODGES_LEHMANN_BREAKDOWN,
};
pub use selection::{select_median, select_nth};
pub use shift::{expand_shift, shift_index, shift_len};
pub use walsh::{expand_walsh, walsh_index, walsh_len};

pub use robust_core::{
    CentralTendencyEstimator, Error, EstimatorProperties, ExecutionStrategy, ExpansionConfig,
    Result, TwoSampleEstimator, WalshPairs, DEFAULT_MAX_SAMPLE_LEN,
};
