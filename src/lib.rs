//! Robust location and shift estimation
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`robust_core`]: errors, estimator traits and the expansion size guard
//! - [`robust_location`]: median, Hodges-Lehmann location and shift estimators
//!
//! # Example
//!
//! ```rust
//! use robust_hodges_lehmann::prelude::*;
//!
//! let before = [12.1, 11.8, 12.4, 12.0, 30.0];
//! let after = [10.9, 11.2, 11.0, 10.7, 11.1];
//!
//! let centre = hle1(&before).unwrap();
//! let shift = hle2(&before, &after).unwrap();
//! assert!(centre < 13.0);
//! assert!(shift < 0.0);
//! ```

pub use robust_core;
pub use robust_location;

pub use robust_location::{hle1, hle2, median};

/// Prelude module for convenient imports
pub mod prelude {
    pub use robust_core::prelude::*;
    pub use robust_location::{
        hle1, hle1_with_config, hle2, hle2_with_config, median, HodgesLehmann,
        HodgesLehmannShift, Median,
    };
}
