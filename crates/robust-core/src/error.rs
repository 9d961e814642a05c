//! Error types for robust location estimation
//!
//! Provides a unified error type for all workspace crates.

use thiserror::Error;

/// Core error type for robust location operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The statistic is undefined for zero observations
    #[error("Empty input: the {operation} of an empty sample is undefined")]
    EmptyInput { operation: &'static str },

    /// The combinatorial expansion would exceed the configured size guard
    #[error("Input too large: sample of length {len} exceeds the maximum of {max}")]
    InputTooLarge { len: usize, max: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create an error for a sample exceeding the size guard
    pub fn too_large(len: usize, max: usize) -> Self {
        Self::InputTooLarge { len, max }
    }

    /// Whether this error reports an empty sample
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    /// Whether this error reports an oversized sample
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::InputTooLarge { .. })
    }
}
