//! Error types for interpolation and contour extraction.

use thiserror::Error;

/// Result type alias using ContourError.
pub type ContourResult<T> = Result<T, ContourError>;

/// Primary error type for isoplot operations.
///
/// Only caller mistakes are represented here. Duplicate samples are
/// logged and skipped, and an unknown marching-squares case is a bug
/// that panics instead of surfacing as a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContourError {
    /// Bad arguments: empty sample sets, inverted bounds, zero grid
    /// resolution, a color range narrower than the level range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ContourError {
    /// Create an InvalidInput error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Short machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ContourError::InvalidInput(_) => "InvalidInput",
            ContourError::InvalidConfig(_) => "InvalidConfig",
        }
    }
}
