//! Configuration for the scattered-data interpolator.

use contour_common::{ContourError, ContourResult};
use serde::{Deserialize, Serialize};

/// Default number of neighbors blended per estimate.
pub const DEFAULT_MAX_NEAREST: usize = 6;

/// Configuration for the IDW interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolatorConfig {
    /// Number of nearest samples blended into each estimate.
    pub max_nearest: usize,

    /// Evaluate grid columns on the rayon thread pool.
    pub parallel: bool,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            max_nearest: DEFAULT_MAX_NEAREST,
            parallel: true,
        }
    }
}

impl InterpolatorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source; missing or unparsable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("IDW_MAX_NEAREST") {
            if let Ok(k) = val.parse() {
                config.max_nearest = k;
            }
        }

        if let Some(val) = lookup("IDW_PARALLEL") {
            config.parallel = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ContourResult<()> {
        if self.max_nearest == 0 {
            return Err(ContourError::invalid_config("max_nearest must be >= 1"));
        }

        Ok(())
    }
}
