//! Configuration for isoline and isoband extraction.

use contour_common::{ContourError, ContourResult};
use serde::{Deserialize, Serialize};

/// Configuration for extracting geometry from a [`GridField`](crate::GridField).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Spread per-cell work over the rayon thread pool.
    pub parallel: bool,

    /// Smallest cell count for which the parallel path is taken.
    pub parallel_min_cells: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_min_cells: 4096,
        }
    }
}

impl ExtractionConfig {
    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source; missing or unparsable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("CONTOUR_PARALLEL") {
            config.parallel = val.to_lowercase() == "true" || val == "1";
        }

        if let Some(val) = lookup("CONTOUR_PARALLEL_MIN_CELLS") {
            if let Ok(cells) = val.parse() {
                config.parallel_min_cells = cells;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ContourResult<()> {
        if self.parallel_min_cells == 0 {
            return Err(ContourError::invalid_config(
                "parallel_min_cells must be > 0",
            ));
        }

        Ok(())
    }

    /// Whether a grid with `cell_count` cells should be processed in parallel.
    pub fn use_parallel(&self, cell_count: usize) -> bool {
        self.parallel && cell_count >= self.parallel_min_cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = ExtractionConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_min_cells, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = ExtractionConfig {
            parallel: true,
            parallel_min_cells: 0,
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "InvalidConfig");
    }

    #[test]
    fn test_use_parallel_threshold() {
        let config = ExtractionConfig {
            parallel: true,
            parallel_min_cells: 100,
        };
        assert!(!config.use_parallel(99));
        assert!(config.use_parallel(100));
        assert!(!ExtractionConfig::sequential().use_parallel(1_000_000));
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CONTOUR_PARALLEL", "FALSE"),
            ("CONTOUR_PARALLEL_MIN_CELLS", "128"),
        ]
        .into_iter()
        .collect();
        let config = ExtractionConfig::from_lookup(|key| {
            vars.get(key).map(|v| v.to_string())
        });
        assert!(!config.parallel);
        assert_eq!(config.parallel_min_cells, 128);
    }

    #[test]
    fn test_lookup_ignores_bad_values() {
        let config = ExtractionConfig::from_lookup(|key| match key {
            "CONTOUR_PARALLEL_MIN_CELLS" => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(config, ExtractionConfig::default());

        let zero = ExtractionConfig::from_lookup(|key| match key {
            "CONTOUR_PARALLEL_MIN_CELLS" => Some("0".to_string()),
            _ => None,
        });
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_from_env() {
        // Only this test touches these variables
        std::env::set_var("CONTOUR_PARALLEL", "1");
        std::env::set_var("CONTOUR_PARALLEL_MIN_CELLS", "64");
        let config = ExtractionConfig::from_env();
        std::env::remove_var("CONTOUR_PARALLEL");
        std::env::remove_var("CONTOUR_PARALLEL_MIN_CELLS");

        assert!(config.parallel);
        assert_eq!(config.parallel_min_cells, 64);
    }
}
