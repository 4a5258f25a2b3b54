//! Scattered-data interpolation onto regular grids.
//!
//! Samples are indexed in a 2D k-d tree and blended with inverse distance
//! weighting over their nearest neighbors. The resulting [`GridField`]
//! feeds straight into isoline and isoband extraction.
//!
//! [`GridField`]: contour::GridField

pub mod config;
pub mod interpolator;
pub mod spatial_index;

pub use config::{InterpolatorConfig, DEFAULT_MAX_NEAREST};
pub use interpolator::{ScatteredInterpolator, DISTANCE_EPSILON};
pub use spatial_index::SpatialIndex;
