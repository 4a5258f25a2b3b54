//! Common types shared across the isoplot crates.

pub mod error;
pub mod geometry;
pub mod grid;

pub use error::{ContourError, ContourResult};
pub use geometry::{Band, LineSegment, Point, Polygon, Sample};
pub use grid::GridSpec;
