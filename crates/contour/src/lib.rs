//! Contour extraction from gridded scalar fields.
//!
//! Implements generalized marching squares:
//! - Isolines: 16-case table, one threshold
//! - Isobands: 81-case table, a lower and an upper threshold
//! - Saddle cells resolved from the mean of the corner values

pub mod cell;
pub mod color;
pub mod config;
pub mod grid_field;
pub mod isoband;
pub mod isoline;
pub mod levels;

pub use cell::{Cell, Corner, Edge};
pub use color::{Color, ColorMapper, ColoredPolygon, JetColorMapper, TableColorMapper};
pub use config::ExtractionConfig;
pub use grid_field::{GridField, IsoBand};
pub use isoband::{BandBin, BandCase, BandShape};
pub use isoline::LineCase;
