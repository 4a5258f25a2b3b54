//! Regular lattice specification for interpolated fields.

use crate::error::{ContourError, ContourResult};
use serde::{Deserialize, Serialize};

/// Specification of an axis-aligned rectangular lattice.
///
/// A grid of `x_cells` by `y_cells` cells has `(x_cells + 1) * (y_cells + 1)`
/// vertices. Vertex `(i, j)` sits at `(x_min + i * dx, y_min + j * dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// X coordinate of vertex column 0
    pub x_min: f64,
    /// Y coordinate of vertex row 0
    pub y_min: f64,
    /// Cell width
    pub dx: f64,
    /// Cell height
    pub dy: f64,
    /// Number of cells in X direction
    pub x_cells: usize,
    /// Number of cells in Y direction
    pub y_cells: usize,
}

impl GridSpec {
    /// Build a grid covering `[x_min, x_max] x [y_min, y_max]`.
    ///
    /// Fails if a bound is not finite, a minimum exceeds its maximum, or
    /// either cell count is zero.
    pub fn from_bounds(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        x_cells: usize,
        y_cells: usize,
    ) -> ContourResult<Self> {
        if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
            return Err(ContourError::invalid_input("grid bounds must be finite"));
        }
        if x_min > x_max {
            return Err(ContourError::invalid_input(format!(
                "xMin > xMax ({} > {})",
                x_min, x_max
            )));
        }
        if y_min > y_max {
            return Err(ContourError::invalid_input(format!(
                "yMin > yMax ({} > {})",
                y_min, y_max
            )));
        }
        if x_cells < 1 {
            return Err(ContourError::invalid_input("xCells < 1"));
        }
        if y_cells < 1 {
            return Err(ContourError::invalid_input("yCells < 1"));
        }

        Ok(Self {
            x_min,
            y_min,
            dx: (x_max - x_min) / x_cells as f64,
            dy: (y_max - y_min) / y_cells as f64,
            x_cells,
            y_cells,
        })
    }

    /// Number of vertex columns.
    pub fn x_vertices(&self) -> usize {
        self.x_cells + 1
    }

    /// Number of vertex rows.
    pub fn y_vertices(&self) -> usize {
        self.y_cells + 1
    }

    /// Total number of lattice vertices.
    pub fn vertex_count(&self) -> usize {
        self.x_vertices() * self.y_vertices()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.x_cells * self.y_cells
    }

    pub fn x_max(&self) -> f64 {
        self.x_min + self.x_cells as f64 * self.dx
    }

    pub fn y_max(&self) -> f64 {
        self.y_min + self.y_cells as f64 * self.dy
    }

    /// Coordinates of vertex `(i, j)`.
    pub fn vertex_coord(&self, i: usize, j: usize) -> (f64, f64) {
        (
            self.x_min + i as f64 * self.dx,
            self.y_min + j as f64 * self.dy,
        )
    }

    /// Index of vertex `(i, j)` in a flat value array.
    ///
    /// Values are stored column by column: all rows of column 0, then all
    /// rows of column 1, and so on.
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        i * self.y_vertices() + j
    }
}
