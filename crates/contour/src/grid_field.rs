//! A scalar field sampled on a regular lattice, and extraction of isolines
//! and isobands from it.

use std::time::Instant;

use contour_common::{
    Band, ContourError, ContourResult, GridSpec, LineSegment, Polygon, Sample,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::color::{ColorMapper, ColoredPolygon};
use crate::config::ExtractionConfig;
use crate::levels;

/// One polygon of an isoband, tagged with its band and color key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsoBand {
    pub polygon: Polygon,
    /// Normalized position of the band within the color range, in `[0, 1]`
    pub key: f64,
    pub band: Band,
}

/// Immutable scalar values on the vertices of a [`GridSpec`].
///
/// Values are stored column by column (see [`GridSpec::flat_index`]).
#[derive(Debug, Clone)]
pub struct GridField {
    spec: GridSpec,
    values: Vec<f64>,
    f_min: f64,
    f_max: f64,
    config: ExtractionConfig,
}

impl GridField {
    /// Wrap `values` as a field over `spec`.
    ///
    /// The value count must match the lattice and every value must be finite.
    pub fn new(spec: GridSpec, values: Vec<f64>) -> ContourResult<Self> {
        if spec.x_cells < 1 || spec.y_cells < 1 {
            return Err(ContourError::invalid_input(format!(
                "grid must have at least one cell, got {}x{}",
                spec.x_cells, spec.y_cells
            )));
        }
        if values.len() != spec.vertex_count() {
            return Err(ContourError::invalid_input(format!(
                "expected {} values for a {}x{} grid, got {}",
                spec.vertex_count(),
                spec.x_cells,
                spec.y_cells,
                values.len()
            )));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(ContourError::invalid_input(format!(
                "field value at index {} is not finite",
                pos
            )));
        }

        let (f_min, f_max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Ok(Self {
            spec,
            values,
            f_min,
            f_max,
            config: ExtractionConfig::default(),
        })
    }

    /// Use `config` to decide how extraction is scheduled.
    pub fn with_config(mut self, config: ExtractionConfig) -> ContourResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn f_min(&self) -> f64 {
        self.f_min
    }

    pub fn f_max(&self) -> f64 {
        self.f_max
    }

    /// Value at vertex `(i, j)`.
    ///
    /// # Panics
    /// If `i > x_cells` or `j > y_cells`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.spec.x_vertices() && j < self.spec.y_vertices(),
            "vertex ({}, {}) outside {}x{} lattice",
            i,
            j,
            self.spec.x_vertices(),
            self.spec.y_vertices()
        );
        self.values[self.spec.flat_index(i, j)]
    }

    fn sample(&self, i: usize, j: usize) -> Sample {
        let (x, y) = self.spec.vertex_coord(i, j);
        Sample::new(x, y, self.value(i, j))
    }

    /// The cell whose bottom-left corner is vertex `(i, j)`.
    pub fn cell(&self, i: usize, j: usize) -> Cell {
        Cell::new(
            self.sample(i, j + 1),
            self.sample(i + 1, j + 1),
            self.sample(i + 1, j),
            self.sample(i, j),
        )
    }

    /// Every cell, columns outer and rows inner.
    pub fn to_cells(&self) -> Vec<Cell> {
        (0..self.spec.cell_count()).map(|k| self.nth_cell(k)).collect()
    }

    fn nth_cell(&self, k: usize) -> Cell {
        let y_cells = self.spec.y_cells;
        self.cell(k / y_cells, k % y_cells)
    }

    /// `n` evenly spaced levels strictly inside `[f_min, f_max]`.
    pub fn auto_levels(&self, n: usize) -> Vec<f64> {
        levels::auto_levels(self.f_min, self.f_max, n)
    }

    /// Run `f` on every cell and concatenate the results in cell order.
    fn flat_map_cells<T, F>(&self, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&Cell) -> Vec<T> + Sync + Send,
    {
        let count = self.spec.cell_count();
        if self.config.use_parallel(count) {
            (0..count)
                .into_par_iter()
                .map(|k| f(&self.nth_cell(k)))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            (0..count).flat_map(|k| f(&self.nth_cell(k))).collect()
        }
    }

    /// Isoline segments for each level, in level order then cell order.
    pub fn to_iso_lines(&self, levels: &[f64]) -> Vec<LineSegment> {
        let start = Instant::now();

        let segments: Vec<LineSegment> = levels
            .iter()
            .flat_map(|&level| self.flat_map_cells(|cell| cell.to_line_segments(level)))
            .collect();

        tracing::debug!(
            levels = levels.len(),
            cells = self.spec.cell_count(),
            segments = segments.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Extracted isolines"
        );

        segments
    }

    pub fn to_auto_iso_lines(&self, n: usize) -> Vec<LineSegment> {
        self.to_iso_lines(&self.auto_levels(n))
    }

    /// Isoband polygons for the bands between `levels`, colored over
    /// `[range_min, range_max]`.
    ///
    /// Bands run from `-inf` to the lowest level and from the highest level
    /// to `+inf` at the ends. Output is grouped by band, lowest first.
    pub fn to_iso_bands(
        &self,
        levels: &[f64],
        range_min: f64,
        range_max: f64,
    ) -> ContourResult<Vec<IsoBand>> {
        levels::validate_band_request(levels, range_min, range_max)?;
        let start = Instant::now();

        let bands = levels::bands(levels);
        let keys = levels::color_keys(levels, range_min, range_max);

        let mut out = Vec::new();
        for (band, key) in bands.into_iter().zip(keys) {
            let polygons = self.flat_map_cells(|cell| cell.to_polygons(band.lower, band.upper));
            out.extend(
                polygons
                    .into_iter()
                    .map(|polygon| IsoBand { polygon, key, band }),
            );
        }

        tracing::debug!(
            levels = levels.len(),
            range_min = range_min,
            range_max = range_max,
            cells = self.spec.cell_count(),
            polygons = out.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Extracted isobands"
        );

        Ok(out)
    }

    pub fn to_auto_iso_bands(
        &self,
        n: usize,
        range_min: f64,
        range_max: f64,
    ) -> ContourResult<Vec<IsoBand>> {
        self.to_iso_bands(&self.auto_levels(n), range_min, range_max)
    }

    /// Isobands colored over the field's own value range.
    pub fn to_iso_bands_over_data_range(&self, levels: &[f64]) -> ContourResult<Vec<IsoBand>> {
        self.to_iso_bands(levels, self.f_min, self.f_max)
    }

    /// Isobands with each color key resolved through `mapper`.
    pub fn to_colored_iso_bands(
        &self,
        levels: &[f64],
        range_min: f64,
        range_max: f64,
        mapper: &dyn ColorMapper,
    ) -> ContourResult<Vec<ColoredPolygon>> {
        let bands = self.to_iso_bands(levels, range_min, range_max)?;
        Ok(bands
            .into_iter()
            .map(|band| ColoredPolygon {
                color: mapper.map(band.key),
                polygon: band.polygon,
            })
            .collect())
    }
}
