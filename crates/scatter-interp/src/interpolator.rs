//! Inverse-distance-weighted interpolation of scattered samples.

use std::time::Instant;

use contour::GridField;
use contour_common::{ContourError, ContourResult, GridSpec, Sample};
use rayon::prelude::*;

use crate::config::InterpolatorConfig;
use crate::spatial_index::SpatialIndex;

/// Added to squared distances so a query on top of a sample stays finite.
pub const DISTANCE_EPSILON: f64 = 1e-10;

/// Estimates values anywhere in the plane from a fixed set of samples.
///
/// Each estimate blends the `k` nearest samples with weights
/// `1 / (d^2 + 1e-10)`. The result stays finite for finite sample values
/// however far the query is from the samples.
#[derive(Debug, Clone)]
pub struct ScatteredInterpolator {
    index: SpatialIndex,
    config: InterpolatorConfig,
}

impl ScatteredInterpolator {
    /// Index `samples` with the default configuration.
    pub fn new(samples: &[Sample]) -> ContourResult<Self> {
        Self::from_config(samples, &InterpolatorConfig::default())
    }

    pub fn from_config(samples: &[Sample], config: &InterpolatorConfig) -> ContourResult<Self> {
        config.validate()?;
        let index = SpatialIndex::build(samples)?;
        log_sample_ranges(samples, &index);

        Ok(Self {
            index,
            config: *config,
        })
    }

    /// Blend `k` neighbors per estimate instead of the configured count.
    pub fn with_max_nearest(mut self, k: usize) -> ContourResult<Self> {
        if k == 0 {
            return Err(ContourError::invalid_config("max_nearest must be >= 1"));
        }
        self.config.max_nearest = k;
        Ok(self)
    }

    pub fn max_nearest(&self) -> usize {
        self.config.max_nearest
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// IDW estimate at `(x, y)`.
    pub fn interpolate_at(&self, x: f64, y: f64) -> ContourResult<f64> {
        let neighbors = self.index.nearest(x, y, self.config.max_nearest);
        if neighbors.is_empty() {
            return Err(ContourError::invalid_input(format!(
                "no samples near ({}, {})",
                x, y
            )));
        }

        let weights = relative_weights(&neighbors, x, y);
        let (weighted, total) = neighbors
            .iter()
            .zip(&weights)
            .fold((0.0, 0.0), |(num, den), (s, &w)| (num + w * s.f, den + w));

        let estimate = weighted / total;
        if estimate.is_finite() {
            Ok(estimate)
        } else {
            Ok(neighbors[0].f)
        }
    }

    /// Estimate every vertex of an `x_cells` by `y_cells` grid covering
    /// `[x_min, x_max] x [y_min, y_max]`.
    pub fn interpolate_grid(
        &self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        x_cells: usize,
        y_cells: usize,
    ) -> ContourResult<GridField> {
        let spec = GridSpec::from_bounds(x_min, x_max, y_min, y_max, x_cells, y_cells)?;
        let start = Instant::now();

        let column = |i: usize| -> ContourResult<Vec<f64>> {
            (0..spec.y_vertices())
                .map(|j| {
                    let (x, y) = spec.vertex_coord(i, j);
                    self.interpolate_at(x, y)
                })
                .collect()
        };

        // Values are column-major, so whole columns can be computed independently
        let columns: Vec<Vec<f64>> = if self.config.parallel {
            (0..spec.x_vertices())
                .into_par_iter()
                .map(column)
                .collect::<ContourResult<_>>()?
        } else {
            (0..spec.x_vertices())
                .map(column)
                .collect::<ContourResult<_>>()?
        };
        let values: Vec<f64> = columns.into_iter().flatten().collect();

        tracing::debug!(
            x_cells = x_cells,
            y_cells = y_cells,
            vertices = values.len(),
            max_nearest = self.config.max_nearest,
            parallel = self.config.parallel,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Interpolated grid"
        );

        GridField::new(spec, values)
    }
}

/// IDW weights divided by the weight of the nearest neighbor, so the
/// largest is 1 and none underflow when every neighbor is far away.
fn relative_weights(neighbors: &[Sample], x: f64, y: f64) -> Vec<f64> {
    let dist_sq: Vec<f64> = neighbors.iter().map(|s| s.distance_sq(x, y)).collect();
    let scale = dist_sq.iter().copied().fold(f64::INFINITY, f64::min) + DISTANCE_EPSILON;
    if scale.is_finite() {
        return dist_sq
            .iter()
            .map(|d| scale / (d + DISTANCE_EPSILON))
            .collect();
    }

    // Squared distances overflow; the epsilon is negligible at this scale
    let dist: Vec<f64> = neighbors.iter().map(|s| (s.x - x).hypot(s.y - y)).collect();
    let nearest = dist.iter().copied().fold(f64::INFINITY, f64::min);
    dist.iter().map(|d| (nearest / d).powi(2)).collect()
}

fn log_sample_ranges(samples: &[Sample], index: &SpatialIndex) {
    let range = |get: fn(&Sample) -> f64| {
        samples
            .iter()
            .map(get)
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    };
    let (x_min, x_max) = range(|s: &Sample| s.x);
    let (y_min, y_max) = range(|s: &Sample| s.y);
    let (f_min, f_max) = range(|s: &Sample| s.f);

    tracing::debug!(
        samples = samples.len(),
        indexed = index.len(),
        duplicates = index.duplicates_dropped(),
        non_finite = index.non_finite_dropped(),
        x_min,
        x_max,
        y_min,
        y_max,
        f_min,
        f_max,
        "Indexed scattered samples"
    );
}
