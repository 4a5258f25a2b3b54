//! Test data generators for synthetic scattered samples and fields.
//!
//! These generators create predictable, verifiable data patterns that can
//! be used across the test suite and benchmarks.

use contour_common::{GridSpec, Sample};

/// Analytic test surfaces.
pub mod surfaces {
    /// Tilted plane `x + 2y`. Has no saddles anywhere.
    pub fn plane(x: f64, y: f64) -> f64 {
        x + 2.0 * y
    }

    /// Bowl `x^2 + y^2` centered on the origin.
    pub fn paraboloid(x: f64, y: f64) -> f64 {
        x * x + y * y
    }

    /// Gaussian bump of height 1 at the origin.
    pub fn gaussian_bump(x: f64, y: f64) -> f64 {
        (-(x * x + y * y) / 8.0).exp()
    }

    /// Alternating hills and pits; full of saddle cells on a coarse grid.
    pub fn egg_crate(x: f64, y: f64) -> f64 {
        x.sin() * y.cos()
    }
}

/// Creates field values for every vertex of `spec`.
///
/// Values are laid out column by column, matching `GridSpec::flat_index`.
///
/// # Example
///
/// ```
/// use contour_common::GridSpec;
/// use test_utils::create_field_values;
///
/// let spec = GridSpec::from_bounds(0.0, 2.0, 0.0, 1.0, 2, 1).unwrap();
/// let values = create_field_values(&spec, |x, y| x * 10.0 + y);
/// assert_eq!(values, vec![0.0, 1.0, 10.0, 11.0, 20.0, 21.0]);
/// ```
pub fn create_field_values(spec: &GridSpec, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(spec.vertex_count());
    for i in 0..spec.x_vertices() {
        for j in 0..spec.y_vertices() {
            let (x, y) = spec.vertex_coord(i, j);
            values.push(f(x, y));
        }
    }
    values
}

/// Creates samples on a regular `nx` by `ny` lattice covering `bounds`.
///
/// `bounds` is `(x_min, x_max, y_min, y_max)`; both counts must be at least 2.
pub fn create_lattice_samples(
    nx: usize,
    ny: usize,
    bounds: (f64, f64, f64, f64),
    f: impl Fn(f64, f64) -> f64,
) -> Vec<Sample> {
    let (x_min, x_max, y_min, y_max) = bounds;
    let dx = (x_max - x_min) / (nx - 1) as f64;
    let dy = (y_max - y_min) / (ny - 1) as f64;

    let mut samples = Vec::with_capacity(nx * ny);
    for i in 0..nx {
        for j in 0..ny {
            let x = x_min + i as f64 * dx;
            let y = y_min + j as f64 * dy;
            samples.push(Sample::new(x, y, f(x, y)));
        }
    }
    samples
}

/// Creates `n` pseudo-random but deterministic samples inside `bounds`.
///
/// Same seed, same samples.
pub fn create_scattered_samples(
    n: usize,
    bounds: (f64, f64, f64, f64),
    seed: u32,
    f: impl Fn(f64, f64) -> f64,
) -> Vec<Sample> {
    let (x_min, x_max, y_min, y_max) = bounds;
    (0..n as u32)
        .map(|k| {
            let x = x_min + unit_hash(k, 0, seed) * (x_max - x_min);
            let y = y_min + unit_hash(k, 1, seed) * (y_max - y_min);
            Sample::new(x, y, f(x, y))
        })
        .collect()
}

/// Hash mapped into `[0, 1)`.
fn unit_hash(x: u32, y: u32, seed: u32) -> f64 {
    simple_hash(x, y, seed) as f64 / (u32::MAX as f64 + 1.0)
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
