//! Common test fixtures for contouring and interpolation tests.

use contour_common::{Polygon, Sample};

/// Common `(x_min, x_max, y_min, y_max)` extents for testing.
pub mod bounds {
    /// The unit square
    pub const UNIT: (f64, f64, f64, f64) = (0.0, 1.0, 0.0, 1.0);

    /// Square centered on the origin
    pub const CENTERED: (f64, f64, f64, f64) = (-4.0, 4.0, -4.0, 4.0);

    /// Wide, flat extent
    pub const WIDE: (f64, f64, f64, f64) = (0.0, 100.0, 0.0, 10.0);
}

/// Corner samples of the unit cell, in top-left, top-right, bottom-right,
/// bottom-left order.
pub fn unit_cell_samples(tl: f64, tr: f64, br: f64, bl: f64) -> [Sample; 4] {
    [
        Sample::new(0.0, 1.0, tl),
        Sample::new(1.0, 1.0, tr),
        Sample::new(1.0, 0.0, br),
        Sample::new(0.0, 0.0, bl),
    ]
}

/// Four samples at the corners of the unit square; every one is the same
/// distance from the center.
pub fn equal_distance_samples() -> Vec<Sample> {
    vec![
        Sample::new(0.0, 0.0, 0.0),
        Sample::new(1.0, 0.0, 10.0),
        Sample::new(0.0, 1.0, 10.0),
        Sample::new(1.0, 1.0, 20.0),
    ]
}

/// Sum of the unsigned areas of `polygons`.
pub fn total_area<'a>(polygons: impl IntoIterator<Item = &'a Polygon>) -> f64 {
    polygons.into_iter().map(Polygon::area).sum()
}
