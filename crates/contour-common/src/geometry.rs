//! Geometry primitives produced and consumed by the contouring engine.
//!
//! Everything here is in model (data) coordinates. Transforming to screen
//! space is left to the caller.

use serde::{Deserialize, Serialize};

/// A scattered input sample: the value `f` observed at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub f: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, f: f64) -> Self {
        Self { x, y, f }
    }

    /// Squared Euclidean distance from this sample to `(x, y)`.
    pub fn distance_sq(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One isoline crossing through a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

/// A closed polygon bounding one cell's share of one value band.
///
/// The closing edge (last vertex back to the first) is implicit. Vertex
/// order comes from the isoband case table and is not normalized to a
/// particular winding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice_area = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            twice_area += p.x * q.y - q.x * p.y;
        }
        0.5 * twice_area
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// A value interval `[lower, upper]` between two adjacent levels.
///
/// The outermost bands of a level set use `-inf` and `+inf` as bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square_area() {
        let square = Polygon::new(vec![
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ]);
        // Clockwise order gives a negative signed area
        assert!((square.signed_area() + 1.0).abs() < 1e-12);
        assert!((square.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_polygon_has_no_area() {
        let line = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(line.area(), 0.0);
        assert!(Polygon::default().is_empty());
    }

    #[test]
    fn test_segment_length() {
        let seg = LineSegment::new(0.0, 0.0, 3.0, 4.0);
        assert!((seg.length() - 5.0).abs() < 1e-12);
        assert_eq!(seg.start(), Point::new(0.0, 0.0));
        assert_eq!(seg.end(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_band_contains_is_inclusive() {
        let band = Band::new(2.0, 4.0);
        assert!(band.contains(2.0));
        assert!(band.contains(4.0));
        assert!(!band.contains(4.5));
        assert!(band.is_bounded());
        assert!(!Band::new(f64::NEG_INFINITY, 2.0).is_bounded());
    }

    #[test]
    fn test_sample_serializes_to_json() {
        let sample = Sample::new(1.0, 2.0, 3.5);
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"f":3.5}"#);
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }
}
