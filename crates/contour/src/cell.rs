//! A single grid quad and the edge-crossing math shared by the isoline and
//! isoband engines.

use contour_common::{LineSegment, Point, Polygon, Sample};
use serde::{Deserialize, Serialize};

use crate::{isoband, isoline};

/// One of the four corners of a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// One of the four sides of a [`Cell`].
///
/// Each edge runs between two fixed corners; crossings are interpolated from
/// the first towards the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top left to top right
    Top,
    /// Top right to bottom right
    Right,
    /// Bottom left to bottom right
    Bottom,
    /// Top left to bottom left
    Left,
}

impl Edge {
    /// The corners this edge runs between, in interpolation order.
    pub fn endpoints(self) -> (Corner, Corner) {
        match self {
            Edge::Top => (Corner::TopLeft, Corner::TopRight),
            Edge::Right => (Corner::TopRight, Corner::BottomRight),
            Edge::Bottom => (Corner::BottomLeft, Corner::BottomRight),
            Edge::Left => (Corner::TopLeft, Corner::BottomLeft),
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Position along one axis where the value crosses `level`.
///
/// Linear in the corner values: `a + (level - fa) / (fb - fa) * (b - a)`.
/// Equal corner values have no unique crossing and yield the midpoint.
pub fn interpolate_crossing(a: f64, fa: f64, b: f64, fb: f64, level: f64) -> f64 {
    if fa == fb {
        return 0.5 * (a + b);
    }
    a + (level - fa) / (fb - fa) * (b - a)
}

/// The four corner samples of one grid quad.
///
/// "Top" is the larger y. For the cell at column `i`, row `j` of a grid the
/// corners are vertices `(i, j+1)`, `(i+1, j+1)`, `(i+1, j)` and `(i, j)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub top_left: Sample,
    pub top_right: Sample,
    pub bottom_right: Sample,
    pub bottom_left: Sample,
}

impl Cell {
    pub fn new(
        top_left: Sample,
        top_right: Sample,
        bottom_right: Sample,
        bottom_left: Sample,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn corner(&self, corner: Corner) -> &Sample {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::BottomLeft => &self.bottom_left,
        }
    }

    /// Location of a corner as a point.
    pub fn corner_point(&self, corner: Corner) -> Point {
        let s = self.corner(corner);
        Point::new(s.x, s.y)
    }

    /// Mean of the four corner values.
    ///
    /// Stands in for the value at the cell center when resolving saddles.
    /// This is an approximation of the bilinear center value, kept because
    /// it decides the topology of ambiguous cells.
    pub fn center_estimate(&self) -> f64 {
        0.25 * (self.top_left.f + self.top_right.f + self.bottom_right.f + self.bottom_left.f)
    }

    /// Point on `edge` where the interpolated value equals `level`.
    pub fn crossing(&self, edge: Edge, level: f64) -> Point {
        let (from, to) = edge.endpoints();
        let a = self.corner(from);
        let b = self.corner(to);

        if edge.is_horizontal() {
            Point::new(interpolate_crossing(a.x, a.f, b.x, b.f, level), a.y)
        } else {
            Point::new(a.x, interpolate_crossing(a.y, a.f, b.y, b.f, level))
        }
    }

    /// Isoline segments for `level` inside this cell.
    pub fn to_line_segments(&self, level: f64) -> Vec<LineSegment> {
        isoline::line_segments(self, level)
    }

    /// Polygons covering the part of this cell whose value lies in
    /// `[lower, upper]`.
    pub fn to_polygons(&self, lower: f64, upper: f64) -> Vec<Polygon> {
        isoband::band_polygons(self, lower, upper)
    }
}
