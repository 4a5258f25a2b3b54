//! Marching squares over a value band (isobands).
//!
//! Every corner is placed in one of three bins relative to `[lower, upper]`,
//! giving 81 cases. Each case maps to a fixed list of polygons whose vertices
//! are cell corners or edge crossings at one of the two thresholds. Saddle
//! cases carry alternative outlines and pick one from the bin of the cell's
//! center estimate.

use contour_common::{Point, Polygon};

use crate::cell::{Cell, Corner, Edge};

/// Where a value lies relative to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandBin {
    Below = 0,
    Within = 1,
    Above = 2,
}

impl BandBin {
    /// Bin of `value` for the band `[lower, upper]` (both ends inclusive).
    pub fn classify(value: f64, lower: f64, upper: f64) -> Self {
        if value < lower {
            BandBin::Below
        } else if value > upper {
            BandBin::Above
        } else {
            BandBin::Within
        }
    }
}

/// Which of the two band thresholds an edge crossing is taken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threshold {
    Lower,
    Upper,
}

/// A polygon vertex: a cell corner or the crossing of an edge at a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    Corner(Corner),
    Cut(Edge, Threshold),
}

impl Vertex {
    fn resolve(self, cell: &Cell, lower: f64, upper: f64) -> Point {
        match self {
            Vertex::Corner(corner) => cell.corner_point(corner),
            Vertex::Cut(edge, Threshold::Lower) => cell.crossing(edge, lower),
            Vertex::Cut(edge, Threshold::Upper) => cell.crossing(edge, upper),
        }
    }
}

const TL: Vertex = Vertex::Corner(Corner::TopLeft);
const TR: Vertex = Vertex::Corner(Corner::TopRight);
const BR: Vertex = Vertex::Corner(Corner::BottomRight);
const BL: Vertex = Vertex::Corner(Corner::BottomLeft);
const T_LO: Vertex = Vertex::Cut(Edge::Top, Threshold::Lower);
const T_UP: Vertex = Vertex::Cut(Edge::Top, Threshold::Upper);
const R_LO: Vertex = Vertex::Cut(Edge::Right, Threshold::Lower);
const R_UP: Vertex = Vertex::Cut(Edge::Right, Threshold::Upper);
const B_LO: Vertex = Vertex::Cut(Edge::Bottom, Threshold::Lower);
const B_UP: Vertex = Vertex::Cut(Edge::Bottom, Threshold::Upper);
const L_LO: Vertex = Vertex::Cut(Edge::Left, Threshold::Lower);
const L_UP: Vertex = Vertex::Cut(Edge::Left, Threshold::Upper);

/// Vertex lists of the polygons one case produces.
pub type Outlines = &'static [&'static [Vertex]];

/// Geometric family of an isoband case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandShape {
    /// All corners on the same side, outside the band
    Empty,
    /// One corner in the band
    Triangle,
    /// The band crosses one corner's neighborhood at both thresholds
    Trapezoid,
    /// Two adjacent corners in the band, or a strip between two parallel cuts
    Rectangle,
    /// All four corners in the band
    Square,
    Pentagon,
    Hexagon,
    /// Ambiguous: the outline depends on the center estimate
    Saddle,
}

#[derive(Debug, Clone, Copy)]
enum CaseGeometry {
    Fixed(BandShape, Outlines),
    Saddle {
        below: Outlines,
        within: Outlines,
        above: Outlines,
    },
}

fn fixed(shape: BandShape, outlines: Outlines) -> CaseGeometry {
    CaseGeometry::Fixed(shape, outlines)
}

/// Saddle with one joined outline when the center is in the band and the
/// same disjoint pieces whether it lies below or above.
fn saddle(apart: Outlines, joined: Outlines) -> CaseGeometry {
    CaseGeometry::Saddle {
        below: apart,
        within: joined,
        above: apart,
    }
}

/// Saddle whose two opposite corners sit in different outer bins, so the
/// disjoint pieces differ for a center below and above the band.
fn octagon_saddle(below: Outlines, within: Outlines, above: Outlines) -> CaseGeometry {
    CaseGeometry::Saddle {
        below,
        within,
        above,
    }
}

/// Case index of a cell against a band: `27*TL + 9*TR + 3*BR + BL` over bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandCase(u8);

impl BandCase {
    pub fn classify(cell: &Cell, lower: f64, upper: f64) -> Self {
        let bin = |v: f64| BandBin::classify(v, lower, upper);
        Self::from_bins(
            bin(cell.top_left.f),
            bin(cell.top_right.f),
            bin(cell.bottom_right.f),
            bin(cell.bottom_left.f),
        )
    }

    pub fn from_bins(tl: BandBin, tr: BandBin, br: BandBin, bl: BandBin) -> Self {
        Self(27 * tl as u8 + 9 * tr as u8 + 3 * br as u8 + bl as u8)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        (index < 81).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn shape(self) -> BandShape {
        match self.geometry() {
            CaseGeometry::Fixed(shape, _) => shape,
            CaseGeometry::Saddle { .. } => BandShape::Saddle,
        }
    }

    pub fn is_saddle(self) -> bool {
        matches!(self.geometry(), CaseGeometry::Saddle { .. })
    }

    /// Outlines for this case. `center` only matters for saddles.
    pub fn outlines(self, center: BandBin) -> Outlines {
        match self.geometry() {
            CaseGeometry::Fixed(_, outlines) => outlines,
            CaseGeometry::Saddle {
                below,
                within,
                above,
            } => match center {
                BandBin::Below => below,
                BandBin::Within => within,
                BandBin::Above => above,
            },
        }
    }

    fn geometry(self) -> CaseGeometry {
        use BandShape::*;

        // Trailing comments give the corner bins as TL TR BR BL.
        match self.0 {
            0 | 80 => fixed(Empty, &[]),
            1 => fixed(Triangle, &[&[L_LO, B_LO, BL]]), // 0001
            2 => fixed(Trapezoid, &[&[L_LO, B_LO, B_UP, L_UP]]), // 0002
            3 => fixed(Triangle, &[&[R_LO, BR, B_LO]]), // 0010
            4 => fixed(Rectangle, &[&[L_LO, R_LO, BR, BL]]), // 0011
            5 => fixed(Pentagon, &[&[L_LO, R_LO, BR, B_UP, L_UP]]), // 0012
            6 => fixed(Trapezoid, &[&[R_LO, R_UP, B_UP, B_LO]]), // 0020
            7 => fixed(Pentagon, &[&[L_LO, R_LO, R_UP, B_UP, BL]]), // 0021
            8 => fixed(Rectangle, &[&[L_LO, R_LO, R_UP, L_UP]]), // 0022
            9 => fixed(Triangle, &[&[T_LO, TR, R_LO]]), // 0100
            10 => saddle(
                &[&[L_LO, B_LO, BL], &[T_LO, TR, R_LO]],
                &[&[L_LO, T_LO, TR, R_LO, B_LO, BL]],
            ), // 0101
            11 => saddle(
                &[&[T_LO, TR, R_LO], &[L_LO, B_LO, B_UP, L_UP]],
                &[&[T_LO, TR, R_LO, B_LO, B_UP, L_UP, L_LO]],
            ), // 0102
            12 => fixed(Rectangle, &[&[T_LO, TR, BR, B_LO]]), // 0110
            13 => fixed(Pentagon, &[&[T_LO, TR, BR, BL, L_LO]]), // 0111
            14 => fixed(Hexagon, &[&[L_LO, T_LO, TR, BR, B_UP, L_UP]]), // 0112
            15 => fixed(Pentagon, &[&[T_LO, TR, R_UP, B_UP, B_LO]]), // 0120
            16 => fixed(Hexagon, &[&[L_LO, T_LO, TR, R_UP, B_UP, BL]]), // 0121
            17 => fixed(Pentagon, &[&[T_LO, TR, R_UP, L_UP, L_LO]]), // 0122
            18 => fixed(Trapezoid, &[&[T_LO, T_UP, R_UP, R_LO]]), // 0200
            19 => saddle(
                &[&[L_LO, B_LO, BL], &[T_LO, T_UP, R_UP, R_LO]],
                &[&[T_LO, T_UP, R_UP, R_LO, B_LO, BL, L_LO]],
            ), // 0201
            20 => octagon_saddle(
                &[&[L_LO, B_LO, B_UP, L_UP], &[T_LO, T_UP, R_UP, R_LO]],
                &[&[L_LO, T_LO, T_UP, R_UP, R_LO, B_LO, B_UP, L_UP]],
                &[&[T_LO, T_UP, L_UP, L_LO], &[R_UP, R_LO, B_LO, B_UP]],
            ), // 0202
            21 => fixed(Pentagon, &[&[T_LO, T_UP, R_UP, BR, B_LO]]), // 0210
            22 => fixed(Hexagon, &[&[L_LO, T_LO, T_UP, R_UP, BR, BL]]), // 0211
            23 => saddle(
                &[&[R_UP, BR, B_UP], &[T_LO, T_UP, L_UP, L_LO]],
                &[&[T_LO, T_UP, R_UP, BR, B_UP, L_UP, L_LO]],
            ), // 0212
            24 => fixed(Rectangle, &[&[T_LO, T_UP, B_UP, B_LO]]), // 0220
            25 => fixed(Pentagon, &[&[T_LO, T_UP, B_UP, BL, L_LO]]), // 0221
            26 => fixed(Trapezoid, &[&[T_LO, T_UP, L_UP, L_LO]]), // 0222
            27 => fixed(Triangle, &[&[TL, T_LO, L_LO]]), // 1000
            28 => fixed(Rectangle, &[&[TL, T_LO, B_LO, BL]]), // 1001
            29 => fixed(Pentagon, &[&[TL, T_LO, B_LO, B_UP, L_UP]]), // 1002
            30 => saddle(
                &[&[TL, T_LO, L_LO], &[R_LO, BR, B_LO]],
                &[&[TL, T_LO, R_LO, BR, B_LO, L_LO]],
            ), // 1010
            31 => fixed(Pentagon, &[&[TL, T_LO, R_LO, BR, BL]]), // 1011
            32 => fixed(Hexagon, &[&[TL, T_LO, R_LO, BR, B_UP, L_UP]]), // 1012
            33 => saddle(
                &[&[TL, T_LO, L_LO], &[R_LO, R_UP, B_UP, B_LO]],
                &[&[TL, T_LO, R_LO, R_UP, B_UP, B_LO, L_LO]],
            ), // 1020
            34 => fixed(Hexagon, &[&[TL, T_LO, R_LO, R_UP, B_UP, BL]]), // 1021
            35 => fixed(Pentagon, &[&[TL, T_LO, R_LO, R_UP, L_UP]]), // 1022
            36 => fixed(Rectangle, &[&[TL, TR, R_LO, L_LO]]), // 1100
            37 => fixed(Pentagon, &[&[TL, TR, R_LO, B_LO, BL]]), // 1101
            38 => fixed(Hexagon, &[&[TL, TR, R_LO, B_LO, B_UP, L_UP]]), // 1102
            39 => fixed(Pentagon, &[&[TL, TR, BR, B_LO, L_LO]]), // 1110
            40 => fixed(Square, &[&[TL, TR, BR, BL]]), // 1111
            41 => fixed(Pentagon, &[&[TL, TR, BR, B_UP, L_UP]]), // 1112
            42 => fixed(Hexagon, &[&[TL, TR, R_UP, B_UP, B_LO, L_LO]]), // 1120
            43 => fixed(Pentagon, &[&[TL, TR, R_UP, B_UP, BL]]), // 1121
            44 => fixed(Rectangle, &[&[TL, TR, R_UP, L_UP]]), // 1122
            45 => fixed(Pentagon, &[&[TL, T_UP, R_UP, R_LO, L_LO]]), // 1200
            46 => fixed(Hexagon, &[&[TL, T_UP, R_UP, R_LO, B_LO, BL]]), // 1201
            47 => saddle(
                &[&[TL, T_UP, L_UP], &[R_UP, R_LO, B_LO, B_UP]],
                &[&[TL, T_UP, R_UP, R_LO, B_LO, B_UP, L_UP]],
            ), // 1202
            48 => fixed(Hexagon, &[&[TL, T_UP, R_UP, BR, B_LO, L_LO]]), // 1210
            49 => fixed(Pentagon, &[&[TL, T_UP, R_UP, BR, BL]]), // 1211
            50 => saddle(
                &[&[TL, T_UP, L_UP], &[R_UP, BR, B_UP]],
                &[&[TL, T_UP, R_UP, BR, B_UP, L_UP]],
            ), // 1212
            51 => fixed(Pentagon, &[&[TL, T_UP, B_UP, B_LO, L_LO]]), // 1220
            52 => fixed(Rectangle, &[&[TL, T_UP, B_UP, BL]]), // 1221
            53 => fixed(Triangle, &[&[TL, T_UP, L_UP]]), // 1222
            54 => fixed(Trapezoid, &[&[T_UP, T_LO, L_LO, L_UP]]), // 2000
            55 => fixed(Pentagon, &[&[T_UP, T_LO, B_LO, BL, L_UP]]), // 2001
            56 => fixed(Rectangle, &[&[T_UP, T_LO, B_LO, B_UP]]), // 2002
            57 => saddle(
                &[&[R_LO, BR, B_LO], &[T_UP, T_LO, L_LO, L_UP]],
                &[&[T_UP, T_LO, R_LO, BR, B_LO, L_LO, L_UP]],
            ), // 2010
            58 => fixed(Hexagon, &[&[L_UP, T_UP, T_LO, R_LO, BR, BL]]), // 2011
            59 => fixed(Pentagon, &[&[T_UP, T_LO, R_LO, BR, B_UP]]), // 2012
            60 => octagon_saddle(
                &[&[T_UP, T_LO, L_LO, L_UP], &[R_LO, R_UP, B_UP, B_LO]],
                &[&[L_UP, T_UP, T_LO, R_LO, R_UP, B_UP, B_LO, L_LO]],
                &[&[L_UP, B_UP, B_LO, L_LO], &[T_UP, T_LO, R_LO, R_UP]],
            ), // 2020
            61 => saddle(
                &[&[L_UP, B_UP, BL], &[T_UP, T_LO, R_LO, R_UP]],
                &[&[T_UP, T_LO, R_LO, R_UP, B_UP, BL, L_UP]],
            ), // 2021
            62 => fixed(Trapezoid, &[&[T_UP, T_LO, R_LO, R_UP]]), // 2022
            63 => fixed(Pentagon, &[&[T_UP, TR, R_LO, L_LO, L_UP]]), // 2100
            64 => fixed(Hexagon, &[&[L_UP, T_UP, TR, R_LO, B_LO, BL]]), // 2101
            65 => fixed(Pentagon, &[&[T_UP, TR, R_LO, B_LO, B_UP]]), // 2102
            66 => fixed(Hexagon, &[&[L_UP, T_UP, TR, BR, B_LO, L_LO]]), // 2110
            67 => fixed(Pentagon, &[&[T_UP, TR, BR, BL, L_UP]]), // 2111
            68 => fixed(Rectangle, &[&[T_UP, TR, BR, B_UP]]), // 2112
            69 => saddle(
                &[&[T_UP, TR, R_UP], &[L_UP, B_UP, B_LO, L_LO]],
                &[&[T_UP, TR, R_UP, B_UP, B_LO, L_LO, L_UP]],
            ), // 2120
            70 => saddle(
                &[&[L_UP, B_UP, BL], &[T_UP, TR, R_UP]],
                &[&[L_UP, T_UP, TR, R_UP, B_UP, BL]],
            ), // 2121
            71 => fixed(Triangle, &[&[T_UP, TR, R_UP]]), // 2122
            72 => fixed(Rectangle, &[&[L_UP, R_UP, R_LO, L_LO]]), // 2200
            73 => fixed(Pentagon, &[&[L_UP, R_UP, R_LO, B_LO, BL]]), // 2201
            74 => fixed(Trapezoid, &[&[R_UP, R_LO, B_LO, B_UP]]), // 2202
            75 => fixed(Pentagon, &[&[L_UP, R_UP, BR, B_LO, L_LO]]), // 2210
            76 => fixed(Rectangle, &[&[L_UP, R_UP, BR, BL]]), // 2211
            77 => fixed(Triangle, &[&[R_UP, BR, B_UP]]), // 2212
            78 => fixed(Trapezoid, &[&[L_UP, B_UP, B_LO, L_LO]]), // 2220
            79 => fixed(Triangle, &[&[L_UP, B_UP, BL]]), // 2221
            index => unreachable!("isoband case index out of range: {}", index),
        }
    }
}

/// Band polygons of one cell for `[lower, upper]`.
pub fn band_polygons(cell: &Cell, lower: f64, upper: f64) -> Vec<Polygon> {
    let case = BandCase::classify(cell, lower, upper);
    let center = if case.is_saddle() {
        BandBin::classify(cell.center_estimate(), lower, upper)
    } else {
        BandBin::Within
    };

    case.outlines(center)
        .iter()
        .map(|outline| {
            Polygon::new(
                outline
                    .iter()
                    .map(|vertex| vertex.resolve(cell, lower, upper))
                    .collect(),
            )
        })
        .collect()
}
