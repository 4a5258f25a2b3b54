//! Marching squares for a single threshold.
//!
//! Each corner contributes one bit (value strictly above the level). The four
//! bits form a case index that selects which cell edges the isoline joins.

use contour_common::LineSegment;

use crate::cell::{Cell, Edge};

/// Edge pairs joined by the isoline, indexed by case.
const EDGE_PAIRS: [&[(Edge, Edge)]; 16] = [
    &[],                                                        // 0000
    &[(Edge::Left, Edge::Bottom)],                              // 0001
    &[(Edge::Right, Edge::Bottom)],                             // 0010
    &[(Edge::Left, Edge::Right)],                               // 0011
    &[(Edge::Top, Edge::Right)],                                // 0100
    &[(Edge::Right, Edge::Bottom), (Edge::Left, Edge::Top)],    // 0101
    &[(Edge::Top, Edge::Bottom)],                               // 0110
    &[(Edge::Left, Edge::Top)],                                 // 0111
    &[(Edge::Left, Edge::Top)],                                 // 1000
    &[(Edge::Top, Edge::Bottom)],                               // 1001
    &[(Edge::Left, Edge::Bottom), (Edge::Top, Edge::Right)],    // 1010
    &[(Edge::Top, Edge::Right)],                                // 1011
    &[(Edge::Left, Edge::Right)],                               // 1100
    &[(Edge::Right, Edge::Bottom)],                             // 1101
    &[(Edge::Left, Edge::Bottom)],                              // 1110
    &[],                                                        // 1111
];

/// Case index of a cell against one level: `8*TL + 4*TR + 2*BR + BL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCase(u8);

impl LineCase {
    /// Classify a cell. A corner exactly equal to the level counts as below.
    pub fn classify(cell: &Cell, level: f64) -> Self {
        let bit = |v: f64| u8::from(v > level);
        Self(
            8 * bit(cell.top_left.f)
                + 4 * bit(cell.top_right.f)
                + 2 * bit(cell.bottom_right.f)
                + bit(cell.bottom_left.f),
        )
    }

    pub fn from_index(index: u8) -> Option<Self> {
        (index < 16).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Diagonal corners agree but adjacent corners differ.
    pub fn is_saddle(self) -> bool {
        self.0 == 5 || self.0 == 10
    }

    /// Settle an ambiguous case using the cell's center estimate.
    ///
    /// A center below the level swaps the two saddle cases. Other cases are
    /// returned unchanged.
    pub fn resolve(self, center: f64, level: f64) -> Self {
        if self.is_saddle() && center < level {
            Self(5 + self.0 % 10)
        } else {
            self
        }
    }

    /// Edge pairs the isoline connects for this case.
    pub fn edge_pairs(self) -> &'static [(Edge, Edge)] {
        EDGE_PAIRS[usize::from(self.0)]
    }
}

/// Isoline segments of one cell at `level`.
pub fn line_segments(cell: &Cell, level: f64) -> Vec<LineSegment> {
    let case = LineCase::classify(cell, level).resolve(cell.center_estimate(), level);

    case.edge_pairs()
        .iter()
        .map(|&(from, to)| {
            LineSegment::from_points(cell.crossing(from, level), cell.crossing(to, level))
        })
        .collect()
}
