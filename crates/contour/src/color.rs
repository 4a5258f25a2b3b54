//! Mapping normalized band keys to colors.

use contour_common::{ContourError, ContourResult, Polygon};
use serde::{Deserialize, Serialize};

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from channel intensities in `[0, 1]`; out-of-range
    /// intensities are clamped.
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), 255)
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Maps a normalized value in `[0, 1]` to a color.
pub trait ColorMapper: Send + Sync {
    fn map(&self, value: f64) -> Color;
}

impl<F> ColorMapper for F
where
    F: Fn(f64) -> Color + Send + Sync,
{
    fn map(&self, value: f64) -> Color {
        self(value)
    }
}

/// A band polygon with its resolved fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredPolygon {
    pub polygon: Polygon,
    pub color: Color,
}

/// The "jet" colormap: dark blue through cyan, yellow and red to dark red.
#[derive(Debug, Clone, Copy, Default)]
pub struct JetColorMapper {
    inverse: bool,
}

impl JetColorMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jet running from dark red at 0 to dark blue at 1.
    pub fn inverted() -> Self {
        Self { inverse: true }
    }

    fn red(v: f64) -> f64 {
        if v <= 0.375 {
            0.0
        } else if v <= 0.625 {
            4.0 * v - 1.5
        } else if v <= 0.875 {
            1.0
        } else {
            3.625 - 3.0 * v
        }
    }

    fn green(v: f64) -> f64 {
        if v <= 0.125 {
            0.0
        } else if v <= 0.375 {
            4.0 * v - 0.5
        } else if v <= 0.625 {
            1.0
        } else if v <= 0.875 {
            3.5 - 4.0 * v
        } else {
            0.0
        }
    }

    fn blue(v: f64) -> f64 {
        if v <= 0.125 {
            0.625 + 3.0 * v
        } else if v <= 0.375 {
            1.0
        } else if v <= 0.625 {
            2.5 - 4.0 * v
        } else {
            0.0
        }
    }
}

impl ColorMapper for JetColorMapper {
    fn map(&self, value: f64) -> Color {
        let v = if self.inverse { 1.0 - value } else { value };
        Color::from_unit_rgb(Self::red(v), Self::green(v), Self::blue(v))
    }
}

/// Picks the nearest entry of an RGB lookup table.
///
/// Entries are channel intensities in `[0, 1]`; entry `k` of `n` covers
/// values around `k / n`.
#[derive(Debug, Clone)]
pub struct TableColorMapper {
    table: Vec<[f64; 3]>,
}

impl TableColorMapper {
    pub fn new(table: Vec<[f64; 3]>) -> ContourResult<Self> {
        if table.is_empty() {
            return Err(ContourError::invalid_input("color table is empty"));
        }
        Ok(Self { table })
    }

    /// The same table read back to front.
    pub fn inverted(mut self) -> Self {
        self.table.reverse();
        self
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl ColorMapper for TableColorMapper {
    fn map(&self, value: f64) -> Color {
        let n = self.table.len();
        let index = ((value * n as f64).round().max(0.0) as usize).min(n - 1);
        let [r, g, b] = self.table[index];
        Color::from_unit_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_reference_points() {
        let jet = JetColorMapper::new();
        assert_eq!(jet.map(0.0), Color::new(0, 0, 159, 255));
        assert_eq!(jet.map(0.5), Color::new(128, 255, 128, 255));
        assert_eq!(jet.map(1.0), Color::new(159, 0, 0, 255));
    }

    #[test]
    fn test_inverted_jet_mirrors() {
        let jet = JetColorMapper::new();
        let inv = JetColorMapper::inverted();
        assert_eq!(inv.map(0.0), jet.map(1.0));
        assert_eq!(inv.map(0.25), jet.map(0.75));
    }

    #[test]
    fn test_table_nearest_entry() {
        let mapper = TableColorMapper::new(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
        .unwrap();
        assert_eq!(mapper.map(0.0), Color::new(0, 0, 0, 255));
        assert_eq!(mapper.map(0.3), Color::new(255, 0, 0, 255));
        assert_eq!(mapper.map(0.9), Color::new(0, 0, 255, 255));
        assert_eq!(mapper.map(1.0), Color::new(0, 0, 255, 255));
        assert_eq!(mapper.map(-0.5), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn test_table_inverted() {
        let mapper = TableColorMapper::new(vec![[1.0, 1.0, 1.0], [0.0, 0.0, 0.0]])
            .unwrap()
            .inverted();
        assert_eq!(mapper.map(0.0), Color::new(0, 0, 0, 255));
        assert_eq!(mapper.len(), 2);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(TableColorMapper::new(vec![]).is_err());
    }

    #[test]
    fn test_closure_mapper() {
        let gray = |v: f64| Color::from_unit_rgb(v, v, v);
        assert_eq!(ColorMapper::map(&gray, 1.0), Color::new(255, 255, 255, 255));
    }
}
