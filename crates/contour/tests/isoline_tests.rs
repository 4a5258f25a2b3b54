//! Tests for isoline extraction (16-case marching squares).

use contour::{Cell, Edge, GridField, LineCase};
use contour_common::{GridSpec, Point};
use test_utils::{
    assert_approx_eq, assert_point_approx_eq, create_field_values, surfaces, unit_cell_samples,
};

fn unit_cell(tl: f64, tr: f64, br: f64, bl: f64) -> Cell {
    let [a, b, c, d] = unit_cell_samples(tl, tr, br, bl);
    Cell::new(a, b, c, d)
}

// ============================================================================
// Single cell tests
// ============================================================================

#[test]
fn test_horizontal_crossing() {
    // Top row at 0, bottom row at 10
    let cell = unit_cell(0.0, 0.0, 10.0, 10.0);
    let segments = cell.to_line_segments(5.0);

    assert_eq!(segments.len(), 1);
    assert_point_approx_eq!(segments[0].start(), Point::new(0.0, 0.5), 1e-12);
    assert_point_approx_eq!(segments[0].end(), Point::new(1.0, 0.5), 1e-12);
}

#[test]
fn test_single_corner_cases() {
    // One corner above the level
    let cases = [
        (unit_cell(9.0, 0.0, 0.0, 0.0), (Edge::Left, Edge::Top)),
        (unit_cell(0.0, 9.0, 0.0, 0.0), (Edge::Top, Edge::Right)),
        (unit_cell(0.0, 0.0, 9.0, 0.0), (Edge::Right, Edge::Bottom)),
        (unit_cell(0.0, 0.0, 0.0, 9.0), (Edge::Left, Edge::Bottom)),
    ];

    for (cell, (from, to)) in cases {
        let segments = cell.to_line_segments(3.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start(), cell.crossing(from, 3.0));
        assert_eq!(segments[0].end(), cell.crossing(to, 3.0));
    }
}

#[test]
fn test_inverted_cases_match() {
    // One corner below the level gives the same segment as one corner above
    let above = unit_cell(0.0, 0.0, 9.0, 0.0).to_line_segments(3.0);
    let below = unit_cell(9.0, 9.0, 0.0, 9.0).to_line_segments(6.0);
    assert_eq!(above.len(), 1);
    assert_eq!(below.len(), 1);
    assert_point_approx_eq!(above[0].start(), below[0].start(), 1e-12);
    assert_point_approx_eq!(above[0].end(), below[0].end(), 1e-12);
}

#[test]
fn test_vertical_crossing() {
    let cell = unit_cell(0.0, 8.0, 8.0, 0.0);
    let segments = cell.to_line_segments(2.0);
    assert_eq!(segments.len(), 1);
    assert_point_approx_eq!(segments[0].start(), Point::new(0.25, 1.0), 1e-12);
    assert_point_approx_eq!(segments[0].end(), Point::new(0.25, 0.0), 1e-12);
}

// ============================================================================
// Saddle tests
// ============================================================================

#[test]
fn test_saddle_center_above_level() {
    // TR and BL high; center 5 >= 4 keeps case 0101
    let cell = unit_cell(0.0, 10.0, 0.0, 10.0);
    assert_eq!(LineCase::classify(&cell, 4.0).index(), 5);

    let segments = cell.to_line_segments(4.0);
    assert_eq!(segments.len(), 2);
    // Right to bottom cuts off the low bottom-right corner
    assert_point_approx_eq!(segments[0].start(), Point::new(1.0, 0.4), 1e-12);
    assert_point_approx_eq!(segments[0].end(), Point::new(0.6, 0.0), 1e-12);
    // Left to top cuts off the low top-left corner
    assert_point_approx_eq!(segments[1].start(), Point::new(0.0, 0.6), 1e-12);
    assert_point_approx_eq!(segments[1].end(), Point::new(0.4, 1.0), 1e-12);
}

#[test]
fn test_saddle_center_below_level() {
    // Center 5 < 6 flips to the other diagonal
    let cell = unit_cell(0.0, 10.0, 0.0, 10.0);
    let segments = cell.to_line_segments(6.0);
    assert_eq!(segments.len(), 2);

    assert_eq!(segments[0].start(), cell.crossing(Edge::Left, 6.0));
    assert_eq!(segments[0].end(), cell.crossing(Edge::Bottom, 6.0));
    assert_eq!(segments[1].start(), cell.crossing(Edge::Top, 6.0));
    assert_eq!(segments[1].end(), cell.crossing(Edge::Right, 6.0));
}

#[test]
fn test_saddle_center_equal_to_level() {
    // A center exactly on the level is not below it
    let cell = unit_cell(10.0, 0.0, 10.0, 0.0);
    assert_eq!(LineCase::classify(&cell, 5.0).index(), 10);
    let segments = cell.to_line_segments(5.0);
    assert_eq!(segments[0].start(), cell.crossing(Edge::Left, 5.0));
    assert_eq!(segments[0].end(), cell.crossing(Edge::Bottom, 5.0));
}

// ============================================================================
// Degenerate input tests
// ============================================================================

#[test]
fn test_flat_cell_has_no_isoline() {
    let cell = unit_cell(5.0, 5.0, 5.0, 5.0);
    for level in [4.0, 5.0, 6.0] {
        assert!(cell.to_line_segments(level).is_empty(), "level {}", level);
    }
}

#[test]
fn test_level_outside_cell_range() {
    let cell = unit_cell(1.0, 2.0, 3.0, 4.0);
    assert!(cell.to_line_segments(0.0).is_empty());
    assert!(cell.to_line_segments(4.0).is_empty());
}

// ============================================================================
// Grid tests
// ============================================================================

#[test]
fn test_plane_isolines_lie_on_level() {
    let spec = GridSpec::from_bounds(0.0, 10.0, 0.0, 10.0, 20, 20).unwrap();
    let field = GridField::new(spec, create_field_values(&spec, surfaces::plane)).unwrap();

    for level in [3.3, 12.7, 21.7] {
        let segments = field.to_iso_lines(&[level]);
        assert!(!segments.is_empty());
        for seg in &segments {
            assert_approx_eq!(surfaces::plane(seg.x1, seg.y1), level, 1e-9);
            assert_approx_eq!(surfaces::plane(seg.x2, seg.y2), level, 1e-9);
        }
    }
}

#[test]
fn test_levels_processed_in_given_order() {
    let spec = GridSpec::from_bounds(0.0, 4.0, 0.0, 4.0, 4, 4).unwrap();
    let field = GridField::new(spec, create_field_values(&spec, |x, _| x)).unwrap();

    let segments = field.to_iso_lines(&[2.5, 0.5]);
    // Four rows of cells cross each vertical line
    assert_eq!(segments.len(), 8);
    assert!(segments[..4].iter().all(|s| s.x1 == 2.5));
    assert!(segments[4..].iter().all(|s| s.x1 == 0.5));
}

#[test]
fn test_auto_isolines() {
    let spec = GridSpec::from_bounds(0.0, 4.0, 0.0, 1.0, 4, 1).unwrap();
    let field = GridField::new(spec, create_field_values(&spec, |x, _| x)).unwrap();

    // Levels 1, 2, 3 fall on vertices and classify as below
    let segments = field.to_auto_iso_lines(3);
    assert_eq!(field.auto_levels(3), vec![1.0, 2.0, 3.0]);
    assert_eq!(segments.len(), 3);
    assert!(field.to_auto_iso_lines(0).is_empty());
}
