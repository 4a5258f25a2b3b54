//! Level generation, band boundaries and color keys.

use contour_common::{Band, ContourError, ContourResult};

/// `n` evenly spaced levels strictly inside `[f_min, f_max]`.
///
/// The levels split the range into `n + 1` equal bands.
pub fn auto_levels(f_min: f64, f_max: f64, n: usize) -> Vec<f64> {
    let step = (f_max - f_min) / (n + 1) as f64;
    (1..=n).map(|i| f_min + i as f64 * step).collect()
}

/// Check a level list and color range before extracting isobands.
pub fn validate_band_request(
    levels: &[f64],
    range_min: f64,
    range_max: f64,
) -> ContourResult<()> {
    if levels.is_empty() {
        return Err(ContourError::invalid_input("at least one level is required"));
    }
    if levels.iter().any(|l| !l.is_finite()) {
        return Err(ContourError::invalid_input("levels must be finite"));
    }
    if !(range_min.is_finite() && range_max.is_finite()) {
        return Err(ContourError::invalid_input(format!(
            "color range must be finite ({}, {})",
            range_min, range_max
        )));
    }
    if range_max < range_min {
        return Err(ContourError::invalid_input(format!(
            "rangeMax < rangeMin ({} < {})",
            range_max, range_min
        )));
    }

    let (lowest, highest) = level_extent(levels);
    if range_min > lowest {
        return Err(ContourError::invalid_input(format!(
            "rangeMin > lowest level ({} > {})",
            range_min, lowest
        )));
    }
    if range_max < highest {
        return Err(ContourError::invalid_input(format!(
            "rangeMax < highest level ({} < {})",
            range_max, highest
        )));
    }

    Ok(())
}

fn level_extent(levels: &[f64]) -> (f64, f64) {
    levels
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &l| {
            (lo.min(l), hi.max(l))
        })
}

fn sorted(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Sorted levels with `-inf` and `+inf` added at the ends.
pub fn band_boundaries(levels: &[f64]) -> Vec<f64> {
    sorted(
        levels
            .iter()
            .copied()
            .chain([f64::NEG_INFINITY, f64::INFINITY]),
    )
}

/// The `levels.len() + 1` bands between adjacent boundaries, lowest first.
pub fn bands(levels: &[f64]) -> Vec<Band> {
    band_boundaries(levels)
        .windows(2)
        .map(|pair| Band::new(pair[0], pair[1]))
        .collect()
}

/// Normalized color key for each band, in the order of [`bands`].
///
/// Levels and range ends are sorted together and scaled into `[0, 1]` over
/// `[range_min, range_max]`. A band's key is the midpoint of its two scaled
/// boundaries, so the open-ended outer bands are keyed inside the range. A
/// zero-width range keys every band at 0.5.
pub fn color_keys(levels: &[f64], range_min: f64, range_max: f64) -> Vec<f64> {
    let span = range_max - range_min;
    if span == 0.0 {
        return vec![0.5; levels.len() + 1];
    }

    let scaled: Vec<f64> = sorted(levels.iter().copied().chain([range_min, range_max]))
        .into_iter()
        .map(|v| (v - range_min) / span)
        .collect();

    scaled
        .windows(2)
        .map(|pair| 0.5 * (pair[0] + pair[1]))
        .collect()
}
