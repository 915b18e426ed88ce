// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight point type and extent helpers for pixel math.

/// Pixel-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// `[min, max]` of the comparable values, skipping NaN.
/// `None` when no value survives.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Largest non-NaN value.
pub fn max_value<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    extent(values).map(|(_, hi)| hi)
}

/// Union of several extents (global min of the minima, global max of the maxima).
pub fn merge_extents<I>(extents: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    extents.into_iter().fold(None, |acc, (lo, hi)| match acc {
        None => Some((lo, hi)),
        Some((a, b)) => Some((a.min(lo), b.max(hi))),
    })
}
