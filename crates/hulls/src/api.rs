//! Flat coordinate boundary.
//!
//! Hosts that exchange plain `f64` buffers call these. Layout is interleaved
//! `[x0, y0, x1, y1, ...]` both ways. Malformed buffers are rejected here; the
//! engines themselves never fail.

use crate::concave::concave_hull;
use crate::convex::convex_hull;
use crate::error::FlatError;
use crate::types::Point;

/// Pair up interleaved coordinates.
pub fn points_from_flat(flat: &[f64]) -> Result<Vec<Point>, FlatError> {
    if flat.len() % 2 != 0 {
        return Err(FlatError::OddLength { len: flat.len() });
    }
    if let Some(index) = flat.iter().position(|v| !v.is_finite()) {
        return Err(FlatError::NonFinite { index });
    }
    Ok(flat
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

/// Interleave points back into `[x0, y0, ...]`.
pub fn flatten_points(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Convex hull over a flat buffer.
pub fn compute_convex_hull(flat: &[f64]) -> Result<Vec<f64>, FlatError> {
    let pts = points_from_flat(flat)?;
    Ok(flatten_points(&convex_hull(&pts)))
}

/// Concave hull over a flat buffer.
pub fn compute_concave_hull(flat: &[f64], alpha: f64) -> Result<Vec<f64>, FlatError> {
    let pts = points_from_flat(flat)?;
    Ok(flatten_points(&concave_hull(&pts, alpha)))
}
