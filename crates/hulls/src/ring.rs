//! Angular ordering around the centroid, for drawing concave-hull output.
//!
//! `concave_hull` returns boundary points by ascending input index. A renderer
//! that wants a closed ring can sort them by `atan2` around their mean. This is
//! a heuristic: strongly non-star-shaped boundaries still self-intersect.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::types::Point;

/// Sort `points` by angle around their arithmetic mean (ascending, from -π).
pub fn order_around_centroid(points: &[Point]) -> Vec<Point> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|p| ((p.y - c.y).atan2(p.x - c.x), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Arithmetic mean of `points`; `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.coords);
    Some(Point::from(sum / points.len() as f64))
}
