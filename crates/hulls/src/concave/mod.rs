//! Concave hull (alpha shape) by pruning a Delaunay triangulation.
//!
//! Purpose
//! - Keep the triangles whose circumradius² is below `1/alpha²`; the boundary
//!   is every kept edge whose twin is absent or dropped.
//!
//! Output order
//! - Boundary points come out in ascending input-index order, not as a walk
//!   around the polygon. Use `ring::order_around_centroid` to draw them.
//!
//! Code cross-refs: `Triangulator`, `AlphaShape`, `types::HullCfg`

mod shape;
mod triangulate;

pub use shape::{circumradius_sq, AlphaShape, DEGENERATE_RADIUS_SQ};
pub use triangulate::{next_halfedge, Delaunay, Triangulation, Triangulator, NO_OPPOSITE};

use crate::types::{HullCfg, Point};

/// Concave hull with the default tolerance and the Delaunay triangulator.
pub fn concave_hull(points: &[Point], alpha: f64) -> Vec<Point> {
    concave_hull_with(points, alpha, HullCfg::default(), &Delaunay)
}

/// Concave hull of `points` for shape parameter `alpha > 0`.
///
/// Larger `alpha` means a smaller radius threshold and a tighter boundary.
pub fn concave_hull_with<T: Triangulator>(
    points: &[Point],
    alpha: f64,
    cfg: HullCfg,
    triangulator: &T,
) -> Vec<Point> {
    let Some(shape) = AlphaShape::build(points, alpha, cfg, triangulator) else {
        return Vec::new();
    };
    let hull: Vec<Point> = shape
        .boundary_indices()
        .into_iter()
        .map(|i| points[i])
        .collect();
    tracing::trace!(
        n = points.len(),
        kept = shape.valid_triangle_count(),
        hull = hull.len(),
        "concave hull"
    );
    hull
}

#[cfg(test)]
mod tests;
