use std::collections::BTreeSet;

use super::triangulate::{next_halfedge, Triangulation, Triangulator, NO_OPPOSITE};
use crate::types::{orientation, HullCfg, Orientation, Point};

/// Squared circumradius reported for (near-)degenerate triangles.
pub const DEGENERATE_RADIUS_SQ: f64 = 1e99;

/// Squared circumradius of `(p1, p2, p3)`.
///
/// Returns `DEGENERATE_RADIUS_SQ` when `|d| < eps` (collinear vertices).
pub fn circumradius_sq(p1: &Point, p2: &Point, p3: &Point, eps: f64) -> f64 {
    let d = 2.0 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));
    if d.abs() < eps {
        return DEGENERATE_RADIUS_SQ;
    }
    let s1 = p1.coords.norm_squared();
    let s2 = p2.coords.norm_squared();
    let s3 = p3.coords.norm_squared();
    let ux = (s1 * (p2.y - p3.y) + s2 * (p3.y - p1.y) + s3 * (p1.y - p2.y)) / d;
    let uy = (s1 * (p3.x - p2.x) + s2 * (p1.x - p3.x) + s3 * (p2.x - p1.x)) / d;
    (p1.x - ux).powi(2) + (p1.y - uy).powi(2)
}

/// A triangulation with every triangle marked kept or dropped by the alpha
/// radius test. Validity is stored per half-edge (all three of a triangle agree).
#[derive(Clone, Debug)]
pub struct AlphaShape {
    tri: Triangulation,
    valid: Vec<bool>,
    max_radius_sq: f64,
}

impl AlphaShape {
    /// Triangulate `points` and keep triangles with circumradius² < `1/alpha²`.
    ///
    /// `None` for fewer than 3 points, `alpha <= 0` (or NaN), or an all-collinear input
    /// (tested against the first two points).
    pub fn build<T: Triangulator>(
        points: &[Point],
        alpha: f64,
        cfg: HullCfg,
        triangulator: &T,
    ) -> Option<Self> {
        if points.len() < 3 {
            tracing::debug!(n = points.len(), "alpha shape: fewer than 3 points");
            return None;
        }
        if alpha.is_nan() || alpha <= 0.0 {
            tracing::debug!(alpha, "alpha shape: non-positive alpha");
            return None;
        }
        let (a, b) = (&points[0], &points[1]);
        if points[2..]
            .iter()
            .all(|p| orientation(a, b, p, cfg.eps) == Orientation::Collinear)
        {
            tracing::debug!(n = points.len(), "alpha shape: collinear input");
            return None;
        }

        let max_radius_sq = 1.0 / (alpha * alpha);
        let tri = triangulator.triangulate(points);
        let mut valid = vec![false; tri.halfedges.len()];
        for (t, ids) in tri.triangles.chunks_exact(3).enumerate() {
            let r2 = circumradius_sq(&points[ids[0]], &points[ids[1]], &points[ids[2]], cfg.eps);
            if r2 < max_radius_sq {
                valid[3 * t..3 * t + 3].fill(true);
            }
        }
        Some(Self {
            tri,
            valid,
            max_radius_sq,
        })
    }

    #[inline]
    pub fn max_radius_sq(&self) -> f64 {
        self.max_radius_sq
    }

    #[inline]
    pub fn triangulation(&self) -> &Triangulation {
        &self.tri
    }

    pub fn valid_triangle_count(&self) -> usize {
        self.valid.iter().step_by(3).filter(|&&v| v).count()
    }

    /// Endpoints of kept edges whose twin is missing or dropped.
    pub fn boundary_indices(&self) -> BTreeSet<usize> {
        let mut out = BTreeSet::new();
        for (i, &opp) in self.tri.halfedges.iter().enumerate() {
            if !self.valid[i] {
                continue;
            }
            if opp == NO_OPPOSITE || !self.valid[opp] {
                out.insert(self.tri.triangles[i]);
                out.insert(self.tri.triangles[next_halfedge(i)]);
            }
        }
        out
    }

    /// Vertices of all kept triangles.
    pub fn covered_indices(&self) -> BTreeSet<usize> {
        self.tri
            .triangles
            .iter()
            .zip(&self.valid)
            .filter(|(_, v)| **v)
            .map(|(&p, _)| p)
            .collect()
    }
}
