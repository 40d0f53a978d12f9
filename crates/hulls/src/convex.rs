//! Convex hull by pivot + polar-angle sort + angular sweep (Graham scan).
//!
//! Steps
//! - Pivot: lowest `y`, ties by lowest `x`. Always a hull vertex.
//! - Sort the rest CCW around the pivot by angle; equal angles by distance
//!   (near first).
//! - Keep only the farthest point of each ray from the pivot.
//! - Sweep: pop while the last two stacked points and the candidate do not
//!   turn counter-clockwise.
//!
//! Output is CCW and starts at the pivot. Fewer than 3 usable points gives an
//! empty hull.

use crate::types::{dist2, orientation, HullCfg, Orientation, Point};

/// Convex hull with the default tolerance.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    convex_hull_with(points, HullCfg::default())
}

/// Convex hull of `points` (CCW, starting at the lowest-then-leftmost point).
pub fn convex_hull_with(points: &[Point], cfg: HullCfg) -> Vec<Point> {
    if points.len() < 3 {
        tracing::debug!(n = points.len(), "convex hull: fewer than 3 points");
        return Vec::new();
    }
    let mut pts = points.to_vec();
    place_pivot(&mut pts);
    sort_by_polar_angle(&mut pts);
    let unique = drop_inner_ray_points(&pts, cfg.eps);
    if unique.len() < 3 {
        tracing::debug!(n = points.len(), "convex hull: degenerate (collinear) input");
        return Vec::new();
    }
    let hull = sweep(&unique, cfg.eps);
    tracing::trace!(n = points.len(), hull = hull.len(), "convex hull");
    hull
}

fn place_pivot(pts: &mut [Point]) {
    let mut best = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        let q = &pts[best];
        if p.y < q.y || (p.y == q.y && p.x < q.x) {
            best = i;
        }
    }
    pts.swap(0, best);
}

/// Sort by `(angle, distance²)` around the pivot. Both keys are plain values per
/// point, so the order stays total for float input (an eps-based comparator is
/// not transitive).
fn sort_by_polar_angle(pts: &mut [Point]) {
    let pivot = pts[0];
    let key = |p: &Point| ((p.y - pivot.y).atan2(p.x - pivot.x), dist2(&pivot, p));
    pts[1..].sort_by(|a, b| {
        let (ta, da) = key(a);
        let (tb, db) = key(b);
        ta.total_cmp(&tb).then(da.total_cmp(&db))
    });
}

/// Collapse every run of points on one ray from the pivot to its farthest point.
///
/// Runs are found with the eps test, so a run may hold points whose exact
/// angles differ slightly; the farthest one is kept regardless of its place.
fn drop_inner_ray_points(sorted: &[Point], eps: f64) -> Vec<Point> {
    let pivot = sorted[0];
    let mut out = Vec::with_capacity(sorted.len());
    out.push(pivot);
    let mut i = 1;
    while i < sorted.len() {
        let mut far = i;
        while i + 1 < sorted.len()
            && orientation(&pivot, &sorted[i], &sorted[i + 1], eps) == Orientation::Collinear
        {
            i += 1;
            if dist2(&pivot, &sorted[i]) > dist2(&pivot, &sorted[far]) {
                far = i;
            }
        }
        out.push(sorted[far]);
        i += 1;
    }
    out
}

fn sweep(unique: &[Point], eps: f64) -> Vec<Point> {
    let mut hull: Vec<Point> = Vec::with_capacity(unique.len());
    for p in unique {
        while hull.len() > 1
            && orientation(&hull[hull.len() - 2], &hull[hull.len() - 1], p, eps)
                != Orientation::CounterClockwise
        {
            hull.pop();
        }
        hull.push(*p);
    }
    hull
}
