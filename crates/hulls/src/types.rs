//! Basic 2D types and the shared tolerance.
//!
//! - `Point`: planar point, `nalgebra::Point2<f64>`.
//! - `HullCfg`: centralizes the epsilon used by every degeneracy check
//!   (orientation in the convex sweep, the collinear precheck of the concave
//!   hull, and the near-zero determinant of the circumradius).
//! - `Orientation`, `orientation`: sign test on an ordered triple.
//!
//! Code cross-refs: `convex::convex_hull_with`, `concave::AlphaShape`

use nalgebra::Point2;

/// Planar point with `x`, `y` coordinates.
pub type Point = Point2<f64>;

/// Hull configuration (tolerances).
///
/// The tolerance is absolute, not scale-adaptive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    pub eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

/// Turn direction of an ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Classify `(a, b, c)` by the sign of `(b - a) × (c - a)`.
///
/// `|cross| < eps` is treated as collinear.
#[inline]
pub fn orientation(a: &Point, b: &Point, c: &Point, eps: f64) -> Orientation {
    let v = cross(a, b, c);
    if v.abs() < eps {
        Orientation::Collinear
    } else if v > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

#[inline]
pub(crate) fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Squared Euclidean distance.
#[inline]
pub fn dist2(a: &Point, b: &Point) -> f64 {
    (b - a).norm_squared()
}
