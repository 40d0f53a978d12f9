//! Boundary polygons of planar point sets.
//!
//! - `convex`: convex hull by angular sweep around the lowest point.
//! - `concave`: alpha shape by pruning a Delaunay triangulation.
//! - `api`: interleaved `[x0, y0, x1, y1, ...]` entry points.
//!
//! Both engines are pure functions of their input. Degenerate input (fewer
//! than 3 points, collinear points, non-positive alpha) yields an empty hull
//! rather than an error.

pub mod api;
pub mod concave;
pub mod convex;
mod error;
pub mod rand;
pub mod ring;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{compute_concave_hull, compute_convex_hull, flatten_points, points_from_flat};
pub use concave::{
    concave_hull, concave_hull_with, AlphaShape, Delaunay, Triangulation, Triangulator,
};
pub use convex::{convex_hull, convex_hull_with};
pub use error::FlatError;
pub use ring::order_around_centroid;
pub use types::{dist2, orientation, HullCfg, Orientation, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::concave::{
        concave_hull, concave_hull_with, AlphaShape, Delaunay, Triangulator,
    };
    pub use crate::convex::{convex_hull, convex_hull_with};
    pub use crate::rand::{draw_ring_with_cluster, draw_uniform_box, ReplayToken, RingCfg};
    pub use crate::ring::order_around_centroid;
    pub use crate::types::{HullCfg, Point};
}
