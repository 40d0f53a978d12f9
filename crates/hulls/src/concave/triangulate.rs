use crate::types::Point;

/// Half-edge index meaning "no opposite half-edge" (outer boundary).
pub const NO_OPPOSITE: usize = delaunator::EMPTY;

/// Triangles as index triples plus half-edge adjacency.
///
/// Half-edge `i` runs from `triangles[i]` to `triangles[next_halfedge(i)]`;
/// `halfedges[i]` is its twin in the neighbouring triangle or `NO_OPPOSITE`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Triangulation {
    pub triangles: Vec<usize>,
    pub halfedges: Vec<usize>,
}

impl Triangulation {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Next half-edge inside the same triangle.
#[inline]
pub fn next_halfedge(i: usize) -> usize {
    if i % 3 == 2 {
        i - 2
    } else {
        i + 1
    }
}

/// Source of a triangulation over the caller's point order.
///
/// Indices in the result must refer to positions in `points` unchanged.
pub trait Triangulator {
    fn triangulate(&self, points: &[Point]) -> Triangulation;
}

/// Delaunay triangulation via the `delaunator` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Delaunay;

impl Triangulator for Delaunay {
    fn triangulate(&self, points: &[Point]) -> Triangulation {
        let coords: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let t = delaunator::triangulate(&coords);
        Triangulation {
            triangles: t.triangles,
            halfedges: t.halfedges,
        }
    }
}
