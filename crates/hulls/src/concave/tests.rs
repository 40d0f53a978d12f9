use super::*;
use crate::convex::convex_hull;
use crate::rand::{draw_ring_with_cluster, regular_polygon, ReplayToken, RingCfg};
use proptest::prelude::*;
use std::cell::RefCell;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn sorted_coords(poly: &[Point]) -> Vec<(f64, f64)> {
    let mut v: Vec<(f64, f64)> = poly.iter().map(|p| (p.x, p.y)).collect();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

/// Hands out a fixed triangulation and records what it was asked to triangulate.
struct Fixed {
    tri: Triangulation,
    seen: RefCell<Vec<Point>>,
}

impl Fixed {
    fn new(triangles: Vec<usize>, halfedges: Vec<usize>) -> Self {
        Self {
            tri: Triangulation {
                triangles,
                halfedges,
            },
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Triangulator for Fixed {
    fn triangulate(&self, points: &[Point]) -> Triangulation {
        *self.seen.borrow_mut() = points.to_vec();
        self.tri.clone()
    }
}

// Two triangles (0,1,2) and (0,2,3) sharing the diagonal 0-2.
fn two_triangles() -> Fixed {
    Fixed::new(
        vec![0, 1, 2, 0, 2, 3],
        vec![NO_OPPOSITE, NO_OPPOSITE, 3, 2, NO_OPPOSITE, NO_OPPOSITE],
    )
}

#[test]
fn circumradius_right_triangle() {
    let r2 = circumradius_sq(
        &Point::new(0.0, 0.0),
        &Point::new(2.0, 0.0),
        &Point::new(0.0, 2.0),
        1e-9,
    );
    assert!((r2 - 2.0).abs() < 1e-12);
}

#[test]
fn circumradius_degenerate_is_sentinel() {
    let r2 = circumradius_sq(
        &Point::new(0.0, 0.0),
        &Point::new(1.0, 1.0),
        &Point::new(3.0, 3.0),
        1e-9,
    );
    assert_eq!(r2, DEGENERATE_RADIUS_SQ);
}

#[test]
fn next_halfedge_wraps_within_triangle() {
    assert_eq!(next_halfedge(0), 1);
    assert_eq!(next_halfedge(1), 2);
    assert_eq!(next_halfedge(2), 0);
    assert_eq!(next_halfedge(5), 3);
}

#[test]
fn rejects_degenerate_inputs() {
    let square = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    assert!(concave_hull(&square[..2], 0.1).is_empty());
    assert!(concave_hull(&square, 0.0).is_empty());
    assert!(concave_hull(&square, -1.0).is_empty());
    assert!(concave_hull(&square, f64::NAN).is_empty());
    assert!(concave_hull(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]), 0.1).is_empty());
}

#[test]
fn collinear_precheck_uses_first_two_points() {
    // The first two points coincide, so every triple through them reads as collinear.
    let input = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert!(concave_hull(&input, 0.1).is_empty());
}

#[test]
fn square_with_generous_alpha() {
    let square = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let hull = concave_hull(&square, 0.1);
    // ascending index order, which is input order here
    assert_eq!(hull, square);
    assert_eq!(sorted_coords(&hull), sorted_coords(&convex_hull(&square)));
}

#[test]
fn delaunay_square_adjacency() {
    let square = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let tri = Delaunay.triangulate(&square);
    assert!(!tri.is_empty());
    assert_eq!(tri.triangle_count(), 2);
    assert_eq!(tri.halfedges.len(), tri.triangles.len());
    assert!(Triangulation::default().is_empty());
    let outer = tri.halfedges.iter().filter(|&&h| h == NO_OPPOSITE).count();
    assert_eq!(outer, 4);
}

#[test]
fn fixed_triangulation_all_kept() {
    let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let fixed = two_triangles();
    let hull = concave_hull_with(&square, 0.1, HullCfg::default(), &fixed);
    assert_eq!(hull, square);
    assert_eq!(*fixed.seen.borrow(), square);
}

#[test]
fn dropped_neighbour_exposes_shared_edge() {
    // (0,1,2) has r² = 0.5; (0,2,3) has r² = 90.5.
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (10.0, 10.0)]);
    let fixed = two_triangles();
    let shape = AlphaShape::build(&input, 1.0, HullCfg::default(), &fixed).unwrap();
    assert_eq!(shape.triangulation(), &fixed.tri);
    assert_eq!(shape.triangulation().triangle_count(), 2);
    assert_eq!(shape.valid_triangle_count(), 1);
    assert!((shape.max_radius_sq() - 1.0).abs() < 1e-12);
    assert_eq!(shape.boundary_indices().into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(shape.covered_indices().into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    let hull = concave_hull_with(&input, 1.0, HullCfg::default(), &fixed);
    assert_eq!(hull, input[..3].to_vec());
}

#[test]
fn everything_dropped_is_empty() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (10.0, 10.0)]);
    let hull = concave_hull_with(&input, 100.0, HullCfg::default(), &two_triangles());
    assert!(hull.is_empty());
}

#[test]
fn hexagon_centroid_never_on_boundary() {
    let mut input = regular_polygon(6, 1.0);
    input.push(Point::new(0.0, 0.0));
    // fan triangles are equilateral with r² = 1/3
    for &alpha in &[0.1, 0.5, 1.0, 1.5] {
        let hull = concave_hull(&input, alpha);
        assert_eq!(hull.len(), 6, "alpha = {alpha}");
        assert!(!hull.contains(&Point::new(0.0, 0.0)));
    }
    assert!(concave_hull(&input, 2.0).is_empty());
}

#[test]
fn generous_alpha_matches_convex_hull() {
    let cfg = RingCfg::default();
    let input = draw_ring_with_cluster(cfg, ReplayToken::new(11, 0));
    let concave = concave_hull(&input, 1e-3);
    let convex = convex_hull(&input);
    assert_eq!(convex.len(), cfg.ring_count);
    assert_eq!(sorted_coords(&concave), sorted_coords(&convex));
}

#[test]
fn tightening_alpha_only_shrinks_the_shape() {
    let cfg = RingCfg {
        angle_jitter_frac: 0.2,
        cluster_count: 12,
        ..RingCfg::default()
    };
    let input = draw_ring_with_cluster(cfg, ReplayToken::new(5, 2));
    let alphas = [1e-3, 0.05, 0.1, 0.15, 0.25, 0.5, 1.0, 100.0];
    let shapes: Vec<AlphaShape> = alphas
        .iter()
        .map(|&a| AlphaShape::build(&input, a, HullCfg::default(), &Delaunay).unwrap())
        .collect();
    for w in shapes.windows(2) {
        let (loose, tight) = (&w[0], &w[1]);
        assert!(tight.valid_triangle_count() <= loose.valid_triangle_count());
        assert!(tight.covered_indices().is_subset(&loose.covered_indices()));
        assert!(tight.boundary_indices().is_subset(&loose.covered_indices()));
    }
    // loosest: the ring only; tightest: nothing survives
    let loosest = shapes[0].boundary_indices();
    assert!(loosest.iter().all(|&i| i < cfg.ring_count));
    assert_eq!(loosest.len(), cfg.ring_count);
    assert!(shapes[shapes.len() - 1].boundary_indices().is_empty());
}

fn grid_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-15i32..=15, -15i32..=15), 0..30).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

/// Integer points `o + t·d` on a line with a non-zero integer direction.
fn collinear_points() -> impl Strategy<Value = Vec<Point>> {
    (
        (-10i32..=10, -10i32..=10),
        (-5i32..=5, -5i32..=5).prop_filter("zero direction", |&(dx, dy)| dx != 0 || dy != 0),
        prop::collection::vec(-10i32..=10, 0..30),
    )
        .prop_map(|((ox, oy), (dx, dy), ts)| {
            ts.into_iter()
                .map(|t| Point::new((ox + t * dx) as f64, (oy + t * dy) as f64))
                .collect()
        })
}

proptest! {
    #[test]
    fn collinear_input_gives_empty_hulls(input in collinear_points(), alpha in 0.001f64..10.0) {
        prop_assert!(convex_hull(&input).is_empty());
        prop_assert!(concave_hull(&input, alpha).is_empty());
    }

    #[test]
    fn boundary_points_come_from_input(input in grid_points(), alpha in 0.01f64..2.0) {
        let hull = concave_hull(&input, alpha);
        for h in &hull {
            prop_assert!(input.contains(h));
        }
    }

    #[test]
    fn output_follows_index_order(input in grid_points(), alpha in 0.01f64..2.0) {
        let hull = concave_hull(&input, alpha);
        match AlphaShape::build(&input, alpha, HullCfg::default(), &Delaunay) {
            Some(shape) => {
                let expected: Vec<Point> =
                    shape.boundary_indices().into_iter().map(|i| input[i]).collect();
                prop_assert_eq!(hull, expected);
            }
            None => prop_assert!(hull.is_empty()),
        }
    }

    #[test]
    fn nested_thresholds_nest_coverage(input in grid_points(), a in 0.01f64..1.0, k in 1.0f64..4.0) {
        let loose = AlphaShape::build(&input, a, HullCfg::default(), &Delaunay);
        let tight = AlphaShape::build(&input, a * k, HullCfg::default(), &Delaunay);
        if let (Some(loose), Some(tight)) = (loose, tight) {
            prop_assert!(tight.boundary_indices().is_subset(&loose.covered_indices()));
            prop_assert!(tight.valid_triangle_count() <= loose.valid_triangle_count());
        }
    }
}
