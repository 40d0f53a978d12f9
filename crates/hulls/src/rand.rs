//! Reproducible point clouds for fixtures, benchmarks and the CLI.
//!
//! - `draw_uniform_box`: uniform samples in an axis-aligned square.
//! - `draw_ring_with_cluster`: a (jittered) circle of points around a small
//!   central cluster. The cluster is interior for every alpha, the ring is the
//!   convex hull.
//! - `regular_polygon`: exact vertices, no randomness.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! the k-th cloud of a run can be regenerated without drawing the first k-1.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Replay token: `(seed, index)` selects one reproducible draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index ^ 0x9e3779b97f4a7c15)))
    }
}

/// Ring-plus-cluster configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub ring_count: usize,
    pub ring_radius: f64,
    /// Angular jitter as a fraction of the spacing 2π/ring_count. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    pub cluster_count: usize,
    pub cluster_radius: f64,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            ring_count: 24,
            ring_radius: 10.0,
            angle_jitter_frac: 0.0,
            cluster_count: 8,
            cluster_radius: 1.0,
        }
    }
}

/// Ring points first (CCW from angle 0 before jitter), then the cluster.
pub fn draw_ring_with_cluster(cfg: RingCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let n = cfg.ring_count;
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = std::f64::consts::TAU / (n.max(1) as f64);
    let mut out = Vec::with_capacity(n + cfg.cluster_count);
    for k in 0..n {
        let jitter = if aj > 0.0 {
            (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta
        } else {
            0.0
        };
        out.push(polar(cfg.ring_radius, k as f64 * delta + jitter));
    }
    for _ in 0..cfg.cluster_count {
        // sqrt for uniform density over the disc
        let r = cfg.cluster_radius * rng.gen::<f64>().sqrt();
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        out.push(polar(r, th));
    }
    out
}

/// `n` points uniform in `[-half_extent, half_extent]²`.
pub fn draw_uniform_box(n: usize, half_extent: f64, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let h = half_extent.abs();
    (0..n)
        .map(|_| {
            let v = Vector2::<f64>::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)) * h;
            Point::from(v)
        })
        .collect()
}

/// Vertices of a regular `n`-gon centered at the origin, CCW from angle 0.
pub fn regular_polygon(n: usize, radius: f64) -> Vec<Point> {
    let delta = std::f64::consts::TAU / (n.max(1) as f64);
    (0..n).map(|k| polar(radius, k as f64 * delta)).collect()
}

#[inline]
fn polar(r: f64, th: f64) -> Point {
    Point::new(r * th.cos(), r * th.sin())
}
