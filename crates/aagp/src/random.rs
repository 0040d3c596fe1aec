//! Seeded random simple polygons.
//!
//! Model
//! - Draw distinct integer points in `[0, extent]^2`, rejecting any point
//!   collinear with two earlier ones.
//! - Visit them in random order and untangle: while two edges cross, reverse
//!   the chain between them (a 2-opt move). Each move strictly shortens the
//!   tour, so the loop ends in a simple polygon. It is normalized because no
//!   three points are collinear, and it is flipped to counterclockwise order.
//! - Determinism: a [`ReplayToken`] `(seed, index)` fixes the draw.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::kernel::{Point, Polygon};

/// Random polygon parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomCfg {
    /// Number of vertices (at least 3).
    pub vertices: usize,
    /// Coordinates are drawn from `0..=extent`.
    pub extent: i64,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            vertices: 20,
            extent: 1000,
        }
    }
}

/// Names one reproducible draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn rng(self) -> StdRng {
        let key = splitmix(self.seed ^ splitmix(self.index.wrapping_add(0x9e37_79b9_7f4a_7c15)));
        StdRng::seed_from_u64(key)
    }
}

fn splitmix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Draw a random simple polygon. `None` if `extent` leaves too little room
/// for `vertices` points in general position.
pub fn draw_polygon(cfg: RandomCfg, tok: ReplayToken) -> Option<Polygon> {
    let n = cfg.vertices.max(3);
    let extent = cfg.extent.max(1);
    let mut rng = tok.rng();
    let mut points = draw_points(&mut rng, n, extent, 1000 * n)?;
    points.shuffle(&mut rng);
    untangle(&mut points);
    if signed_area2(&points) < 0 {
        points.reverse();
    }
    Some(points.iter().map(|p| Point::from_ints(p.x, p.y)).collect())
}

fn draw_points(rng: &mut StdRng, n: usize, extent: i64, budget: usize) -> Option<Vec<Vector2<i64>>> {
    let mut points: Vec<Vector2<i64>> = Vec::with_capacity(n);
    let mut tries = 0;
    while points.len() < n {
        tries += 1;
        if tries > budget {
            return None;
        }
        let p = Vector2::new(rng.gen_range(0..=extent), rng.gen_range(0..=extent));
        let fits = points.iter().enumerate().all(|(i, a)| {
            *a != p && points[i + 1..].iter().all(|b| cross(b - a, p - a) != 0)
        });
        if fits {
            points.push(p);
        }
    }
    Some(points)
}

/// 2-opt until no two edges cross. Points must be in general position.
fn untangle(points: &mut [Vector2<i64>]) {
    let n = points.len();
    'search: loop {
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if crosses(points[i], points[i + 1], points[j], points[(j + 1) % n]) {
                    points[i + 1..=j].reverse();
                    continue 'search;
                }
            }
        }
        return;
    }
}

/// Proper crossing of `ab` and `cd`; touching cannot occur in general position.
fn crosses(a: Vector2<i64>, b: Vector2<i64>, c: Vector2<i64>, d: Vector2<i64>) -> bool {
    let side = |p: Vector2<i64>, q: Vector2<i64>, r: Vector2<i64>| cross(q - p, r - p) > 0;
    side(a, b, c) != side(a, b, d) && side(c, d, a) != side(c, d, b)
}

fn signed_area2(points: &[Vector2<i64>]) -> i128 {
    let n = points.len();
    (0..n).map(|i| cross(points[i], points[(i + 1) % n])).sum()
}

fn cross(a: Vector2<i64>, b: Vector2<i64>) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}
