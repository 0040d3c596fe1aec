//! Simple polygons as cyclic vertex sequences, addressed through cursors.
//!
//! All pattern code works on [`Cursor`]s rather than raw indices: a cursor is
//! bound to the vertex count of the polygon it was taken from and steps modulo
//! that count. Splitting a polygon invalidates its cursors; callers re-resolve
//! positions by point equality ([`Polygon::locate`]).

use std::fmt;
use std::ops::{Add, Sub};

use nalgebra::Vector2;
use num::{Signed, Zero};

use super::point::{left_turn, orientation, right_turn, Orientation, Point, Scalar};
use super::segment::{Intersection, Segment};

/// Position in a cyclic sequence of `len` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    pos: usize,
    len: usize,
}

impl Cursor {
    #[inline]
    pub fn new(pos: usize, len: usize) -> Self {
        debug_assert!(len > 0);
        Self { pos: pos % len, len }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.pos
    }

    /// Move by an arbitrary signed offset, wrapping around.
    #[inline]
    pub fn step(self, k: isize) -> Self {
        let n = self.len as isize;
        let pos = (self.pos as isize + k).rem_euclid(n) as usize;
        Self { pos, len: self.len }
    }

    #[inline]
    pub fn next(self) -> Self {
        self.step(1)
    }

    #[inline]
    pub fn prev(self) -> Self {
        self.step(-1)
    }

    /// Number of forward steps from `self` to `other`.
    #[inline]
    pub fn steps_to(self, other: Cursor) -> usize {
        (other.pos + self.len - self.pos) % self.len
    }
}

impl Add<isize> for Cursor {
    type Output = Cursor;
    #[inline]
    fn add(self, k: isize) -> Cursor {
        self.step(k)
    }
}

impl Sub<isize> for Cursor {
    type Output = Cursor;
    #[inline]
    fn sub(self, k: isize) -> Cursor {
        self.step(-k)
    }
}

/// Location of a point relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundedSide {
    Inside,
    OnBoundary,
    Outside,
}

/// Polygon given by its vertices in boundary order.
///
/// No invariant is enforced on construction; `is_simple`, orientation and
/// normalization are checked where they matter (solver entry, tests).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn from_ints(coords: &[(i64, i64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::from_ints(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    pub fn push(&mut self, p: Point) {
        self.vertices.push(p);
    }

    pub fn reverse_orientation(&mut self) {
        self.vertices.reverse();
    }

    #[inline]
    pub fn cursor(&self, i: usize) -> Cursor {
        Cursor::new(i, self.len())
    }

    /// All vertex (or edge) cursors, starting at index 0.
    pub fn cursors(&self) -> impl Iterator<Item = Cursor> {
        let n = self.len();
        (0..n).map(move |i| Cursor::new(i, n))
    }

    #[inline]
    pub fn point(&self, c: Cursor) -> &Point {
        debug_assert_eq!(c.len, self.len(), "cursor from another polygon");
        &self.vertices[c.pos]
    }

    /// Edge from vertex `c` to vertex `c + 1`.
    pub fn edge(&self, c: Cursor) -> Segment {
        Segment::new(self.point(c).clone(), self.point(c.next()).clone())
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.cursors().map(move |c| self.edge(c))
    }

    /// Vertices from `from` to `to` (both inclusive) walking forward.
    /// `chain(c, c - 1)` is the whole polygon starting at `c`.
    pub fn chain(&self, from: Cursor, to: Cursor) -> Polygon {
        let count = from.steps_to(to) + 1;
        let mut out = Vec::with_capacity(count);
        let mut c = from;
        for _ in 0..count {
            out.push(self.point(c).clone());
            c = c.next();
        }
        Polygon::new(out)
    }

    /// Cursor of the vertex equal to `p`.
    pub fn locate(&self, p: &Point) -> Option<Cursor> {
        self.vertices
            .iter()
            .position(|v| v == p)
            .map(|i| self.cursor(i))
    }

    #[inline]
    pub fn orientation_at(&self, c: Cursor) -> Orientation {
        orientation(self.point(c.prev()), self.point(c), self.point(c.next()))
    }

    /// Twice the signed area (positive for counterclockwise order).
    pub fn signed_area2(&self) -> Scalar {
        let mut acc = Scalar::zero();
        for c in self.cursors() {
            let p = self.point(c);
            let q = self.point(c.next());
            acc += &p.x * &q.y - &p.y * &q.x;
        }
        acc
    }

    pub fn area(&self) -> Scalar {
        self.signed_area2().abs() / super::point::int(2)
    }

    pub fn is_counterclockwise(&self) -> bool {
        self.signed_area2().is_positive()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area2().is_negative()
    }

    /// Convexity test for a simple polygon in either orientation.
    ///
    /// Collinear vertices are allowed. Besides consistent turn signs, the edge
    /// x-direction may change sign at most twice, which rules out polygons that
    /// wind around more than once.
    pub fn is_convex(&self) -> bool {
        let n = self.len();
        if n < 3 {
            return false;
        }
        let (mut left, mut right) = (false, false);
        for c in self.cursors() {
            match self.orientation_at(c) {
                Orientation::LeftTurn => left = true,
                Orientation::RightTurn => right = true,
                Orientation::Collinear => {}
            }
        }
        if left && right {
            return false;
        }
        let signs: Vec<i8> = self
            .edges()
            .map(|e| {
                let dx = &e.target.x - &e.source.x;
                if dx.is_positive() {
                    1
                } else if dx.is_negative() {
                    -1
                } else {
                    0
                }
            })
            .filter(|s| *s != 0)
            .collect();
        let flips = (0..signs.len())
            .filter(|&i| signs[i] != signs[(i + 1) % signs.len()])
            .count();
        flips <= 2
    }

    /// True iff no two edges meet except adjacent edges at their shared vertex.
    pub fn is_simple(&self) -> bool {
        let n = self.len();
        if n < 3 {
            return false;
        }
        if self.cursors().any(|c| self.point(c) == self.point(c.next())) {
            return false;
        }
        let edges: Vec<Segment> = self.edges().collect();
        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                match edges[i].intersection(&edges[j]) {
                    None => {}
                    Some(Intersection::Segment(_)) => return false,
                    Some(Intersection::Point(p)) => {
                        if !adjacent {
                            return false;
                        }
                        let shared = if j == i + 1 {
                            &edges[i].target
                        } else {
                            &edges[i].source
                        };
                        if &p != shared {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Point location by crossing parity, with exact boundary detection.
    pub fn bounded_side(&self, p: &Point) -> BoundedSide {
        let mut inside = false;
        for e in self.edges() {
            if e.has_on(p) {
                return BoundedSide::OnBoundary;
            }
            let (a, b) = (&e.source, &e.target);
            if (a.y > p.y) != (b.y > p.y) {
                let crosses = if b.y > a.y {
                    left_turn(a, b, p)
                } else {
                    right_turn(a, b, p)
                };
                if crosses {
                    inside = !inside;
                }
            }
        }
        if inside {
            BoundedSide::Inside
        } else {
            BoundedSide::Outside
        }
    }

    /// Double-precision vertices for rendering.
    pub fn to_f64(&self) -> Vec<Vector2<f64>> {
        self.vertices.iter().map(Point::to_f64).collect()
    }
}

impl fmt::Debug for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.vertices.iter()).finish()
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Polygon::new(iter.into_iter().collect())
    }
}
