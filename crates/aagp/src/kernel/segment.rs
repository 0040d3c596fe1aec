//! Segments, rays, directions and their exact intersections.

use std::cmp::Ordering;

use num::{Signed, Zero};

use super::point::{orientation, Orientation, Point, Scalar, Vector};

/// Closed segment between two distinct points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub source: Point,
    pub target: Point,
}

/// Non-empty intersection of two linear objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intersection {
    Point(Point),
    /// Collinear overlap of positive length.
    Segment(Segment),
}

impl Segment {
    #[inline]
    pub fn new(source: Point, target: Point) -> Self {
        debug_assert!(source != target, "degenerate segment");
        Self { source, target }
    }

    #[inline]
    pub fn vector(&self) -> Vector {
        &self.target - &self.source
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction(self.vector())
    }

    pub fn midpoint(&self) -> Point {
        self.source.midpoint(&self.target)
    }

    /// True iff `p` lies on the closed segment.
    pub fn has_on(&self, p: &Point) -> bool {
        orientation(&self.source, &self.target, p) == Orientation::Collinear
            && between(&self.source.x, &p.x, &self.target.x)
            && between(&self.source.y, &p.y, &self.target.y)
    }

    /// Exact intersection of two closed segments.
    pub fn intersection(&self, other: &Segment) -> Option<Intersection> {
        let (p1, p2) = (&self.source, &self.target);
        let (q1, q2) = (&other.source, &other.target);
        let d1 = orientation(q1, q2, p1);
        let d2 = orientation(q1, q2, p2);
        if d1 == Orientation::Collinear && d2 == Orientation::Collinear {
            return self.collinear_overlap(other);
        }
        if d1 == d2 {
            return None;
        }
        let d3 = orientation(p1, p2, q1);
        let d4 = orientation(p1, p2, q2);
        if d3 == d4 {
            return None;
        }
        let p = if d1 == Orientation::Collinear {
            p1.clone()
        } else if d2 == Orientation::Collinear {
            p2.clone()
        } else if d3 == Orientation::Collinear {
            q1.clone()
        } else if d4 == Orientation::Collinear {
            q2.clone()
        } else {
            let r = self.vector();
            let s = other.vector();
            let t = (q1 - p1).cross(&s) / r.cross(&s);
            p1 + &(&r * &t)
        };
        Some(Intersection::Point(p))
    }

    fn collinear_overlap(&self, other: &Segment) -> Option<Intersection> {
        let r = self.vector();
        let param = |p: &Point| (p - &self.source).dot(&r);
        let (q1, q2) = (&other.source, &other.target);
        let (t1, t2) = (param(q1), param(q2));
        let (qlo, tqlo, qhi, tqhi) = if t1 <= t2 {
            (q1, t1, q2, t2)
        } else {
            (q2, t2, q1, t1)
        };
        let len = r.squared_length();
        let (lo, tlo) = if tqlo > Scalar::zero() {
            (qlo, tqlo)
        } else {
            (&self.source, Scalar::zero())
        };
        let (hi, thi) = if tqhi < len {
            (qhi, tqhi)
        } else {
            (&self.target, len)
        };
        match tlo.cmp(&thi) {
            Ordering::Greater => None,
            Ordering::Equal => Some(Intersection::Point(lo.clone())),
            Ordering::Less => Some(Intersection::Segment(Segment::new(lo.clone(), hi.clone()))),
        }
    }
}

#[inline]
fn between(a: &Scalar, x: &Scalar, b: &Scalar) -> bool {
    if a <= b {
        a <= x && x <= b
    } else {
        b <= x && x <= a
    }
}

/// Ray starting at `source` and extending along `direction` (non-zero).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ray {
    pub source: Point,
    pub direction: Vector,
}

impl Ray {
    pub fn new(source: Point, direction: Vector) -> Self {
        debug_assert!(!direction.is_zero(), "ray without direction");
        Self { source, direction }
    }

    /// Parameter `t >= 0` of the point `source + t * direction`.
    fn point_at(&self, t: &Scalar) -> Point {
        &self.source + &(&self.direction * t)
    }

    /// Exact intersection of the ray with a closed segment.
    pub fn intersection(&self, seg: &Segment) -> Option<Intersection> {
        let o = &self.source;
        let d = &self.direction;
        let sa = (&seg.source - o).cross(d);
        let sb = (&seg.target - o).cross(d);
        if sa.is_zero() && sb.is_zero() {
            // Collinear: clip the segment's parameter range to [0, inf).
            let len = d.squared_length();
            let ta = (&seg.source - o).dot(d) / &len;
            let tb = (&seg.target - o).dot(d) / &len;
            let (lo, hi) = if ta <= tb { (ta, tb) } else { (tb, ta) };
            if hi.is_negative() {
                return None;
            }
            let lo = if lo.is_negative() { Scalar::zero() } else { lo };
            if lo == hi {
                return Some(Intersection::Point(self.point_at(&lo)));
            }
            return Some(Intersection::Segment(Segment::new(
                self.point_at(&lo),
                self.point_at(&hi),
            )));
        }
        if (sa.is_positive() && sb.is_positive()) || (sa.is_negative() && sb.is_negative()) {
            return None;
        }
        let e = seg.vector();
        let t = (&seg.source - o).cross(&e) / d.cross(&e);
        if t.is_negative() {
            return None;
        }
        let p = if sa.is_zero() {
            seg.source.clone()
        } else if sb.is_zero() {
            seg.target.clone()
        } else {
            self.point_at(&t)
        };
        Some(Intersection::Point(p))
    }
}

/// Direction of a non-zero vector; equality means "positive multiple".
#[derive(Clone, Debug)]
pub struct Direction(pub Vector);

impl Direction {
    pub fn from_points(source: &Point, target: &Point) -> Self {
        Direction(target - source)
    }

    /// 0 for angles in [0, pi), 1 for [pi, 2 pi).
    fn half(&self) -> u8 {
        let v = &self.0;
        if v.y.is_positive() || (v.y.is_zero() && v.x.is_positive()) {
            0
        } else {
            1
        }
    }

    /// Compares the angles both directions make with the positive x-axis.
    pub fn cmp_angle(&self, other: &Direction) -> Ordering {
        match self.half().cmp(&other.half()) {
            Ordering::Equal => {
                let c = self.0.cross(&other.0);
                if c.is_positive() {
                    Ordering::Less
                } else if c.is_negative() {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
            o => o,
        }
    }

    /// True iff `self` is strictly counterclockwise between `d1` and `d2`.
    /// For `d1 == d2` every direction except `d1` qualifies.
    pub fn counterclockwise_in_between(&self, d1: &Direction, d2: &Direction) -> bool {
        let lt = |a: &Direction, b: &Direction| a.cmp_angle(b) == Ordering::Less;
        let le = |a: &Direction, b: &Direction| a.cmp_angle(b) != Ordering::Greater;
        if lt(d1, self) {
            lt(self, d2) || le(d2, d1)
        } else {
            lt(self, d2) && le(d2, d1)
        }
    }

    /// Like [`Self::counterclockwise_in_between`] but also accepts `d1` and `d2`.
    pub fn counterclockwise_in_between_or_equal(&self, d1: &Direction, d2: &Direction) -> bool {
        self == d1 || self == d2 || self.counterclockwise_in_between(d1, d2)
    }
}

impl PartialEq for Direction {
    fn eq(&self, other: &Self) -> bool {
        self.0.cross(&other.0).is_zero() && self.0.dot(&other.0).is_positive()
    }
}

impl Eq for Direction {}
