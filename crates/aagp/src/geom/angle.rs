//! Angles at polygon vertices and exact cosine comparison.
//!
//! A cosine `dot / (|a| |b|)` is irrational in general. It is stored as a
//! signed square root `sign * sqrt(square)` with rational `square`, which
//! orders exactly and also represents every threshold from
//! [`cosine_30`](super::cosine_30) without approximation.

use std::cmp::Ordering;

use num::{Signed, ToPrimitive, Zero};

use crate::kernel::{left_turn, Cursor, Point, Polygon, Scalar};

use super::interval::Interval;

/// Exact real number of the form `sign * sqrt(square)`, `square >= 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cosine {
    sign: i8,
    square: Scalar,
}

impl Cosine {
    pub fn zero() -> Self {
        Self {
            sign: 0,
            square: Scalar::zero(),
        }
    }

    pub(crate) fn from_signed_square(sign: i8, square: Scalar) -> Self {
        if square.is_zero() || sign == 0 {
            Self::zero()
        } else {
            Self {
                sign: sign.signum(),
                square,
            }
        }
    }

    /// `dot / sqrt(norm_sq)` for `norm_sq > 0`.
    fn from_dot(dot: Scalar, norm_sq: Scalar) -> Self {
        let sign = if dot.is_positive() {
            1
        } else if dot.is_negative() {
            -1
        } else {
            0
        };
        let square = &dot * &dot / norm_sq;
        Self::from_signed_square(sign, square)
    }

    pub fn signum(&self) -> i8 {
        self.sign
    }

    /// Squared magnitude (exact).
    pub fn square(&self) -> &Scalar {
        &self.square
    }

    pub fn to_f64(&self) -> f64 {
        let mag = self.square.to_f64().unwrap_or(0.0).sqrt();
        f64::from(self.sign) * mag
    }

    /// Enclosure of the cosine in `[-1, 1]`.
    pub fn interval(&self) -> Interval {
        let sq = Interval::around(self.square.to_f64().unwrap_or(0.0)).sqrt();
        let signed = match self.sign {
            1 => sq,
            -1 => -sq,
            _ => Interval::point(0.0),
        };
        signed.clamp(-1.0, 1.0)
    }
}

impl Ord for Cosine {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                1 => self.square.cmp(&other.square),
                -1 => other.square.cmp(&self.square),
                _ => Ordering::Equal,
            },
            o => o,
        }
    }
}

impl PartialOrd for Cosine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Angle at `p2` spanned by the rays towards `p1` and `p3`.
#[derive(Clone, Debug)]
pub struct Angle<'a> {
    p1: &'a Point,
    p2: &'a Point,
    p3: &'a Point,
}

impl<'a> Angle<'a> {
    pub fn new(p1: &'a Point, p2: &'a Point, p3: &'a Point) -> Self {
        debug_assert!(p1 != p2 && p1 != p3 && p2 != p3, "angle needs three distinct points");
        Self { p1, p2, p3 }
    }

    /// Interior angle at a vertex of a polygon.
    pub fn at(polygon: &'a Polygon, c: Cursor) -> Self {
        Self::new(polygon.point(c.prev()), polygon.point(c), polygon.point(c.next()))
    }

    /// Left turn `p1 -> p2 -> p3`, i.e. a convex vertex of a CCW polygon.
    pub fn is_convex(&self) -> bool {
        left_turn(self.p1, self.p2, self.p3)
    }

    pub fn cosine(&self) -> Cosine {
        let v1 = self.p3 - self.p2;
        let v2 = self.p1 - self.p2;
        Cosine::from_dot(v1.dot(&v2), v1.squared_length() * v2.squared_length())
    }

    /// Enclosure of the angle in radians.
    pub fn interval(&self) -> Interval {
        self.cosine().interval().acos()
    }
}

/// Cosine of the smallest convex interior angle of a CCW polygon, or zero
/// when every convex angle is at least 90 degrees.
pub fn smallest_inner_angle_cos(polygon: &Polygon) -> Cosine {
    polygon
        .cursors()
        .map(|c| Angle::at(polygon, c))
        .filter(Angle::is_convex)
        .map(|a| a.cosine())
        .fold(Cosine::zero(), Ord::max)
}
