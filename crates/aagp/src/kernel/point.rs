//! Exact points, vectors and the orientation predicate.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector2;
use num::{BigInt, BigRational, Signed, ToPrimitive, Zero};

/// Exact coordinate type. Intersections of rational segments stay rational,
/// so no construction in the engine ever leaves this field.
pub type Scalar = BigRational;

/// Integer-valued scalar.
#[inline]
pub fn int(v: i64) -> Scalar {
    BigRational::from_integer(BigInt::from(v))
}

/// Exact 2D point.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: Scalar,
    pub y: Scalar,
}

/// Exact 2D vector (difference of two points).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: Scalar,
    pub y: Scalar,
}

impl Point {
    #[inline]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(int(x), int(y))
    }

    /// Exact conversion of finite doubles.
    pub fn from_f64(x: f64, y: f64) -> Option<Self> {
        Some(Self::new(
            BigRational::from_float(x)?,
            BigRational::from_float(y)?,
        ))
    }

    /// Nearest double approximation, for rendering and reporting only.
    pub fn to_f64(&self) -> Vector2<f64> {
        Vector2::new(
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        )
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        Point::new(
            (&self.x + &other.x) * &half,
            (&self.y + &other.y) * &half,
        )
    }

    pub fn squared_distance(&self, other: &Point) -> Scalar {
        (other - self).squared_length()
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl Vector {
    #[inline]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> Scalar {
        &self.x * &other.x + &self.y * &other.y
    }

    /// z-component of the 3D cross product; positive iff `other` is ccw of `self`.
    #[inline]
    pub fn cross(&self, other: &Vector) -> Scalar {
        &self.x * &other.y - &self.y * &other.x
    }

    #[inline]
    pub fn squared_length(&self) -> Scalar {
        self.dot(self)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<'a> Sub<&'a Point> for &'a Point {
    type Output = Vector;
    fn sub(self, rhs: &'a Point) -> Vector {
        Vector::new(&self.x - &rhs.x, &self.y - &rhs.y)
    }
}

impl<'a> Add<&'a Vector> for &'a Point {
    type Output = Point;
    fn add(self, rhs: &'a Vector) -> Point {
        Point::new(&self.x + &rhs.x, &self.y + &rhs.y)
    }
}

impl<'a> Mul<&'a Scalar> for &'a Vector {
    type Output = Vector;
    fn mul(self, rhs: &'a Scalar) -> Vector {
        Vector::new(&self.x * rhs, &self.y * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// Result of the orientation predicate for an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    LeftTurn,
    RightTurn,
    Collinear,
}

/// Orientation of `r` relative to the directed line `p -> q`.
pub fn orientation(p: &Point, q: &Point, r: &Point) -> Orientation {
    let det = (q - p).cross(&(r - p));
    if det.is_positive() {
        Orientation::LeftTurn
    } else if det.is_negative() {
        Orientation::RightTurn
    } else {
        Orientation::Collinear
    }
}

#[inline]
pub fn left_turn(p: &Point, q: &Point, r: &Point) -> bool {
    orientation(p, q, r) == Orientation::LeftTurn
}

#[inline]
pub fn right_turn(p: &Point, q: &Point, r: &Point) -> bool {
    orientation(p, q, r) == Orientation::RightTurn
}

#[inline]
pub fn collinear(p: &Point, q: &Point, r: &Point) -> bool {
    orientation(p, q, r) == Orientation::Collinear
}
