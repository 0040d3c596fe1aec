//! Outward-rounded `f64` intervals.
//!
//! Only the Duct pattern needs this: it compares a sum of two arccosines with
//! `pi / 6`, which exact arithmetic cannot decide. Every operation pushes its
//! bounds a couple of ulps outwards so the true value stays enclosed even
//! though `acos` and `sqrt` from libm are not correctly rounded.

use std::f64::consts::PI;
use std::ops::{Add, Div, Neg};

const WIDEN_ULPS: usize = 2;

/// Closed interval `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self {
        debug_assert!(lo <= hi, "empty interval [{lo}, {hi}]");
        Self { lo, hi }
    }

    /// Degenerate interval holding exactly `x`.
    pub fn point(x: f64) -> Self {
        Self::new(x, x)
    }

    /// Enclosure of a value whose nearest double is `x`.
    pub fn around(x: f64) -> Self {
        Self::new(x, x).widen()
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.hi
    }

    pub fn pi() -> Self {
        Self::around(PI)
    }

    fn widen(self) -> Self {
        let (mut lo, mut hi) = (self.lo, self.hi);
        for _ in 0..WIDEN_ULPS {
            lo = step_down(lo);
            hi = step_up(hi);
        }
        Self { lo, hi }
    }

    pub fn clamp(self, min: f64, max: f64) -> Self {
        Self::new(self.lo.clamp(min, max), self.hi.clamp(min, max))
    }

    pub fn sqrt(self) -> Self {
        Self::new(self.lo.max(0.0).sqrt(), self.hi.max(0.0).sqrt()).widen()
    }

    /// `acos` is decreasing, so the bounds swap.
    pub fn acos(self) -> Self {
        let c = self.clamp(-1.0, 1.0);
        let w = Self::new(c.hi.acos(), c.lo.acos()).widen();
        Self::new(w.lo.max(0.0), w.hi)
    }
}

impl Add for Interval {
    type Output = Interval;
    fn add(self, rhs: Interval) -> Interval {
        Interval::new(self.lo + rhs.lo, self.hi + rhs.hi).widen()
    }
}

impl Div<f64> for Interval {
    type Output = Interval;
    /// Division by a positive constant.
    fn div(self, rhs: f64) -> Interval {
        debug_assert!(rhs > 0.0);
        Interval::new(self.lo / rhs, self.hi / rhs).widen()
    }
}

impl Neg for Interval {
    type Output = Interval;
    fn neg(self) -> Interval {
        Interval::new(-self.hi, -self.lo)
    }
}

fn step_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

fn step_down(x: f64) -> f64 {
    -step_up(-x)
}
