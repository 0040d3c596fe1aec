//! Exact cosines of multiples of 30 degrees.

use num::{BigInt, BigRational, One, Zero};

use super::angle::Cosine;

/// Exact `cos(30 k degrees)`, periodic in `k` with period 12.
pub fn cosine_30(k: i32) -> Cosine {
    let r = k.rem_euclid(12);
    let sign: i8 = if r < 4 || r > 8 { 1 } else { -1 };
    let frac = |n: i64, d: i64| BigRational::new(BigInt::from(n), BigInt::from(d));
    match r % 6 {
        0 => Cosine::from_signed_square(sign, BigRational::one()),
        1 | 5 => Cosine::from_signed_square(sign, frac(3, 4)),
        2 | 4 => Cosine::from_signed_square(sign, frac(1, 4)),
        _ => Cosine::from_signed_square(0, BigRational::zero()),
    }
}

/// Threshold for a region whose floodlight must see `vertices` corners:
/// `cos(30 * min(vertices - 2, 6))`.
pub fn cosine_for_vertices(vertices: usize) -> Cosine {
    let k = vertices.saturating_sub(2).min(6) as i32;
    cosine_30(k)
}
