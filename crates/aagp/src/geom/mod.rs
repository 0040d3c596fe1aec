//! Predicates and constructions the pattern matchers are built from.
//!
//! Purpose
//! - Angle admissibility: exact cosines compared against multiples of 30
//!   degrees, plus an interval fallback for sums of angles.
//! - Interior tests for candidate cuts, ray casting, cutting along a
//!   diagonal, and normalization of the resulting pieces.
//!
//! Everything here is a pure function of its arguments; fragments are
//! never mutated in place.

mod angle;
mod contain;
mod interval;
mod normalize;
mod ray_cast;
mod split;
mod threshold;

pub use angle::{smallest_inner_angle_cos, Angle, Cosine};
pub use contain::segment_inside;
pub use interval::Interval;
pub use normalize::{is_normalized, normalize};
pub use ray_cast::{cast_ray, RayHit};
pub use split::{split, split_at, SplitResult};
pub use threshold::{cosine_30, cosine_for_vertices};

#[cfg(test)]
mod tests;
