//! Exact 2D kernel: rational points, orientation, intersections, polygons.
//!
//! Everything is exact over `BigRational`. No construction needs a square
//! root; angle magnitudes are compared through squared cosines in
//! `crate::geom::angle`.

mod point;
mod polygon;
mod segment;

pub use point::{
    collinear, int, left_turn, orientation, right_turn, Orientation, Point, Scalar, Vector,
};
pub use polygon::{BoundedSide, Cursor, Polygon};
pub use segment::{Direction, Intersection, Ray, Segment};
