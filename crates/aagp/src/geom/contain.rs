//! Does a segment stay inside a polygon?
//!
//! Touching the boundary is allowed, crossing it is not. Every edge is
//! intersected with the probe and the contact is classified:
//! - a contact at a probe endpoint is a touch;
//! - a contact at a polygon vertex is a touch iff both probe directions from
//!   that vertex lie in its closed interior cone, which for a counterclockwise
//!   polygon runs counterclockwise from the direction towards the next vertex
//!   to the direction towards the previous one;
//! - a contact in the relative interior of an edge is a crossing;
//! - a collinear overlap is fine iff wherever the probe runs past an edge end,
//!   that end is a reflex vertex.
//!
//! A probe that never crosses may still run entirely outside, so the midpoint
//! is located last.

use num::Signed;

use crate::kernel::{right_turn, BoundedSide, Direction, Intersection, Polygon, Segment};

/// True iff `seg` lies in the closed region bounded by the counterclockwise
/// polygon.
pub fn segment_inside(polygon: &Polygon, seg: &Segment) -> bool {
    for c in polygon.cursors() {
        let edge = polygon.edge(c);
        match seg.intersection(&edge) {
            None => {}
            Some(Intersection::Point(p)) => {
                if p == seg.source || p == seg.target {
                    continue;
                }
                let (d1, d2) = if p == edge.target {
                    (
                        Direction::from_points(&edge.target, polygon.point(c + 2)),
                        Direction::from_points(&edge.target, &edge.source),
                    )
                } else if p == edge.source {
                    (
                        Direction::from_points(&edge.source, &edge.target),
                        Direction::from_points(&edge.source, polygon.point(c.prev())),
                    )
                } else {
                    return false;
                };
                let towards_source = Direction::from_points(&p, &seg.source);
                let towards_target = Direction::from_points(&p, &seg.target);
                if !(towards_source.counterclockwise_in_between_or_equal(&d1, &d2)
                    && towards_target.counterclockwise_in_between_or_equal(&d1, &d2))
                {
                    return false;
                }
            }
            Some(Intersection::Segment(_)) => {
                if edge.has_on(&seg.source) && edge.has_on(&seg.target) {
                    return true;
                }
                let (back, front) = if seg.vector().dot(&edge.vector()).is_positive() {
                    (&seg.source, &seg.target)
                } else {
                    (&seg.target, &seg.source)
                };
                if !edge.has_on(back)
                    && !right_turn(polygon.point(c.prev()), &edge.source, &edge.target)
                {
                    return false;
                }
                if !edge.has_on(front)
                    && !right_turn(&edge.source, &edge.target, polygon.point(c + 2))
                {
                    return false;
                }
            }
        }
    }
    polygon.bounded_side(&seg.midpoint()) != BoundedSide::Outside
}
