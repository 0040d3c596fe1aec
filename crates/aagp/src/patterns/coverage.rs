//! Coverability certificates shared by several patterns.

use crate::geom::{
    cosine_30, cosine_for_vertices, segment_inside, smallest_inner_angle_cos, Angle, Interval,
};
use crate::kernel::{Polygon, Segment};

/// A region with at most one reflex vertex is coverable if some convex
/// vertex is sharp enough for the region's size and sees every other vertex.
pub(crate) fn coverable_one_nonconvex(candidate: &Polygon) -> bool {
    let size = candidate.len();
    let bound = cosine_for_vertices(size);
    candidate.cursors().any(|f| {
        let angle = Angle::at(candidate, f);
        if !angle.is_convex() || angle.cosine() < bound {
            return false;
        }
        let light = candidate.point(f);
        (2..size.saturating_sub(1)).all(|k| {
            let seen = candidate.point(f + k as isize);
            segment_inside(candidate, &Segment::new(light.clone(), seen.clone()))
        })
    })
}

/// A convex quadrilateral `p1 p2 p3 p4` is coverable by one 30 degree
/// floodlight when one corner is sharp enough, or when two floodlights at
/// opposite corners together span less than 30 degrees.
pub(crate) fn quadrilateral_coverable(quad: &Polygon) -> bool {
    debug_assert_eq!(quad.len(), 4);
    if smallest_inner_angle_cos(quad) >= cosine_30(1) {
        return true;
    }
    let v = quad.vertices();
    let (p1, p2, p3, p4) = (&v[0], &v[1], &v[2], &v[3]);
    let pairs = [
        (Angle::new(p1, p2, p4), Angle::new(p3, p4, p2)),
        (Angle::new(p2, p3, p1), Angle::new(p4, p1, p3)),
        (Angle::new(p4, p2, p3), Angle::new(p2, p4, p1)),
        (Angle::new(p1, p3, p4), Angle::new(p3, p1, p2)),
    ];
    let limit = (Interval::pi() / 6.0).lower();
    pairs
        .iter()
        .any(|(a, b)| (a.interval() + b.interval()).upper() < limit)
}
