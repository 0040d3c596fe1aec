//! Restores the fragment invariants after a cut: no collinear triple of
//! consecutive vertices, counterclockwise order.

use crate::kernel::{collinear, Polygon};

/// Drops every vertex collinear with its two original neighbours and flips
/// clockwise input. Idempotent on simple polygons.
pub fn normalize(polygon: &Polygon) -> Polygon {
    let mut out: Polygon = polygon
        .cursors()
        .filter(|&c| !collinear(polygon.point(c.prev()), polygon.point(c), polygon.point(c.next())))
        .map(|c| polygon.point(c).clone())
        .collect();
    if out.is_clockwise() {
        out.reverse_orientation();
    }
    out
}

/// Not clockwise and free of collinear consecutive triples.
pub fn is_normalized(polygon: &Polygon) -> bool {
    !polygon.is_clockwise()
        && polygon
            .cursors()
            .all(|c| !collinear(polygon.point(c.prev()), polygon.point(c), polygon.point(c.next())))
}
