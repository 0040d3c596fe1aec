//! Cutting a polygon along a diagonal between two of its vertices.

use crate::kernel::{Cursor, Point, Polygon, Segment};

/// Pieces on either side of the directed cut `v1 -> v2`.
///
/// `right` holds the pieces bounded by the boundary walk `v1 .. v2`, `left`
/// those bounded by `v2 .. v1`. A side has more than one piece when the cut
/// runs through further boundary vertices. Pieces are simple but neither
/// oriented nor normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitResult {
    pub left: Vec<Polygon>,
    pub right: Vec<Polygon>,
}

/// Split `polygon` along the segment between vertices `v1` and `v2`.
///
/// The segment must lie inside the polygon. Adjacent vertices admit no cut:
/// the whole polygon is returned on one side.
pub fn split(polygon: &Polygon, v1: Cursor, v2: Cursor) -> SplitResult {
    debug_assert!(v1 != v2, "cut needs two distinct vertices");
    if v2 == v1.next() {
        return SplitResult {
            left: vec![polygon.clone()],
            right: Vec::new(),
        };
    }
    if v1 == v2.next() {
        return SplitResult {
            left: Vec::new(),
            right: vec![polygon.clone()],
        };
    }
    SplitResult {
        left: right_side(polygon, v2, v1),
        right: right_side(polygon, v1, v2),
    }
}

/// Same as [`split`], with the cut given by its endpoints. `None` if either
/// point is not a vertex of `polygon`.
pub fn split_at(polygon: &Polygon, p1: &Point, p2: &Point) -> Option<SplitResult> {
    let v1 = polygon.locate(p1)?;
    let v2 = polygon.locate(p2)?;
    (v1 != v2).then(|| split(polygon, v1, v2))
}

/// Walk `v1 ..= v2`, closing a piece each time the walk returns to the cut
/// after leaving it.
fn right_side(polygon: &Polygon, v1: Cursor, v2: Cursor) -> Vec<Polygon> {
    let cut = Segment::new(polygon.point(v1).clone(), polygon.point(v2).clone());
    let mut pieces = Vec::new();
    let mut begin = v1;
    let mut on_cut = true;
    let mut cur = v1;
    while cur != v2 {
        cur = cur.next();
        if cut.has_on(polygon.point(cur)) {
            if !on_cut {
                pieces.push(polygon.chain(begin, cur));
                on_cut = true;
            }
            begin = cur;
        } else {
            on_cut = false;
        }
    }
    pieces
}
