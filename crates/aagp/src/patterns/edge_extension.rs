//! Extend an edge through its reflex endpoint until it hits the boundary.
//! If the region cut off ahead of the extension is convex and sharp enough
//! for its size, it is covered and the rest stays in the worklist.
//!
//! Extensions of incoming edges are tried for every vertex before
//! extensions of outgoing edges.

use crate::error::Result;
use crate::geom::{cast_ray, cosine_for_vertices, smallest_inner_angle_cos};
use crate::kernel::{right_turn, Polygon, Ray, Segment};

use super::{Builder, Cut, PatternKind};

pub(super) fn attempt(fragment: &Polygon) -> Result<Option<Cut>> {
    for reverse in [false, true] {
        for c in fragment.cursors() {
            let cur = fragment.point(c);
            if !right_turn(fragment.point(c.prev()), cur, fragment.point(c.next())) {
                continue;
            }
            let behind = if reverse { c.next() } else { c.prev() };
            let ray = Ray::new(cur.clone(), cur - fragment.point(behind));
            let Some(hit) = cast_ray(fragment, &ray) else {
                continue;
            };
            let (mut cap, mut remaining) = if reverse {
                (fragment.chain(hit.edge.next(), c), fragment.chain(c.next(), hit.edge))
            } else {
                (fragment.chain(c, hit.edge), fragment.chain(hit.edge.next(), c.prev()))
            };
            cap.push(hit.point.clone());
            if !(cap.is_convex() && smallest_inner_angle_cos(&cap) >= cosine_for_vertices(cap.len())) {
                continue;
            }
            remaining.push(hit.point.clone());
            let b = Builder::new(PatternKind::EdgeExtension, fragment, c);
            return b.cut(vec![remaining], vec![cap], vec![Segment::new(cur.clone(), hit.point)]);
        }
    }
    Ok(None)
}
