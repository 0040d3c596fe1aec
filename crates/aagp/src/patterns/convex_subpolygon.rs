//! A run of at least four convex vertices starting at `cur`, extended while
//! the boundary keeps turning left: cut the run off along `end -> cur` when
//! the cap is sharp enough for its size. If the diagonal leaves exactly one
//! reflex corner in the cap, the cap is certified by the one-non-convex test
//! instead and the cut is reported as a non-convex-vertex step.

use crate::error::Result;
use crate::geom::{cosine_for_vertices, segment_inside, smallest_inner_angle_cos, split};
use crate::kernel::{left_turn, right_turn, Cursor, Polygon, Segment};

use super::{coverable_one_nonconvex, Builder, Cut, PatternKind};

pub(super) fn attempt(fragment: &Polygon) -> Result<Option<Cut>> {
    let turns_left =
        |v: Cursor| left_turn(fragment.point(v.prev()), fragment.point(v), fragment.point(v.next()));
    for c in fragment.cursors() {
        if !(turns_left(c + 1) && turns_left(c + 2)) {
            continue;
        }
        let mut end = c + 3;
        loop {
            if let Some(kind) = certify(fragment, c, end) {
                let b = Builder::new(kind, fragment, c);
                let halves = split(fragment, end, c);
                let diagonal = Segment::new(fragment.point(end).clone(), fragment.point(c).clone());
                return b.cut(halves.right, halves.left, vec![diagonal]);
            }
            if !turns_left(end) {
                break;
            }
            end = end.next();
            if end == c.prev() {
                break;
            }
        }
    }
    Ok(None)
}

/// Pattern under which the cap `cur ..= end` is certified, if any.
fn certify(fragment: &Polygon, c: Cursor, end: Cursor) -> Option<PatternKind> {
    let (first, last) = (fragment.point(c), fragment.point(end));
    let convex_at_first = !right_turn(last, first, fragment.point(c.next()));
    let convex_at_last = !right_turn(fragment.point(end.prev()), last, first);
    if !(convex_at_first || convex_at_last) {
        return None;
    }
    if !segment_inside(fragment, &Segment::new(last.clone(), first.clone())) {
        return None;
    }
    let cap = fragment.chain(c, end);
    if convex_at_first && convex_at_last {
        (smallest_inner_angle_cos(&cap) >= cosine_for_vertices(cap.len()))
            .then_some(PatternKind::ConvexSubpolygon)
    } else {
        coverable_one_nonconvex(&cap).then_some(PatternKind::NonConvexVertex)
    }
}
