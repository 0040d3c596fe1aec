//! A reflex vertex `cur` between the reflex vertices `ncp` (before) and
//! `ncn` (after): look for a diagonal `cp -> cn` with `cp` in `ncp .. cur`
//! and `cn` in `cur .. ncn` that cuts off a region whose only reflex vertex
//! is `cur` and which one floodlight covers.

use crate::error::Result;
use crate::geom::{segment_inside, split};
use crate::kernel::{left_turn, right_turn, Cursor, Polygon, Segment};

use super::{coverable_one_nonconvex, Builder, Cut, PatternKind};

/// First reflex vertex strictly after `v` in direction `dir` (+1 or -1).
/// Returns `v` itself when it is the only reflex vertex.
pub(super) fn nearest_reflex(polygon: &Polygon, v: Cursor, dir: isize) -> Cursor {
    let mut cur = v + dir;
    while cur != v
        && left_turn(
            polygon.point(cur.prev()),
            polygon.point(cur),
            polygon.point(cur.next()),
        )
    {
        cur = cur + dir;
    }
    cur
}

pub(super) fn attempt(fragment: &Polygon) -> Result<Option<Cut>> {
    for c in fragment.cursors() {
        let (prev, next) = (c.prev(), c.next());
        if !right_turn(fragment.point(prev), fragment.point(c), fragment.point(next)) {
            continue;
        }
        let ncp = nearest_reflex(fragment, c, -1);
        let ncn = nearest_reflex(fragment, c, 1);
        if ncp == prev && ncn == next {
            continue;
        }
        let only_one = ncp == c;
        let mut cp = if only_one { c + 2 } else { ncp };
        loop {
            let mut cn = if only_one { cp.prev() } else { ncn };
            loop {
                if cp != cn && !(cp == prev && cn == next) {
                    if let Some(cut) = try_diagonal(fragment, c, cp, cn)? {
                        return Ok(Some(cut));
                    }
                }
                cn = cn.prev();
                if cn == cp || cn == c {
                    break;
                }
            }
            cp = cp.next();
            if cp == c {
                break;
            }
        }
    }
    Ok(None)
}

fn try_diagonal(fragment: &Polygon, c: Cursor, cp: Cursor, cn: Cursor) -> Result<Option<Cut>> {
    let (a, z) = (fragment.point(cp), fragment.point(cn));
    if !(left_turn(z, a, fragment.point(cp.next())) && left_turn(fragment.point(cn.prev()), z, a)) {
        return Ok(None);
    }
    let diagonal = Segment::new(a.clone(), z.clone());
    if !segment_inside(fragment, &diagonal) {
        return Ok(None);
    }
    if !coverable_one_nonconvex(&fragment.chain(cp, cn)) {
        return Ok(None);
    }
    let b = Builder::new(PatternKind::NonConvexVertex, fragment, c);
    let halves = split(fragment, cp, cn);
    b.cut(halves.left, halves.right, vec![diagonal])
}
