//! Two edges `e1 = (a, b)` and `e2 = (s, t)` that can be cross-connected by
//! `b -> s` and `t -> a` into a convex quadrilateral coverable within 30
//! degrees: cut the quadrilateral out, leaving the two sides.

use crate::error::Result;
use crate::geom::{segment_inside, split, split_at};
use crate::kernel::{collinear, Polygon, Segment};

use super::{quadrilateral_coverable, Builder, Cut, PatternKind};

pub(super) fn attempt(fragment: &Polygon) -> Result<Option<Cut>> {
    let n = fragment.len();
    if n < 6 {
        return Ok(None);
    }
    for e1 in fragment.cursors() {
        let (a, b) = (fragment.point(e1), fragment.point(e1.next()));
        for k in 3..=(n - 3) {
            let e2 = e1 + k as isize;
            let (s, t) = (fragment.point(e2), fragment.point(e2.next()));
            if collinear(a, b, s) || collinear(a, b, t) {
                continue;
            }
            let seg1 = Segment::new(b.clone(), s.clone());
            let seg2 = Segment::new(t.clone(), a.clone());
            if !(segment_inside(fragment, &seg1) && segment_inside(fragment, &seg2)) {
                continue;
            }
            let quad = Polygon::new(vec![a.clone(), b.clone(), s.clone(), t.clone()]);
            if !(quad.is_convex() && quadrilateral_coverable(&quad)) {
                continue;
            }

            let bld = Builder::new(PatternKind::Duct, fragment, e1);
            let first = split(fragment, e1.next(), e2);
            let mut pieces = first.right;
            let mut rest = first.left;
            let duct_side = bld.take_piece(&mut rest, &[t, a])?;
            let second = split_at(&duct_side, t, a)
                .ok_or_else(|| bld.degenerate("second duct edge lost after first cut"))?;
            pieces.extend(second.right);
            pieces.extend(rest);
            return bld.cut(pieces, second.left, vec![seg1, seg2]);
        }
    }
    Ok(None)
}
