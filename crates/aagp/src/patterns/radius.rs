//! A floodlight vertex `f` that sees `prev`, `cur` and `next` of some vertex
//! `cur` within 30 degrees: cut off the quadrilateral `f prev cur next`.

use crate::error::Result;
use crate::geom::{cosine_30, segment_inside, split, split_at, Angle};
use crate::kernel::{Polygon, Segment};

use super::{Builder, Cut, PatternKind};

pub(super) fn attempt(fragment: &Polygon) -> Result<Option<Cut>> {
    let n = fragment.len();
    if n < 6 {
        return Ok(None);
    }
    let bound = cosine_30(1);
    for c in fragment.cursors() {
        let (prev, cur, next) = (
            fragment.point(c.prev()),
            fragment.point(c),
            fragment.point(c.next()),
        );
        for k in 3..=(n - 3) {
            let f = c + k as isize;
            let light = fragment.point(f);
            if Angle::new(prev, light, next).cosine() < bound {
                continue;
            }
            let to_prev = Segment::new(light.clone(), prev.clone());
            let to_next = Segment::new(light.clone(), next.clone());
            let visible = segment_inside(fragment, &to_prev)
                && segment_inside(fragment, &to_next)
                && segment_inside(fragment, &Segment::new(light.clone(), cur.clone()));
            if !visible {
                continue;
            }

            let b = Builder::new(PatternKind::Radius, fragment, c);
            let first = split(fragment, f, c.next());
            let mut pieces = first.left;
            let mut rest = first.right;
            let fan_side = b.take_piece(&mut rest, &[light, prev, cur])?;
            let second = split_at(&fan_side, light, prev)
                .ok_or_else(|| b.degenerate("floodlight lost after first cut"))?;
            pieces.extend(second.right);
            pieces.extend(rest);
            return b.cut(pieces, second.left, vec![to_prev, to_next]);
        }
    }
    Ok(None)
}
