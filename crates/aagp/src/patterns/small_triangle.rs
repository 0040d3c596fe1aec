//! A convex vertex whose ear is empty and has one angle of at most 30
//! degrees: cut the ear off along the diagonal between its neighbours.

use crate::error::Result;
use crate::geom::{cosine_30, split, Angle};
use crate::kernel::{left_turn, BoundedSide, Polygon, Segment};

use super::{Builder, Cut, PatternKind};

pub(super) fn attempt(fragment: &Polygon) -> Result<Option<Cut>> {
    let n = fragment.len();
    let bound = cosine_30(1);
    for c in fragment.cursors() {
        let (prev, cur, next) = (
            fragment.point(c.prev()),
            fragment.point(c),
            fragment.point(c.next()),
        );
        if !left_turn(prev, cur, next) {
            continue;
        }
        let ear = Polygon::new(vec![prev.clone(), cur.clone(), next.clone()]);
        let empty = (2..n.saturating_sub(1))
            .all(|k| ear.bounded_side(fragment.point(c + k as isize)) != BoundedSide::Inside);
        if !empty {
            continue;
        }
        let sharp = [
            Angle::new(cur, prev, next),
            Angle::new(prev, cur, next),
            Angle::new(prev, next, cur),
        ]
        .iter()
        .any(|a| a.cosine() >= bound);
        if !sharp {
            continue;
        }

        let b = Builder::new(PatternKind::SmallTriangle, fragment, c);
        let halves = split(fragment, c.prev(), c.next());
        return b.cut(
            halves.left,
            halves.right,
            vec![Segment::new(prev.clone(), next.clone())],
        );
    }
    Ok(None)
}
