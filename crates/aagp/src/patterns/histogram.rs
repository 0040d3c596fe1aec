//! A reflex vertex whose two edge extensions land on the same edge: cut
//! along both extensions. The two pieces overlap in the wedge between the
//! extensions, so nothing is covered by this step alone.

use crate::error::Result;
use crate::geom::cast_ray;
use crate::kernel::{right_turn, Polygon, Ray, Segment};

use super::{Builder, Cut, PatternKind};

pub(super) fn attempt(fragment: &Polygon) -> Result<Option<Cut>> {
    for c in fragment.cursors() {
        let (prev, cur, next) = (
            fragment.point(c.prev()),
            fragment.point(c),
            fragment.point(c.next()),
        );
        if !right_turn(prev, cur, next) {
            continue;
        }
        let Some(hp) = cast_ray(fragment, &Ray::new(cur.clone(), cur - prev)) else {
            continue;
        };
        let Some(hn) = cast_ray(fragment, &Ray::new(cur.clone(), cur - next)) else {
            continue;
        };
        if hp.edge != hn.edge {
            continue;
        }

        let b = Builder::new(PatternKind::Histogram, fragment, c);
        let mut behind = fragment.chain(hp.edge.next(), c.prev());
        behind.push(hp.point.clone());
        let mut ahead = fragment.chain(c.next(), hp.edge);
        ahead.push(hn.point.clone());
        let segments = vec![
            Segment::new(cur.clone(), hp.point),
            Segment::new(cur.clone(), hn.point),
        ];
        return b.cut(vec![behind, ahead], Vec::new(), segments);
    }
    Ok(None)
}
