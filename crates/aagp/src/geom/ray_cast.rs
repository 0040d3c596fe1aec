//! First boundary point hit by a ray shot from a polygon vertex.

use num::Signed;

use crate::kernel::{Cursor, Intersection, Point, Polygon, Ray, Scalar};

/// Nearest proper boundary hit of a ray.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RayHit {
    /// Edge `edge -> edge + 1` containing `point` in its relative interior.
    pub edge: Cursor,
    pub point: Point,
}

/// Nearest intersection of `ray` with the boundary beyond its source.
///
/// Hits at the ray source itself are ignored; a collinear overlap counts as a
/// hit at its near end. `None` if the ray escapes, or if the nearest hit is a
/// polygon vertex: grazing a vertex does not certify where the ray leaves the
/// polygon, so such rays are not used for cuts.
pub fn cast_ray(polygon: &Polygon, ray: &Ray) -> Option<RayHit> {
    let mut best: Option<(Scalar, Cursor, Point)> = None;
    for c in polygon.cursors() {
        let edge = polygon.edge(c);
        let near = match ray.intersection(&edge) {
            None => continue,
            Some(Intersection::Point(p)) => p,
            Some(Intersection::Segment(s)) => s.source,
        };
        let t = (&near - &ray.source).dot(&ray.direction);
        if !t.is_positive() {
            continue;
        }
        if best.as_ref().map_or(true, |(bt, _, _)| &t < bt) {
            best = Some((t, c, near));
        }
    }
    let (_, edge, point) = best?;
    if polygon.vertices().contains(&point) {
        return None;
    }
    Some(RayHit { edge, point })
}
