use super::*;
use crate::kernel::{int, Point, Polygon, Ray, Scalar, Segment, Vector};
use num::{BigInt, BigRational, ToPrimitive};
use std::f64::consts::PI;

fn pt(x: i64, y: i64) -> Point {
    Point::from_ints(x, y)
}

fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
    Segment::new(pt(a.0, a.1), pt(b.0, b.1))
}

fn frac(n: i64, d: i64) -> Scalar {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn l_shape() -> Polygon {
    Polygon::from_ints(&[(0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4)])
}

#[test]
fn cosine_30_matches_float_table_and_period() {
    for k in 0..12 {
        let exact = cosine_30(k).to_f64();
        let float = (f64::from(k) * PI / 6.0).cos();
        assert!((exact - float).abs() < 1e-12, "k={k}: {exact} vs {float}");
        assert_eq!(cosine_30(k), cosine_30(k + 12));
        assert_eq!(cosine_30(k), cosine_30(k - 12));
        assert_eq!(cosine_30(k), cosine_30(-k));
    }
    assert_eq!(cosine_30(3), Cosine::zero());
    assert_eq!(cosine_30(6).signum(), -1);
    assert_eq!(cosine_30(1).square(), &frac(3, 4));
}

#[test]
fn cosine_for_vertices_caps_at_180_degrees() {
    assert_eq!(cosine_for_vertices(3), cosine_30(1));
    assert_eq!(cosine_for_vertices(5), cosine_30(3));
    assert_eq!(cosine_for_vertices(8), cosine_30(6));
    assert_eq!(cosine_for_vertices(40), cosine_30(6));
}

#[test]
fn cosines_order_exactly() {
    let o = pt(0, 0);
    let x = pt(1, 0);
    // 26.57 degrees: below 30, so the cosine is above the threshold.
    let (p21, p32, p05, pm11) = (pt(2, 1), pt(3, 2), pt(0, 5), pt(-1, 1));
    let narrow = Angle::new(&x, &o, &p21);
    // 33.69 degrees.
    let wide = Angle::new(&x, &o, &p32);
    assert!(narrow.cosine() >= cosine_30(1));
    assert!(wide.cosine() < cosine_30(1));
    assert!(wide.cosine() > cosine_30(2));

    let right = Angle::new(&x, &o, &p05);
    assert_eq!(right.cosine(), Cosine::zero());
    let obtuse = Angle::new(&x, &o, &pm11);
    assert!(obtuse.cosine() < Cosine::zero());
    assert!(obtuse.cosine() > cosine_30(6));
}

#[test]
fn angle_convexity_follows_turn_direction() {
    let poly = l_shape();
    assert!(Angle::at(&poly, poly.cursor(0)).is_convex());
    assert!(!Angle::at(&poly, poly.cursor(3)).is_convex());
}

#[test]
fn smallest_inner_angle_skips_reflex_and_right_angles() {
    let rect = Polygon::from_ints(&[(0, 0), (5, 0), (5, 1), (0, 1)]);
    assert_eq!(smallest_inner_angle_cos(&rect), Cosine::zero());
    assert_eq!(smallest_inner_angle_cos(&l_shape()), Cosine::zero());

    let tri = Polygon::from_ints(&[(0, 0), (4, 0), (0, 1)]);
    let c = smallest_inner_angle_cos(&tri);
    assert_eq!(c.signum(), 1);
    assert_eq!(c.square(), &frac(16, 17));
}

#[test]
fn interval_encloses_its_values() {
    let pi = Interval::pi();
    assert!(pi.lower() < PI && PI < pi.upper());
    let sixth = pi / 6.0;
    assert!(sixth.lower() < PI / 6.0 && PI / 6.0 < sixth.upper());

    let a = Interval::around(0.5).acos();
    assert!(a.lower() < PI / 3.0 && PI / 3.0 < a.upper());
    assert!(a.upper() - a.lower() < 1e-14);

    let s = a + a;
    assert!(s.lower() < 2.0 * PI / 3.0 && 2.0 * PI / 3.0 < s.upper());

    let c = cosine_30(1).interval();
    let root = 3f64.sqrt() / 2.0;
    assert!(c.lower() <= root && root <= c.upper());
    assert!(c.upper() <= 1.0);
}

#[test]
fn interval_acos_stays_in_range() {
    let full = Interval::new(-1.0, 1.0).acos();
    assert!(full.lower() >= 0.0);
    assert!(full.upper() >= PI);
    let one = Interval::point(1.0).acos();
    assert_eq!(one.lower(), 0.0);
}

#[test]
fn normalize_drops_collinear_and_fixes_orientation() {
    let cw_with_collinear =
        Polygon::from_ints(&[(0, 0), (0, 4), (2, 4), (4, 4), (4, 0), (2, 0)]);
    assert!(!is_normalized(&cw_with_collinear));
    let n = normalize(&cw_with_collinear);
    assert_eq!(n.len(), 4);
    assert!(n.is_counterclockwise());
    assert!(is_normalized(&n));
    assert_eq!(normalize(&n), n);
}

#[test]
fn normalize_removes_runs_of_collinear_vertices() {
    let poly = Polygon::from_ints(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 3)]);
    let n = normalize(&poly);
    assert_eq!(n, Polygon::from_ints(&[(0, 0), (3, 0), (3, 3)]));
}

#[test]
fn split_square_along_diagonal() {
    let sq = Polygon::from_ints(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
    let r = split(&sq, sq.cursor(0), sq.cursor(2));
    assert_eq!(r.right, vec![Polygon::from_ints(&[(0, 0), (2, 0), (2, 2)])]);
    assert_eq!(r.left, vec![Polygon::from_ints(&[(2, 2), (0, 2), (0, 0)])]);
}

#[test]
fn split_between_neighbours_is_no_cut() {
    let sq = Polygon::from_ints(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
    let fwd = split(&sq, sq.cursor(1), sq.cursor(2));
    assert_eq!(fwd.left, vec![sq.clone()]);
    assert!(fwd.right.is_empty());
    let back = split(&sq, sq.cursor(2), sq.cursor(1));
    assert!(back.left.is_empty());
    assert_eq!(back.right, vec![sq.clone()]);
}

#[test]
fn split_through_boundary_vertices_yields_several_pieces() {
    // Two chimneys standing on the cut line y = 2.
    let poly = Polygon::from_ints(&[
        (0, 0),
        (8, 0),
        (8, 2),
        (7, 4),
        (6, 2),
        (2, 2),
        (1, 4),
        (0, 2),
    ]);
    let r = split(&poly, poly.cursor(2), poly.cursor(7));
    assert_eq!(
        r.right,
        vec![
            Polygon::from_ints(&[(8, 2), (7, 4), (6, 2)]),
            Polygon::from_ints(&[(2, 2), (1, 4), (0, 2)]),
        ]
    );
    assert_eq!(r.left, vec![Polygon::from_ints(&[(0, 2), (0, 0), (8, 0), (8, 2)])]);
}

#[test]
fn split_skips_boundary_running_along_the_cut() {
    let house = Polygon::from_ints(&[(0, 0), (6, 0), (6, 2), (4, 2), (3, 4), (2, 2), (0, 2)]);
    let r = split(&house, house.cursor(2), house.cursor(6));
    assert_eq!(r.right, vec![Polygon::from_ints(&[(4, 2), (3, 4), (2, 2)])]);
    assert_eq!(r.left, vec![Polygon::from_ints(&[(0, 2), (0, 0), (6, 0), (6, 2)])]);
}

#[test]
fn split_at_needs_vertices() {
    let sq = Polygon::from_ints(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
    assert!(split_at(&sq, &pt(0, 0), &pt(2, 2)).is_some());
    assert!(split_at(&sq, &pt(0, 0), &pt(1, 1)).is_none());
    assert!(split_at(&sq, &pt(0, 0), &pt(0, 0)).is_none());
}

#[test]
fn segment_inside_accepts_diagonals_and_touches() {
    let l = l_shape();
    assert!(segment_inside(&l, &seg((0, 0), (4, 2))));
    assert!(segment_inside(&l, &seg((0, 0), (2, 2))));
    assert!(segment_inside(&l, &seg((1, 1), (1, 3))));
    // Grazes the reflex corner from inside.
    assert!(segment_inside(&l, &seg((4, 1), (0, 3))));
}

#[test]
fn segment_inside_rejects_crossings() {
    let l = l_shape();
    // Both ends on the boundary, middle in the notch.
    assert!(!segment_inside(&l, &seg((4, 2), (2, 4))));
    // Leaves through the reflex corner.
    assert!(!segment_inside(&l, &seg((1, 1), (3, 3))));
    // Crosses an edge in its interior.
    assert!(!segment_inside(&l, &seg((1, 3), (3, 3))));
    assert!(!segment_inside(&l, &seg((1, 1), (5, 1))));
}

#[test]
fn segment_inside_handles_collinear_overlaps() {
    let l = l_shape();
    assert!(segment_inside(&l, &seg((0, 0), (2, 0))));
    assert!(segment_inside(&l, &seg((0, 0), (4, 0))));
    // Runs along an edge and past the reflex corner into the interior.
    assert!(segment_inside(&l, &seg((3, 2), (1, 2))));
    // Runs past a convex corner to the outside.
    assert!(!segment_inside(&l, &seg((2, 0), (6, 0))));
}

#[test]
fn cast_ray_finds_nearest_edge_point() {
    let hist = Polygon::from_ints(&[(0, 0), (10, 0), (10, 6), (6, 6), (5, 1), (4, 6), (0, 6)]);
    let ray = Ray::new(pt(5, 1), &pt(5, 1) - &pt(6, 6));
    let hit = cast_ray(&hist, &ray).expect("extension hits the floor");
    assert_eq!(hit.edge, hist.cursor(0));
    assert_eq!(hit.point, Point::new(frac(24, 5), int(0)));
}

#[test]
fn cast_ray_refuses_vertex_hits_and_escapes() {
    let sq = Polygon::from_ints(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
    let corner = Ray::new(pt(1, 1), Vector::new(int(1), int(1)));
    assert_eq!(cast_ray(&sq, &corner), None);
    let side = Ray::new(pt(1, 1), Vector::new(int(1), int(0)));
    let hit = cast_ray(&sq, &side).expect("hits the right edge");
    assert_eq!(hit.edge, sq.cursor(1));
    assert_eq!(hit.point, pt(4, 1));
    let out = Ray::new(pt(5, 5), Vector::new(int(1), int(0)));
    assert_eq!(cast_ray(&sq, &out), None);
}

#[test]
fn cosine_interval_matches_float() {
    let (x, o, p) = (pt(1, 0), pt(0, 0), pt(3, 2));
    let a = Angle::new(&x, &o, &p);
    let expected = (3.0f64 / 13f64.sqrt()).acos();
    let iv = a.interval();
    assert!(iv.lower() <= expected && expected <= iv.upper());
    assert!((a.cosine().to_f64() - 3.0 / 13f64.sqrt()).abs() < 1e-15);
    assert!(a.cosine().square().to_f64().is_some());
}
