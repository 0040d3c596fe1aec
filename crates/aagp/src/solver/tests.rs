use super::*;
use crate::geom::{is_normalized, normalize};
use crate::io::parse_scalar;
use crate::kernel::{int, Point, Polygon, Scalar};
use crate::observer::EventLog;
use crate::random::{draw_polygon, RandomCfg, ReplayToken};
use num::Zero;
use proptest::prelude::*;

fn hexagon() -> Polygon {
    Polygon::from_ints(&[(2, 0), (4, 0), (6, 2), (4, 4), (2, 4), (0, 2)])
}

fn histogram_room() -> Polygon {
    Polygon::from_ints(&[(0, 0), (10, 0), (10, 6), (6, 6), (5, 1), (4, 6), (0, 6)])
}

/// Regular five-pointed star, outer radius 1000, inner radius 382, rounded.
fn star() -> Polygon {
    Polygon::from_ints(&[
        (0, 1000),
        (-225, 309),
        (-951, 309),
        (-363, -118),
        (-588, -809),
        (0, -382),
        (588, -809),
        (363, -118),
        (951, 309),
        (225, 309),
    ])
}

fn corridor(len: Scalar) -> Polygon {
    let p = |x: Scalar, y: i64| Point::new(x, int(y));
    Polygon::new(vec![
        p(int(0), 0),
        p(len.clone(), 0),
        p(&len + int(2), -2),
        p(&len + int(3), 3),
        p(len.clone(), 1),
        p(int(0), 1),
        p(int(-3), 3),
        p(int(-2), -2),
    ])
}

fn run_logged(poly: &Polygon, cfg: &SolverCfg) -> (Result<Solution>, EventLog) {
    let mut log = EventLog::new();
    let res = solve_with(poly, cfg, &mut log);
    (res, log)
}

fn names(log: &EventLog) -> Vec<&'static str> {
    log.events.iter().map(Event::name).collect()
}

#[test]
fn convex_hexagon_is_a_base_case() {
    let (res, log) = run_logged(&hexagon(), &SolverCfg::default());
    let sol = res.unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.stats.steps, 1);
    assert_eq!(sol.stats.base_cases, 1);
    assert_eq!(sol.stats.splits(), 0);
    assert_eq!(names(&log), ["initial", "base-case", "close"]);
    assert_eq!(sol.into_pair(), (true, Polygon::default()));
}

#[test]
fn star_terminates_within_vertex_bound() {
    let poly = star();
    let (res, log) = run_logged(&poly, &SolverCfg::default());
    let sol = res.unwrap();
    assert!(sol.stats.steps <= poly.len() - 2);
    assert_eq!(sol.stats.steps, sol.stats.base_cases + sol.stats.splits());
    assert!(sol.is_solved());
    assert_eq!(log.events.last(), Some(&Event::Close));
}

#[test]
fn histogram_fires_before_later_patterns() {
    let (res, log) = run_logged(&histogram_room(), &SolverCfg::default());
    let sol = res.unwrap();
    assert!(sol.is_solved());
    let splits: Vec<_> = log.splits().collect();
    assert_eq!(splits.len(), 1);
    assert_eq!(splits[0].pattern, PatternKind::Histogram);
    assert_eq!(splits[0].fragment, histogram_room());
    assert_eq!(splits[0].segments.len(), 2);
    assert_eq!(sol.stats.splits_of(PatternKind::Histogram), 1);
    assert_eq!(names(&log), ["initial", "split", "base-case", "base-case", "close"]);
}

#[test]
fn clockwise_input_is_rejected_without_events() {
    let mut cw = hexagon();
    cw.reverse_orientation();
    let (res, log) = run_logged(&cw, &SolverCfg::default());
    assert_eq!(res, Err(Error::NotCounterClockwise));
    assert!(log.events.is_empty());
}

#[test]
fn invalid_inputs_are_rejected() {
    let two = Polygon::from_ints(&[(0, 0), (1, 0)]);
    assert_eq!(solve(&two), Err(Error::TooFewVertices(2)));
    let bowtie = Polygon::from_ints(&[(0, 0), (2, 2), (2, 0), (0, 2)]);
    assert_eq!(solve(&bowtie), Err(Error::NotSimple));
    let collinear = Polygon::from_ints(&[(0, 0), (1, 0), (2, 0), (2, 2)]);
    assert_eq!(solve(&collinear), Err(Error::NotNormalized));
}

#[test]
fn duct_borderline_is_decided_conservatively() {
    let cfg = SolverCfg::default();
    let wide = solve_with(&corridor(int(4)), &cfg, &mut EventLog::new()).unwrap();
    assert!(wide.is_solved());
    assert_eq!(wide.stats.splits_of(PatternKind::Duct), 1);

    let border = corridor(parse_scalar("3.7320508075688772935274463415058723670").unwrap());
    let sol = solve_with(&border, &cfg, &mut EventLog::new()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.stats.splits_of(PatternKind::Duct), 0);
}

#[test]
fn empty_pattern_list_leaves_witness() {
    let cfg = SolverCfg { patterns: vec![] };
    let (res, log) = run_logged(&histogram_room(), &cfg);
    let sol = res.unwrap();
    assert_eq!(sol.outcome, Outcome::Unsolved(histogram_room()));
    assert_eq!(names(&log), ["initial", "unsolved", "close"]);
    assert_eq!(sol.stats.steps, 0);
    let (ok, witness) = sol.into_pair();
    assert!(!ok);
    assert_eq!(witness, histogram_room());
}

#[test]
fn restricted_pattern_list_is_respected() {
    let cfg = SolverCfg {
        patterns: vec![PatternKind::EdgeExtension],
    };
    let sol = solve_with(&histogram_room(), &cfg, &mut Discard).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.stats.splits_of(PatternKind::EdgeExtension), 1);
    assert_eq!(sol.stats.splits(), 1);
}

#[test]
fn stepping_exposes_worklist() {
    let mut log = EventLog::new();
    let mut solver = Solver::new(histogram_room(), SolverCfg::default(), &mut log).unwrap();
    assert_eq!(solver.state(), State::Active);
    assert_eq!(solver.worklist(), &[histogram_room()]);

    assert_eq!(solver.step(), Ok(State::Active));
    assert_eq!(solver.worklist().len(), 2);
    assert_eq!(solver.stats().splits_of(PatternKind::Histogram), 1);

    assert_eq!(solver.step(), Ok(State::Active));
    assert_eq!(solver.step(), Ok(State::Solved));
    assert!(solver.worklist().is_empty());
    // Terminal states are sticky and emit nothing further.
    assert_eq!(solver.step(), Ok(State::Solved));
    drop(solver);
    assert_eq!(names(&log).last(), Some(&"close"));
    assert_eq!(log.events.iter().filter(|e| **e == Event::Close).count(), 1);
}

#[test]
fn closures_observe_events() {
    let mut count = 0;
    let mut counter = |_: &Event| count += 1;
    solve_with(&hexagon(), &SolverCfg::default(), &mut counter).unwrap();
    assert_eq!(count, 3);
}

#[test]
fn base_case_areas_add_up() {
    let poly = star();
    let (res, log) = run_logged(&poly, &SolverCfg::default());
    assert!(res.unwrap().is_solved());
    let mut total = Scalar::zero();
    for p in log.base_cases() {
        total += p.area();
    }
    for s in log.splits() {
        for c in &s.covered {
            total += c.area();
        }
    }
    assert_eq!(total, poly.area());
}

fn forced_failure(kind: PatternKind, fragment: &Polygon) -> Result<Option<Cut>> {
    Err(Error::Degenerate {
        pattern: kind,
        cursor: 0,
        reason: "forced",
        fragment: fragment.clone(),
    })
}

#[test]
fn degenerate_cut_aborts_and_closes() {
    let mut log = EventLog::new();
    let mut solver = Solver::new(histogram_room(), SolverCfg::default(), &mut log)
        .unwrap()
        .with_matcher(forced_failure);
    let err = solver.step().unwrap_err();
    assert_eq!(
        err,
        Error::Degenerate {
            pattern: PatternKind::SmallTriangle,
            cursor: 0,
            reason: "forced",
            fragment: histogram_room(),
        }
    );
    assert_eq!(solver.state(), State::Aborted);
    assert_eq!(solver.step(), Ok(State::Aborted));
    assert_eq!(solver.worklist(), &[histogram_room()]);
    drop(solver);
    assert_eq!(names(&log), ["initial", "close"]);

    let mut log = EventLog::new();
    let solver = Solver::new(histogram_room(), SolverCfg::default(), &mut log)
        .unwrap()
        .with_matcher(forced_failure);
    assert!(matches!(solver.run(), Err(Error::Degenerate { .. })));
    assert_eq!(log.events.iter().filter(|e| **e == Event::Close).count(), 1);
}

/// Teeth of width 1 and depth 2 on a floor of height 1.
fn comb(teeth: i64) -> Polygon {
    let mut v = vec![(0, 0), (2 * teeth - 1, 0)];
    for k in (0..teeth).rev() {
        v.push((2 * k + 1, 3));
        v.push((2 * k, 3));
        if k > 0 {
            v.push((2 * k, 1));
            v.push((2 * k - 1, 1));
        }
    }
    Polygon::from_ints(&v)
}

fn cross() -> Polygon {
    Polygon::from_ints(&[
        (1, 0),
        (2, 0),
        (2, 1),
        (3, 1),
        (3, 2),
        (2, 2),
        (2, 3),
        (1, 3),
        (1, 2),
        (0, 2),
        (0, 1),
        (1, 1),
    ])
}

fn spiral() -> Polygon {
    Polygon::from_ints(&[
        (0, 0),
        (5, 0),
        (5, 5),
        (1, 5),
        (1, 2),
        (3, 2),
        (3, 3),
        (2, 3),
        (2, 4),
        (4, 4),
        (4, 1),
        (0, 1),
    ])
}

#[test]
fn orthogonal_rooms_keep_invariants_under_every_subset() {
    let rooms = [comb(2), comb(3), comb(4), cross(), spiral()];
    for poly in &rooms {
        assert!(validate(poly).is_ok(), "{poly:?}");
        assert!(solve(poly).unwrap().is_solved(), "{poly:?}");
        for mask in 1u8..128 {
            let mut discard = Discard;
            let mut solver = Solver::new(poly.clone(), pattern_subset(mask), &mut discard).unwrap();
            while solver.step().unwrap() == State::Active {
                for f in solver.worklist() {
                    assert!(f.is_simple(), "mask {mask}: not simple {f:?}");
                    assert!(f.is_counterclockwise(), "mask {mask}: not ccw {f:?}");
                    assert!(is_normalized(f), "mask {mask}: not normalized {f:?}");
                }
            }
            assert!(solver.stats().steps <= poly.len() - 2, "mask {mask}");
        }
    }
}

/// Every pattern subset, encoded as a bitmask over [`PatternKind::ALL`].
fn pattern_subset(mask: u8) -> SolverCfg {
    SolverCfg {
        patterns: PatternKind::ALL
            .into_iter()
            .filter(|k| mask & (1 << k.id()) != 0)
            .collect(),
    }
}

fn random_polygon(n: usize, extent: i64, seed: u64) -> Polygon {
    draw_polygon(RandomCfg { vertices: n, extent }, ReplayToken::new(seed, n as u64))
        .expect("extent leaves room")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn fragments_keep_invariants(
        n in 6usize..14,
        extent in prop::sample::select(vec![40i64, 1000]),
        seed in any::<u64>(),
        mask in 1u8..128,
    ) {
        let poly = random_polygon(n, extent, seed);
        let mut log = EventLog::new();
        let mut solver = Solver::new(poly.clone(), pattern_subset(mask), &mut log).unwrap();
        while solver.step().unwrap() == State::Active {
            for f in solver.worklist() {
                prop_assert!(f.is_simple(), "not simple: {:?}", f);
                prop_assert!(f.is_counterclockwise(), "not ccw: {:?}", f);
                prop_assert!(is_normalized(f), "not normalized: {:?}", f);
            }
        }
        prop_assert!(solver.stats().steps <= n - 2);
        drop(solver);
        prop_assert_eq!(log.events.last(), Some(&Event::Close));
    }

    #[test]
    fn covered_area_accounts_for_input(
        n in 6usize..14,
        seed in any::<u64>(),
        mask in 1u8..128,
    ) {
        let poly = random_polygon(n, 1000, seed);
        let mut log = EventLog::new();
        let mut solver = Solver::new(poly.clone(), pattern_subset(mask), &mut log).unwrap();
        while solver.step().unwrap() == State::Active {}
        // An unsolvable fragment stays on top of the worklist, above the
        // fragments that were never examined.
        let mut total = Scalar::zero();
        if solver.state() == State::Unsolvable {
            for f in solver.worklist() {
                total += f.area();
            }
        }
        let histogram_splits = solver.stats().splits_of(PatternKind::Histogram);
        drop(solver);
        for p in log.base_cases() {
            total += p.area();
        }
        for s in log.splits() {
            for c in &s.covered {
                total += c.area();
            }
        }
        if histogram_splits == 0 {
            prop_assert_eq!(total, poly.area());
        } else {
            prop_assert!(total >= poly.area());
        }
    }

    #[test]
    fn normalize_is_idempotent(
        n in 3usize..12,
        seed in any::<u64>(),
        stride in 1usize..4,
        flip in any::<bool>(),
    ) {
        let poly = random_polygon(n, 200, seed);
        let mut noisy = Polygon::default();
        for (i, e) in poly.edges().enumerate() {
            noisy.push(e.source.clone());
            if i % stride == 0 {
                noisy.push(e.midpoint());
            }
        }
        if flip {
            noisy.reverse_orientation();
        }
        let once = normalize(&noisy);
        prop_assert_eq!(&normalize(&once), &once);
        prop_assert_eq!(&once, &poly);
    }
}
