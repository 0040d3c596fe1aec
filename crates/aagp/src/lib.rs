//! Pattern-based decomposition for the angular art gallery problem.
//!
//! A simple polygon is cut into fragments that one floodlight of at most 30
//! degrees covers each, using a fixed library of seven local patterns. A
//! successful run certifies an upper bound on the number of such floodlights
//! the polygon needs. The search is heuristic: some polygons end with a
//! fragment no pattern can cut, which is reported as an outcome, not an
//! error.
//!
//! Layout
//! - `kernel`: exact rational points, segments, rays and polygons.
//! - `geom`: angle thresholds, containment, ray casting, splitting.
//! - `patterns`: the seven matchers, in priority order.
//! - `solver`: the worklist state machine and its statistics.
//! - `observer`: events emitted by the solver.
//! - `io`, `random`: polygon files and seeded test instances.

pub mod error;
pub mod geom;
pub mod io;
pub mod kernel;
pub mod observer;
pub mod patterns;
pub mod random;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use kernel::{Point, Polygon, Scalar, Segment};
pub use patterns::PatternKind;
pub use solver::{solve, solve_with, Outcome, Solution, SolveStats, Solver, SolverCfg};

/// Common exports for callers.
pub mod prelude {
    pub use crate::geom::{is_normalized, normalize};
    pub use crate::io::{format_pol, parse_pol};
    pub use crate::kernel::{Point, Polygon, Scalar, Segment};
    pub use crate::observer::{Discard, Event, EventLog, Observer, SplitStep};
    pub use crate::patterns::{Cut, PatternKind};
    pub use crate::random::{draw_polygon, RandomCfg, ReplayToken};
    pub use crate::solver::{
        solve, solve_with, Outcome, Solution, SolveStats, Solver, SolverCfg, State,
    };
    pub use crate::{Error, Result};
}
