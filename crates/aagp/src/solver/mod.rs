//! Worklist-driven decomposition.
//!
//! Purpose
//! - Certify that a simple polygon is coverable by floodlights of at most 30
//!   degrees, by cutting it into fragments that are trivially coverable.
//!
//! Model
//! - The worklist is a stack of fragments, each simple, counterclockwise and
//!   normalized. A step inspects the top fragment: convex fragments and
//!   fragments with fewer than 6 vertices are accepted as base cases;
//!   otherwise the configured patterns are tried in order and the first cut
//!   found replaces the fragment by its pieces.
//! - If no pattern applies, the solve stops in [`State::Unsolvable`] with that
//!   fragment as witness. This is an outcome, not an error.
//! - Every step strictly decreases `sum(k - 2)` over the worklist (`k` the
//!   fragment sizes), so an `n`-gon takes at most `n - 2` steps.

use tracing::debug;

use crate::error::{Error, Result};
use crate::geom::is_normalized;
use crate::kernel::Polygon;
use crate::observer::{Discard, Event, Observer, SplitStep};
use crate::patterns::{Cut, PatternKind};

/// Solver configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverCfg {
    /// Patterns in trial order.
    pub patterns: Vec<PatternKind>,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            patterns: PatternKind::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Active,
    Solved,
    Unsolvable,
    /// A pattern failed to carry out a cut; see [`Error::Degenerate`].
    Aborted,
}

/// Step counters of one solve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub steps: usize,
    pub base_cases: usize,
    /// Successful cuts per pattern, indexed by [`PatternKind::id`].
    pub splits_by_pattern: [usize; 7],
}

impl SolveStats {
    pub fn splits(&self) -> usize {
        self.splits_by_pattern.iter().sum()
    }

    pub fn splits_of(&self, kind: PatternKind) -> usize {
        self.splits_by_pattern[usize::from(kind.id())]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    /// The fragment no pattern could cut.
    Unsolved(Polygon),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub outcome: Outcome,
    pub stats: SolveStats,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved)
    }

    /// `(success, witness)`; the witness is empty on success.
    pub fn into_pair(self) -> (bool, Polygon) {
        match self.outcome {
            Outcome::Solved => (true, Polygon::default()),
            Outcome::Unsolved(w) => (false, w),
        }
    }
}

/// Checks the fragment invariants on solver input.
pub fn validate(polygon: &Polygon) -> Result<()> {
    if polygon.len() < 3 {
        return Err(Error::TooFewVertices(polygon.len()));
    }
    if !polygon.is_simple() {
        return Err(Error::NotSimple);
    }
    if !polygon.is_counterclockwise() {
        return Err(Error::NotCounterClockwise);
    }
    if !is_normalized(polygon) {
        return Err(Error::NotNormalized);
    }
    Ok(())
}

/// How the solver looks for a pattern in a fragment.
type Matcher = fn(PatternKind, &Polygon) -> Result<Option<Cut>>;

/// Stepwise solver over one input polygon.
pub struct Solver<'o> {
    cfg: SolverCfg,
    matcher: Matcher,
    worklist: Vec<Polygon>,
    state: State,
    witness: Option<Polygon>,
    stats: SolveStats,
    observer: &'o mut dyn Observer,
}

impl<'o> Solver<'o> {
    /// Validate `polygon` and emit [`Event::Initial`]. Invalid input is
    /// rejected before the observer hears anything.
    pub fn new(polygon: Polygon, cfg: SolverCfg, observer: &'o mut dyn Observer) -> Result<Self> {
        validate(&polygon)?;
        observer.notify(&Event::Initial(polygon.clone()));
        Ok(Self {
            cfg,
            matcher: PatternKind::attempt,
            worklist: vec![polygon],
            state: State::Active,
            witness: None,
            stats: SolveStats::default(),
            observer,
        })
    }

    /// Replace the pattern matcher, for exercising failure paths.
    #[cfg(test)]
    fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Pending fragments; the last one is processed next.
    pub fn worklist(&self) -> &[Polygon] {
        &self.worklist
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Process the top fragment. A no-op once the solver left `Active`.
    pub fn step(&mut self) -> Result<State> {
        if self.state != State::Active {
            return Ok(self.state);
        }
        let Some(fragment) = self.worklist.last().cloned() else {
            return Ok(self.close(State::Solved));
        };

        if fragment.is_convex() || fragment.len() < 6 {
            self.worklist.pop();
            self.stats.steps += 1;
            self.stats.base_cases += 1;
            debug!(size = fragment.len(), pending = self.worklist.len(), "base case");
            self.observer.notify(&Event::BaseCase(fragment));
        } else {
            match self.find_cut(&fragment) {
                Ok(Some(cut)) => self.apply(fragment, cut),
                Ok(None) => {
                    debug!(size = fragment.len(), "no pattern applies");
                    self.observer.notify(&Event::Unsolved(fragment.clone()));
                    self.witness = Some(fragment);
                    return Ok(self.close(State::Unsolvable));
                }
                Err(e) => {
                    self.close(State::Aborted);
                    return Err(e);
                }
            }
        }

        if self.worklist.is_empty() {
            return Ok(self.close(State::Solved));
        }
        Ok(State::Active)
    }

    /// Step until a terminal state.
    pub fn run(mut self) -> Result<Solution> {
        while self.step()? == State::Active {}
        let outcome = match self.witness.take() {
            Some(w) => Outcome::Unsolved(w),
            None => Outcome::Solved,
        };
        Ok(Solution {
            outcome,
            stats: self.stats,
        })
    }

    fn find_cut(&self, fragment: &Polygon) -> Result<Option<Cut>> {
        for kind in &self.cfg.patterns {
            if let Some(cut) = (self.matcher)(*kind, fragment)? {
                return Ok(Some(cut));
            }
        }
        Ok(None)
    }

    fn apply(&mut self, fragment: Polygon, cut: Cut) {
        let Cut {
            pattern,
            pieces,
            covered,
            segments,
        } = cut;
        self.worklist.pop();
        self.stats.steps += 1;
        self.stats.splits_by_pattern[usize::from(pattern.id())] += 1;
        debug!(
            pattern = pattern.name(),
            size = fragment.len(),
            pieces = pieces.len(),
            "split"
        );
        for piece in pieces {
            debug_assert!(is_normalized(&piece), "unnormalized piece {piece:?}");
            self.worklist.push(piece);
        }
        self.observer.notify(&Event::Split(SplitStep {
            fragment,
            covered,
            segments,
            pattern,
        }));
    }

    fn close(&mut self, state: State) -> State {
        self.state = state;
        self.observer.notify(&Event::Close);
        state
    }
}

/// Solve with the default pattern order and no observer.
pub fn solve(polygon: &Polygon) -> Result<Solution> {
    solve_with(polygon, &SolverCfg::default(), &mut Discard)
}

pub fn solve_with(
    polygon: &Polygon,
    cfg: &SolverCfg,
    observer: &mut dyn Observer,
) -> Result<Solution> {
    Solver::new(polygon.clone(), cfg.clone(), observer)?.run()
}

#[cfg(test)]
mod tests;
