//! JSON summary of one solve.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use aagp::{Outcome, PatternKind, Polygon, Solution};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub name: String,
    pub vertices: usize,
    pub solved: bool,
    pub steps: usize,
    pub base_cases: usize,
    /// Split counts by pattern name, patterns that never fired included.
    pub splits: BTreeMap<&'static str, usize>,
    /// Exact coordinates of the unsolved fragment.
    pub witness: Option<Vec<[String; 2]>>,
}

impl SolveReport {
    pub fn new(name: &str, polygon: &Polygon, solution: &Solution) -> Self {
        let stats = &solution.stats;
        let splits = PatternKind::ALL
            .into_iter()
            .map(|k| (k.name(), stats.splits_of(k)))
            .collect();
        let witness = match &solution.outcome {
            Outcome::Solved => None,
            Outcome::Unsolved(w) => Some(
                w.vertices()
                    .iter()
                    .map(|p| [p.x.to_string(), p.y.to_string()])
                    .collect(),
            ),
        };
        Self {
            name: name.to_string(),
            vertices: polygon.len(),
            solved: solution.is_solved(),
            steps: stats.steps,
            base_cases: stats.base_cases,
            splits,
            witness,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }
}
