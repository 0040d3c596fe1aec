//! Solve a directory of `.pol` files and tabulate the outcomes.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use aagp::observer::Discard;
use aagp::{solve_with, PatternKind, SolverCfg};
use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::{info, warn};

use crate::load_polygon;

/// One line of the batch summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchRow {
    pub name: String,
    pub vertices: usize,
    pub solved: bool,
    pub steps: usize,
    pub splits: [usize; 7],
}

/// `.pol` files directly inside `dir`, sorted by name.
pub fn instance_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "pol") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Solve every instance. Files that fail to load or abort the solver are
/// logged and skipped.
pub fn run_batch(dir: &Path, cfg: &SolverCfg) -> Result<Vec<BatchRow>> {
    let files = instance_files(dir)?;
    let mut rows = Vec::with_capacity(files.len());
    for path in &files {
        let (name, polygon) = match load_polygon(path) {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping instance");
                continue;
            }
        };
        match solve_with(&polygon, cfg, &mut Discard) {
            Ok(sol) => rows.push(BatchRow {
                name,
                vertices: polygon.len(),
                solved: sol.is_solved(),
                steps: sol.stats.steps,
                splits: sol.stats.splits_by_pattern,
            }),
            Err(err) => warn!(name = %name, error = %err, "solve aborted"),
        }
    }
    info!(
        instances = files.len(),
        solved = rows.iter().filter(|r| r.solved).count(),
        "batch done"
    );
    Ok(rows)
}

/// Summary table: name, vertices, solved, steps, then one column per pattern.
pub fn summary_frame(rows: &[BatchRow]) -> PolarsResult<DataFrame> {
    let as_u64 = |f: &dyn Fn(&BatchRow) -> usize| -> Vec<u64> {
        rows.iter().map(|r| f(r) as u64).collect()
    };
    let mut df = df!(
        "name" => rows.iter().map(|r| r.name.clone()).collect::<Vec<_>>(),
        "vertices" => as_u64(&|r| r.vertices),
        "solved" => rows.iter().map(|r| r.solved).collect::<Vec<_>>(),
        "steps" => as_u64(&|r| r.steps),
    )?;
    for kind in PatternKind::ALL {
        let i = usize::from(kind.id());
        let col = Series::new(kind.name().into(), as_u64(&|r| r.splits[i]));
        df.with_column(col)?;
    }
    Ok(df)
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
