use std::fs;
use std::path::{Path, PathBuf};

use aagp::geom::normalize;
use aagp::io::{format_pol, parse_pol};
use aagp::observer::{Discard, Observer};
use aagp::random::{draw_polygon, RandomCfg, ReplayToken};
use aagp::{solve_with, PatternKind, Polygon, SolverCfg};
use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;
mod render;
mod report;

use render::Renderer;
use report::SolveReport;

#[derive(Parser)]
#[command(name = "aagp-cli")]
#[command(about = "Floodlight decomposition of simple polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one polygon and write a report (and optionally SVG frames)
    Solve(SolveArgs),
    /// Solve every .pol file in a directory and write a CSV summary
    Batch {
        dir: PathBuf,
        #[arg(long, default_value = "summary.csv")]
        out: PathBuf,
        #[command(flatten)]
        patterns: PatternArgs,
    },
    /// Write seeded random polygons as .pol files
    Generate {
        #[arg(long, default_value_t = 20)]
        vertices: usize,
        #[arg(long, default_value_t = 1000)]
        extent: i64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
        #[arg(long, default_value = "instances")]
        out: PathBuf,
    },
}

#[derive(Args)]
struct SolveArgs {
    /// Polygon file; omit together with --random
    file: Option<PathBuf>,
    /// Solve a random polygon with this many vertices instead of a file
    #[arg(long, conflicts_with = "file")]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 1000)]
    extent: i64,
    /// Output directory
    #[arg(long, short, default_value = "out")]
    out: PathBuf,
    /// Also write one SVG frame per step
    #[arg(long)]
    svg: bool,
    #[command(flatten)]
    patterns: PatternArgs,
}

#[derive(Args)]
struct PatternArgs {
    /// Comma-separated pattern names in trial order, e.g. "histogram,edge-extension"
    #[arg(long)]
    patterns: Option<String>,
}

impl PatternArgs {
    fn cfg(&self) -> Result<SolverCfg> {
        let Some(list) = &self.patterns else {
            return Ok(SolverCfg::default());
        };
        let patterns = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<PatternKind>().map_err(|e| anyhow!(e)))
            .collect::<Result<Vec<_>>>()?;
        Ok(SolverCfg { patterns })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve(args) => solve(args),
        Action::Batch { dir, out, patterns } => batch(&dir, &out, &patterns.cfg()?),
        Action::Generate {
            vertices,
            extent,
            seed,
            count,
            out,
        } => generate(RandomCfg { vertices, extent }, seed, count, &out),
    }
}

/// Read a `.pol` file, restoring orientation and dropping collinear vertices.
pub(crate) fn load_polygon(path: &Path) -> Result<(String, Polygon)> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let raw = parse_pol(&text).with_context(|| format!("parsing {}", path.display()))?;
    let polygon = normalize(&raw);
    if polygon != raw {
        tracing::info!(
            file = %path.display(),
            before = raw.len(),
            after = polygon.len(),
            "normalized input"
        );
    }
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "polygon".to_string());
    Ok((name, polygon))
}

fn solve(args: SolveArgs) -> Result<()> {
    let (name, polygon) = match (&args.file, args.random) {
        (Some(file), _) => load_polygon(file)?,
        (None, Some(n)) => {
            let cfg = RandomCfg {
                vertices: n,
                extent: args.extent,
            };
            let polygon = draw_polygon(cfg, ReplayToken::new(args.seed, 0))
                .with_context(|| format!("no {n}-gon fits in extent {}", args.extent))?;
            (format!("random_{n}_{}", args.seed), polygon)
        }
        (None, None) => bail!("give a polygon file or --random <size>"),
    };
    let cfg = args.patterns.cfg()?;
    tracing::info!(name = %name, vertices = polygon.len(), patterns = cfg.patterns.len(), "solve");

    let mut renderer = args.svg.then(|| Renderer::new(&polygon));
    let mut discard = Discard;
    let observer: &mut dyn Observer = match renderer.as_mut() {
        Some(r) => r,
        None => &mut discard,
    };
    let solution = solve_with(&polygon, &cfg, observer)?;

    let out_dir = args.out.join(&name);
    fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let input_copy = out_dir.join(format!("{name}.pol"));
    fs::write(&input_copy, format_pol(&polygon))
        .with_context(|| format!("writing {}", input_copy.display()))?;

    if let Some(r) = &renderer {
        let frames = r.write_frames(&out_dir.join("vis"), &name)?;
        tracing::info!(frames = frames.len(), "frames written");
        if let Some(svg) = r.unsolved() {
            let dir = args.out.join("unsolved");
            fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
            let path = dir.join(format!("{name}.svg"));
            fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        }
    }

    let report = SolveReport::new(&name, &polygon, &solution);
    let report_path = out_dir.join("report.json");
    report.write(&report_path)?;
    let params = serde_json::json!({
        "input": args.file.as_ref().map(|p| p.display().to_string()),
        "random": args.random,
        "seed": args.seed,
        "extent": args.extent,
        "patterns": cfg.patterns.iter().map(|k| k.name()).collect::<Vec<_>>(),
    });
    provenance::write_sidecar(&report_path, &params)?;

    tracing::info!(
        solved = report.solved,
        steps = report.steps,
        base_cases = report.base_cases,
        "done"
    );
    println!("{}", if report.solved { "Solved!" } else { "Unsolved!" });
    Ok(())
}

fn batch(dir: &Path, out: &Path, cfg: &SolverCfg) -> Result<()> {
    let rows = batch::run_batch(dir, cfg)?;
    let mut df = batch::summary_frame(&rows)?;
    batch::write_csv(&mut df, out)?;
    let params = serde_json::json!({
        "dir": dir.display().to_string(),
        "patterns": cfg.patterns.iter().map(|k| k.name()).collect::<Vec<_>>(),
    });
    provenance::write_sidecar(out, &params)?;
    println!("{df}");
    Ok(())
}

fn generate(cfg: RandomCfg, seed: u64, count: u64, out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    for index in 0..count {
        let polygon = draw_polygon(cfg, ReplayToken::new(seed, index)).with_context(|| {
            format!("no {}-gon fits in extent {}", cfg.vertices, cfg.extent)
        })?;
        let path = out.join(format!("random_{}_{seed}_{index}.pol", cfg.vertices));
        fs::write(&path, format_pol(&polygon))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    tracing::info!(count, dir = %out.display(), "generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn pattern_list_parses_in_order() {
        let args = PatternArgs {
            patterns: Some("histogram, edge_extension".to_string()),
        };
        assert_eq!(
            args.cfg().unwrap().patterns,
            [PatternKind::Histogram, PatternKind::EdgeExtension]
        );
        let bad = PatternArgs {
            patterns: Some("zigzag".to_string()),
        };
        assert!(bad.cfg().is_err());
        let none = PatternArgs { patterns: None };
        assert_eq!(none.cfg().unwrap(), SolverCfg::default());
    }

    #[test]
    fn loading_fixes_clockwise_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.pol");
        fs::write(&path, "5\n0 0\n0 2\n2 2\n2 1\n2 0\n").unwrap();
        let (name, polygon) = load_polygon(&path).unwrap();
        assert_eq!(name, "square");
        assert_eq!(polygon.len(), 4);
        assert!(polygon.is_counterclockwise());
    }

    #[test]
    fn solve_writes_report_frames_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("room.pol");
        let room = Polygon::from_ints(&[(0, 0), (10, 0), (10, 6), (6, 6), (5, 1), (4, 6), (0, 6)]);
        fs::write(&input, format_pol(&room)).unwrap();
        let out = dir.path().join("out");
        solve(SolveArgs {
            file: Some(input),
            random: None,
            seed: 0,
            extent: 1000,
            out: out.clone(),
            svg: true,
            patterns: PatternArgs { patterns: None },
        })
        .unwrap();
        assert!(out.join("room/report.json").exists());
        assert!(out.join("room/report.provenance.json").exists());
        assert!(out.join("room/vis/room_3.svg").exists());
        assert!(!out.join("unsolved").exists());
    }

    #[test]
    fn generate_then_batch() {
        let dir = tempdir().unwrap();
        let inst = dir.path().join("inst");
        let cfg = RandomCfg {
            vertices: 8,
            extent: 100,
        };
        generate(cfg, 5, 3, &inst).unwrap();
        assert_eq!(batch::instance_files(&inst).unwrap().len(), 3);
        let summary = dir.path().join("summary.csv");
        batch(&inst, &summary, &SolverCfg::default()).unwrap();
        let text = fs::read_to_string(&summary).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}
