//! SVG frames of a solve, one per visible step.
//!
//! Frame rules
//! - The initial polygon and every base case get a frame of their own.
//! - A split frame shows the input in silver, the regions covered so far,
//!   the cut segments in red and the fragment that was cut. Consecutive
//!   splits of a pattern with [`PatternKind::combines_steps`] share one frame.
//! - The unsolved witness is drawn separately, for `unsolved/`.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use aagp::observer::{Event, Observer, SplitStep};
use aagp::{PatternKind, Polygon, Segment};
use anyhow::{Context, Result};

const SIZE: f64 = 500.0;
const MARGIN: f64 = 10.0;
const TEXT_OFFSET: f64 = 20.0;
const MARKER: f64 = 3.0;

/// Maps polygon coordinates into the frame, y axis pointing up.
#[derive(Clone, Copy, Debug)]
struct View {
    scale: f64,
    x_min: f64,
    y_max: f64,
}

impl View {
    fn fit(polygon: &Polygon) -> Self {
        let pts = polygon.to_f64();
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &pts {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        let span = (x_max - x_min).max(y_max - y_min);
        let scale = if span > 0.0 {
            (SIZE - 2.0 * MARGIN) / span
        } else {
            1.0
        };
        Self { scale, x_min, y_max }
    }

    fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (
            MARGIN + self.scale * (x - self.x_min),
            MARGIN + TEXT_OFFSET + self.scale * (self.y_max - y),
        )
    }
}

/// One SVG document under construction.
struct Canvas {
    view: View,
    body: String,
}

impl Canvas {
    fn new(view: View) -> Self {
        Self {
            view,
            body: String::new(),
        }
    }

    fn polygon(&mut self, polygon: &Polygon, stroke: &str, fill: &str) {
        let points: Vec<String> = polygon
            .to_f64()
            .iter()
            .map(|p| {
                let (x, y) = self.view.map(p.x, p.y);
                format!("{x:.2},{y:.2}")
            })
            .collect();
        let _ = writeln!(
            self.body,
            r#"<polygon points="{}" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#,
            points.join(" ")
        );
    }

    /// Outline plus vertex markers; the first vertex gets a square.
    fn outline(&mut self, polygon: &Polygon) {
        self.polygon(polygon, "black", "none");
        for (i, p) in polygon.to_f64().iter().enumerate() {
            let (x, y) = self.view.map(p.x, p.y);
            if i == 0 {
                let _ = writeln!(
                    self.body,
                    r#"<rect x="{:.2}" y="{:.2}" width="{MARKER}" height="{MARKER}" fill="black"/>"#,
                    x - MARKER / 2.0,
                    y - MARKER / 2.0
                );
            } else {
                let _ = writeln!(
                    self.body,
                    r#"<circle cx="{x:.2}" cy="{y:.2}" r="{MARKER}" fill="black"/>"#
                );
            }
        }
    }

    fn segment(&mut self, segment: &Segment, stroke: &str) {
        let (s, t) = (segment.source.to_f64(), segment.target.to_f64());
        let (x1, y1) = self.view.map(s.x, s.y);
        let (x2, y2) = self.view.map(t.x, t.y);
        let _ = writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="1"/>"#
        );
    }

    fn text(&mut self, text: &str) {
        let _ = writeln!(
            self.body,
            r#"<text x="5" y="15" font-size="12" fill="black">{text}</text>"#
        );
    }

    fn finish(self) -> String {
        let height = SIZE + TEXT_OFFSET;
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {SIZE} {height}\" width=\"{SIZE}\" height=\"{height}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n{}</svg>\n",
            self.body
        )
    }
}

/// Split frame kept open while the same combining pattern keeps firing.
struct OpenFrame {
    pattern: PatternKind,
    fragment: Polygon,
    canvas: Canvas,
}

/// Observer turning solver events into SVG frames.
pub struct Renderer {
    view: View,
    initial: Polygon,
    covered: Vec<Polygon>,
    open: Option<OpenFrame>,
    frames: Vec<String>,
    unsolved: Option<String>,
}

impl Renderer {
    pub fn new(polygon: &Polygon) -> Self {
        Self {
            view: View::fit(polygon),
            initial: polygon.clone(),
            covered: Vec::new(),
            open: None,
            frames: Vec::new(),
            unsolved: None,
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn unsolved(&self) -> Option<&str> {
        self.unsolved.as_deref()
    }

    /// Write `<name>_<k>.svg` into `dir`.
    pub fn write_frames(&self, dir: &Path, name: &str) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let mut paths = Vec::with_capacity(self.frames.len());
        for (k, svg) in self.frames.iter().enumerate() {
            let path = dir.join(format!("{name}_{k}.svg"));
            fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
            paths.push(path);
        }
        Ok(paths)
    }

    /// Canvas with the input in silver and everything covered so far.
    fn backdrop(&self) -> Canvas {
        let mut canvas = Canvas::new(self.view);
        canvas.polygon(&self.initial, "silver", "none");
        for c in &self.covered {
            canvas.polygon(c, "silver", "silver");
        }
        canvas
    }

    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            self.save(open);
        }
    }

    fn save(&mut self, open: OpenFrame) {
        let OpenFrame {
            fragment,
            mut canvas,
            ..
        } = open;
        canvas.outline(&fragment);
        self.frames.push(canvas.finish());
    }

    fn split(&mut self, step: &SplitStep) {
        let continues = matches!(&self.open, Some(o) if o.pattern == step.pattern);
        if !continues {
            self.flush();
            let mut canvas = self.backdrop();
            canvas.text(step.pattern.description());
            self.open = Some(OpenFrame {
                pattern: step.pattern,
                fragment: step.fragment.clone(),
                canvas,
            });
        }
        self.covered.extend(step.covered.iter().cloned());
        let Some(mut open) = self.open.take() else {
            return;
        };
        for s in &step.segments {
            open.canvas.segment(s, "red");
        }
        if step.pattern.combines_steps() {
            self.open = Some(open);
        } else {
            self.save(open);
        }
    }
}

impl Observer for Renderer {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Initial(p) => {
                self.flush();
                let mut canvas = Canvas::new(self.view);
                canvas.outline(p);
                canvas.text("Initial polygon");
                self.frames.push(canvas.finish());
            }
            Event::BaseCase(p) => {
                self.flush();
                let mut canvas = self.backdrop();
                canvas.outline(p);
                canvas.text("Base case");
                self.frames.push(canvas.finish());
                self.covered.push(p.clone());
            }
            Event::Split(step) => self.split(step),
            Event::Unsolved(p) => {
                self.flush();
                let mut canvas = Canvas::new(View::fit(p));
                canvas.outline(p);
                canvas.text("Unsolved");
                self.unsolved = Some(canvas.finish());
            }
            Event::Close => self.flush(),
        }
    }
}
