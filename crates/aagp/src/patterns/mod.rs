//! The seven decomposition patterns.
//!
//! Purpose
//! - Each pattern recognizes one local configuration of a fragment that can
//!   be cut off and certified coverable by a floodlight of at most 30 degrees.
//! - A pattern never mutates its input: [`PatternKind::attempt`] returns the
//!   [`Cut`] it would perform, and the solver applies it.
//!
//! Scanning
//! - Every pattern walks the vertex (or edge) cursors once, starting at index
//!   0, and takes the first admissible configuration. No attempt is made to
//!   find a best cut.
//!
//! Order
//! - [`PatternKind::ALL`] is the fixed priority order; ids follow it.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};
use crate::geom::normalize;
use crate::kernel::{Cursor, Point, Polygon, Segment};

mod convex_subpolygon;
mod coverage;
mod duct;
mod edge_extension;
mod histogram;
mod non_convex_vertex;
mod radius;
mod small_triangle;

pub(crate) use coverage::{coverable_one_nonconvex, quadrilateral_coverable};

/// Identity of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternKind {
    SmallTriangle,
    Radius,
    Duct,
    Histogram,
    NonConvexVertex,
    ConvexSubpolygon,
    EdgeExtension,
}

impl PatternKind {
    /// Priority order used by the default solver configuration.
    pub const ALL: [PatternKind; 7] = [
        PatternKind::SmallTriangle,
        PatternKind::Radius,
        PatternKind::Duct,
        PatternKind::Histogram,
        PatternKind::NonConvexVertex,
        PatternKind::ConvexSubpolygon,
        PatternKind::EdgeExtension,
    ];

    /// Stable small identifier (position in [`Self::ALL`]).
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::SmallTriangle => "small-triangle",
            PatternKind::Radius => "radius",
            PatternKind::Duct => "duct",
            PatternKind::Histogram => "histogram",
            PatternKind::NonConvexVertex => "non-convex-vertex",
            PatternKind::ConvexSubpolygon => "convex-subpolygon",
            PatternKind::EdgeExtension => "edge-extension",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PatternKind::SmallTriangle => "Small triangle pattern",
            PatternKind::Radius => "Radius pattern",
            PatternKind::Duct => "Duct pattern",
            PatternKind::Histogram => "Histogram pattern",
            PatternKind::NonConvexVertex => "One non-convex vertex subpolygon pattern",
            PatternKind::ConvexSubpolygon => "Convex subpolygon pattern",
            PatternKind::EdgeExtension => "Edge extension pattern",
        }
    }

    /// Whether consecutive steps of this pattern are drawn as one frame.
    pub fn combines_steps(self) -> bool {
        matches!(
            self,
            PatternKind::SmallTriangle
                | PatternKind::NonConvexVertex
                | PatternKind::ConvexSubpolygon
        )
    }

    /// Look for this pattern in `fragment` (simple, CCW, normalized).
    ///
    /// `Ok(None)` means the pattern does not apply. An error means a
    /// configuration was accepted but the cut could not be carried out.
    pub fn attempt(self, fragment: &Polygon) -> Result<Option<Cut>> {
        let cut = match self {
            PatternKind::SmallTriangle => small_triangle::attempt(fragment),
            PatternKind::Radius => radius::attempt(fragment),
            PatternKind::Duct => duct::attempt(fragment),
            PatternKind::Histogram => histogram::attempt(fragment),
            PatternKind::NonConvexVertex => non_convex_vertex::attempt(fragment),
            PatternKind::ConvexSubpolygon => convex_subpolygon::attempt(fragment),
            PatternKind::EdgeExtension => edge_extension::attempt(fragment),
        }?;
        if cut.is_none() {
            trace!(pattern = self.name(), size = fragment.len(), "no match");
        }
        Ok(cut)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| format!("unknown pattern '{s}'"))
    }
}

/// A cut found by a pattern, ready to be applied to the worklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cut {
    /// Pattern the cut is reported under. Convex-subpolygon reports its
    /// near-convex caps as [`PatternKind::NonConvexVertex`].
    pub pattern: PatternKind,
    /// Replacement fragments, normalized, in push order.
    pub pieces: Vec<Polygon>,
    /// Regions certified coverable by this cut.
    pub covered: Vec<Polygon>,
    /// One or two cut segments.
    pub segments: Vec<Segment>,
}

/// Context for building a cut out of one fragment.
struct Builder<'a> {
    pattern: PatternKind,
    fragment: &'a Polygon,
    at: Cursor,
}

impl<'a> Builder<'a> {
    fn new(pattern: PatternKind, fragment: &'a Polygon, at: Cursor) -> Self {
        Self {
            pattern,
            fragment,
            at,
        }
    }

    fn degenerate(&self, reason: &'static str) -> Error {
        Error::Degenerate {
            pattern: self.pattern,
            cursor: self.at.index(),
            reason,
            fragment: self.fragment.clone(),
        }
    }

    /// Normalize replacement pieces; every piece must still be a polygon.
    fn normalized(&self, pieces: Vec<Polygon>) -> Result<Vec<Polygon>> {
        pieces
            .iter()
            .map(|p| {
                let q = normalize(p);
                if q.len() < 3 {
                    Err(self.degenerate("cut produced a piece without area"))
                } else {
                    Ok(q)
                }
            })
            .collect()
    }

    /// Remove and return the piece having all of `points` as vertices.
    fn take_piece(&self, pieces: &mut Vec<Polygon>, points: &[&Point]) -> Result<Polygon> {
        let idx = pieces
            .iter()
            .position(|p| points.iter().all(|q| p.locate(q).is_some()))
            .ok_or_else(|| self.degenerate("cut lost the vertices of the next cut"))?;
        Ok(pieces.remove(idx))
    }

    fn cut(
        &self,
        pieces: Vec<Polygon>,
        covered: Vec<Polygon>,
        segments: Vec<Segment>,
    ) -> Result<Option<Cut>> {
        Ok(Some(Cut {
            pattern: self.pattern,
            pieces: self.normalized(pieces)?,
            covered,
            segments,
        }))
    }
}
