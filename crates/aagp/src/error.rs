//! Error type of the decomposition engine.
//!
//! An unsolvable fragment is a regular outcome ([`crate::solver::Outcome`]),
//! not an error.

use thiserror::Error;

use crate::kernel::Polygon;
use crate::patterns::PatternKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("polygon has {0} vertices, at least 3 are required")]
    TooFewVertices(usize),

    #[error("polygon is not simple")]
    NotSimple,

    #[error("polygon is not counterclockwise")]
    NotCounterClockwise,

    #[error("polygon has collinear consecutive vertices")]
    NotNormalized,

    /// A pattern's geometric guarantee failed to hold. Indicates a bug in
    /// the pattern or the kernel, never bad input.
    #[error("{pattern} at vertex {cursor}: {reason} (fragment {fragment:?})")]
    Degenerate {
        pattern: PatternKind,
        cursor: usize,
        reason: &'static str,
        fragment: Polygon,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
