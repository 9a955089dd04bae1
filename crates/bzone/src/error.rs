//! Error taxonomy of the pipeline and its serializable `{kind, message}` form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of the Brillouin-zone pipeline. No partial results are returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BzError {
    /// Real-space basis spans no area (colinear vectors or a zero length).
    #[error("lattice vectors are colinear or invalid: area = {area}")]
    DegenerateLattice { area: f64 },

    /// The origin's cell reaches infinity, or is closed only by samples beyond
    /// its true neighbours (area larger than the reciprocal cell). Either way
    /// the sample window is too small.
    #[error("Wigner-Seitz cell of sample {site} is not closed by its neighbours; increase the grid range")]
    UnboundedCell { site: usize },

    /// The resolved cell has fewer than three vertices.
    #[error("Wigner-Seitz cell has {vertices} vertices, need at least 3")]
    DegenerateCell { vertices: usize },

    /// A sample cannot be placed in the triangulation (NaN, inf, or out of range).
    #[error("sample point {index} rejected: {reason}")]
    InvalidPoint { index: usize, reason: String },

    /// Grid range beyond `MAX_GRID_RANGE`.
    #[error("grid range {range} exceeds the supported maximum {max}")]
    GridRange { range: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, BzError>;

/// Tag of a failure, for callers that report `{kind, message}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    DegenerateLattice,
    UnboundedCell,
    DegenerateCell,
    InvalidPoint,
    GridRange,
}

impl BzError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BzError::DegenerateLattice { .. } => ErrorKind::DegenerateLattice,
            BzError::UnboundedCell { .. } => ErrorKind::UnboundedCell,
            BzError::DegenerateCell { .. } => ErrorKind::DegenerateCell,
            BzError::InvalidPoint { .. } => ErrorKind::InvalidPoint,
            BzError::GridRange { .. } => ErrorKind::GridRange,
        }
    }

    /// Recoverable by re-running with a larger grid range.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        matches!(self, BzError::UnboundedCell { .. })
    }
}

/// Tagged failure record `{kind, message}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BzFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&BzError> for BzFailure {
    fn from(err: &BzError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
