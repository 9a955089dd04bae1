//! Reciprocal lattice and first Brillouin zone of 2D lattices.
//!
//! Pipeline (each stage is a pure function of the previous one):
//! - `lattice`: (a, b, γ) → real-space basis a1, a2 and reciprocal basis b1, b2.
//! - `sample`: finite patch `i·v1 + j·v2`, `i, j ∈ [-R, R]`.
//! - `cell`: Wigner–Seitz cell of the origin among the reciprocal samples
//!   (the first Brillouin zone), angularly ordered.
//! - `symmetry`: named points Γ, Y, B, A and their distances to Γ.
//!
//! `pipeline::compute_brillouin_zone` runs all stages and is the entry point
//! for display layers and the CLI.
//!
//! API Policy
//! - No state is retained between calls; every call recomputes from scratch.
//! - Tolerances live in `BzCfg`; call sites never hard-code them.

pub mod cell;
mod cfg;
mod error;
pub mod geom2;
pub mod lattice;
pub mod pipeline;
pub mod sample;
pub mod symmetry;
pub mod voronoi;

pub use cfg::{BzCfg, CellMethod, MAX_GRID_RANGE};
pub use error::{BzError, BzFailure, ErrorKind, Result};
pub use pipeline::{compute_brillouin_zone, compute_with_cfg, BzResult};

pub use nalgebra::Vector2 as Vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cell::{build_wigner_seitz_cell, check_zone_area, BzPolygon};
    pub use crate::lattice::{
        compute_lattice, Lattice, LatticeKind, LatticeParameters, LatticeVectors,
        ReciprocalVectors,
    };
    pub use crate::pipeline::{compute_brillouin_zone, compute_with_cfg, BzResult};
    pub use crate::sample::{sample_grid, PointCloud};
    pub use crate::symmetry::{
        extract_symmetry_points, FirstThreeVertices, SymmetryPoints, SymmetryStrategy,
    };
    pub use crate::voronoi::{VertexRef, VoronoiDiagram};
    pub use crate::{BzCfg, BzError, CellMethod};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
