//! 2D half-plane geometry used by the bisector cell route.
//!
//! Purpose
//! - Ordered H-representation (`HalfPlanes`): unit normals, angle-sorted,
//!   parallels coalesced, with an intersection that reports `Empty`,
//!   `Unbounded` or the CCW vertex list explicitly.
//! - Small polygon helpers (signed area, angular ordering about a center)
//!   shared with the Voronoi route.
//!
//! Code cross-refs: `cell::build_wigner_seitz_cell`, `voronoi::VoronoiDiagram`

mod halfplanes;
mod types;
mod util;

pub use halfplanes::{HalfPlanes, Intersection};
pub use types::Hs2;
pub use util::{angle_about, dedup_cyclic, polygon_area, sort_by_angle};
