//! Pipeline configuration (grid range, tolerances, cell construction route).
//!
//! Defaults reproduce the reference behaviour: R = 4, `isclose(area, 0)` with
//! an absolute tolerance of 1e-8, Voronoi route for the cell.
//! `grid_range` above `MAX_GRID_RANGE` is rejected by the pipeline.

use serde::{Deserialize, Serialize};

/// How the Wigner–Seitz cell of the origin is obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellMethod {
    /// Full planar Voronoi diagram of the samples, then the origin's region.
    #[default]
    Voronoi,
    /// Intersection of the perpendicular-bisector half-planes around the origin.
    Bisector,
}

/// Configuration for a single pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BzCfg {
    /// Half-width R of the integer sampling window `[-R, R]²`.
    pub grid_range: u32,
    /// Absolute tolerance for `area ≈ 0` (degenerate basis).
    pub eps_area: f64,
    /// Relative tolerance for merging coincident Voronoi vertices; scaled by
    /// the largest sample norm.
    pub eps_merge: f64,
    /// Relative tolerance for lattice-kind classification (lengths and cos γ).
    pub eps_kind: f64,
    /// Relative tolerance between the zone area and `(2π)² / |area|`. A larger
    /// zone means a neighbour outside the window was missed.
    pub eps_zone: f64,
    /// Cell construction route.
    pub method: CellMethod,
}

/// Largest accepted grid range: `(2·1024 + 1)²` ≈ 4.2M samples.
pub const MAX_GRID_RANGE: u32 = 1024;

impl Default for BzCfg {
    fn default() -> Self {
        Self {
            grid_range: 4,
            eps_area: 1e-8,
            eps_merge: 1e-9,
            eps_kind: 1e-6,
            eps_zone: 1e-6,
            method: CellMethod::Voronoi,
        }
    }
}

impl BzCfg {
    /// Set the sampling half-width R.
    #[inline]
    pub fn with_grid_range(mut self, grid_range: u32) -> Self {
        self.grid_range = grid_range;
        self
    }
    /// Set the absolute degeneracy tolerance.
    #[inline]
    pub fn with_eps_area(mut self, eps_area: f64) -> Self {
        self.eps_area = eps_area;
        self
    }
    /// Set the relative vertex-merge tolerance.
    #[inline]
    pub fn with_eps_merge(mut self, eps_merge: f64) -> Self {
        self.eps_merge = eps_merge;
        self
    }
    /// Set the relative zone-area tolerance.
    #[inline]
    pub fn with_eps_zone(mut self, eps_zone: f64) -> Self {
        self.eps_zone = eps_zone;
        self
    }
    #[inline]
    pub fn with_method(mut self, method: CellMethod) -> Self {
        self.method = method;
        self
    }
}
