//! Entry point: (a, b, γ) → lattice, samples, first Brillouin zone, symmetry points.
//!
//! Stages run in order and each failure aborts the run; there is no partial
//! result. A zone whose area differs from `(2π)² / |area|` is rejected as
//! `UnboundedCell`. Retrying with a larger grid range after `UnboundedCell`
//! is the caller's decision (`BzError::is_retryable`).

use serde::{Deserialize, Serialize};

use crate::cell::{build_wigner_seitz_cell, check_zone_area, BzPolygon};
use crate::cfg::{BzCfg, MAX_GRID_RANGE};
use crate::error::{BzError, Result};
use crate::lattice::{compute_lattice, LatticeKind, LatticeParameters};
use crate::sample::sample_grid;
use crate::symmetry::{extract_symmetry_points, SymmetryPoints};
use crate::Vec2;

/// Everything a display layer needs to plot and annotate one lattice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BzResult {
    pub params: LatticeParameters,
    pub grid_range: u32,
    pub lattice_kind: LatticeKind,
    pub a1: Vec2<f64>,
    pub a2: Vec2<f64>,
    pub b1: Vec2<f64>,
    pub b2: Vec2<f64>,
    pub area: f64,
    pub real_space_points: Vec<Vec2<f64>>,
    pub k_space_points: Vec<Vec2<f64>>,
    pub bz_polygon: Vec<Vec2<f64>>,
    pub bz_area: f64,
    #[serde(flatten)]
    pub symmetry: SymmetryPoints,
}

impl BzResult {
    #[inline]
    pub fn dist_gy(&self) -> f64 {
        self.symmetry.dist_gy
    }
    #[inline]
    pub fn dist_gb(&self) -> f64 {
        self.symmetry.dist_gb
    }
    #[inline]
    pub fn dist_ga(&self) -> f64 {
        self.symmetry.dist_ga
    }
}

/// Run the pipeline with default tolerances and the given grid range.
pub fn compute_brillouin_zone(
    a: f64,
    b: f64,
    gamma_degrees: f64,
    grid_range: u32,
) -> Result<BzResult> {
    compute_with_cfg(
        &LatticeParameters::new(a, b, gamma_degrees),
        &BzCfg::default().with_grid_range(grid_range),
    )
}

pub fn compute_with_cfg(params: &LatticeParameters, cfg: &BzCfg) -> Result<BzResult> {
    if cfg.grid_range > MAX_GRID_RANGE {
        return Err(BzError::GridRange {
            range: cfg.grid_range,
            max: MAX_GRID_RANGE,
        });
    }
    let lattice = compute_lattice(params, cfg.eps_area)?;
    let (a1, a2) = (lattice.vectors.a1, lattice.vectors.a2);
    let (b1, b2) = (lattice.reciprocal.b1, lattice.reciprocal.b2);

    let real = sample_grid(a1, a2, cfg.grid_range);
    let kspace = sample_grid(b1, b2, cfg.grid_range);
    tracing::debug!(range = cfg.grid_range, samples = kspace.len(), "sampled");

    let zone: BzPolygon = build_wigner_seitz_cell(kspace.as_slice(), cfg)?;
    check_zone_area(&zone, lattice.reciprocal.area().abs(), cfg.eps_zone)?;
    let symmetry = extract_symmetry_points(&zone, b1, b2)?;
    let bz_area = zone.area();

    Ok(BzResult {
        params: *params,
        grid_range: cfg.grid_range,
        lattice_kind: LatticeKind::classify(params, cfg.eps_kind),
        a1,
        a2,
        b1,
        b2,
        area: lattice.vectors.area,
        real_space_points: real.points,
        k_space_points: kspace.points,
        bz_polygon: zone.vertices,
        bz_area,
        symmetry,
    })
}
