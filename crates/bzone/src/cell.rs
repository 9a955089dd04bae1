//! Wigner–Seitz cell of the origin among reciprocal samples (first Brillouin zone).
//!
//! Two routes, selected by `BzCfg::method`:
//! - `Voronoi`: full diagram of the samples, then the region of the sample
//!   closest to the origin. A region touching infinity is `UnboundedCell`.
//! - `Bisector`: intersection of the bisector half-planes between that sample
//!   and every other one.
//!
//! Both return the vertices sorted by ascending `atan2` about the generating
//! sample, which yields a simple counterclockwise boundary for a convex cell.
//!
//! A finite window can also close the cell with samples beyond the true
//! neighbours; the cell is then too large. `check_zone_area` catches that
//! against the known reciprocal cell area.

use serde::{Deserialize, Serialize};

use crate::cfg::{BzCfg, CellMethod};
use crate::error::{BzError, Result};
use crate::geom2::{polygon_area, sort_by_angle, HalfPlanes, Hs2, Intersection};
use crate::sample::extent;
use crate::voronoi::{VertexRef, VoronoiDiagram};
use crate::Vec2;

/// Angularly sorted cell boundary (at least three vertices).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BzPolygon {
    pub vertices: Vec<Vec2<f64>>,
    /// The sample the cell belongs to (the origin for lattice input).
    pub generator: Vec2<f64>,
    /// Index of `generator` in the input samples.
    pub site: usize,
}

impl BzPolygon {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Shoelace area; positive because the order is counterclockwise.
    #[inline]
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }
}

/// Index of the sample closest to the origin; first one wins on ties.
pub fn origin_index(kpoints: &[Vec2<f64>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in kpoints.iter().enumerate() {
        let d = p.norm_squared();
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Build the first Brillouin zone from reciprocal samples.
pub fn build_wigner_seitz_cell(kpoints: &[Vec2<f64>], cfg: &BzCfg) -> Result<BzPolygon> {
    let site = origin_index(kpoints).ok_or(BzError::DegenerateCell { vertices: 0 })?;
    let generator = kpoints[site];
    let tol = cfg.eps_merge * extent(kpoints);

    let mut vertices = match cfg.method {
        CellMethod::Voronoi => voronoi_cell(kpoints, site, tol)?,
        CellMethod::Bisector => bisector_cell(kpoints, site, tol)?,
    };
    if vertices.len() < 3 {
        return Err(BzError::DegenerateCell {
            vertices: vertices.len(),
        });
    }
    sort_by_angle(&mut vertices, generator);
    tracing::debug!(
        method = ?cfg.method,
        site,
        vertices = vertices.len(),
        "wigner-seitz cell"
    );
    Ok(BzPolygon {
        vertices,
        generator,
        site,
    })
}

/// Compare the zone with the reciprocal cell area `expected` (> 0).
///
/// The Wigner–Seitz cell of a full lattice tiles the plane, so its area is the
/// unit-cell area. A cell built from a truncated window only grows, so a
/// relative excess above `rel_tol` means a neighbour was missed and is
/// reported as the retryable `UnboundedCell`.
pub fn check_zone_area(zone: &BzPolygon, expected: f64, rel_tol: f64) -> Result<()> {
    let area = zone.area();
    if (area - expected).abs() <= rel_tol * expected {
        return Ok(());
    }
    tracing::debug!(area, expected, site = zone.site, "zone area mismatch");
    Err(BzError::UnboundedCell { site: zone.site })
}

fn voronoi_cell(kpoints: &[Vec2<f64>], site: usize, tol: f64) -> Result<Vec<Vec2<f64>>> {
    let diagram = VoronoiDiagram::build(kpoints, tol)?;
    if !diagram.is_bounded(site) {
        return Err(BzError::UnboundedCell { site });
    }
    let region = diagram
        .region_of(site)
        .ok_or(BzError::DegenerateCell { vertices: 0 })?;
    region
        .iter()
        .map(|r| match r {
            VertexRef::Finite(_) => diagram
                .resolve(*r)
                .ok_or(BzError::DegenerateCell { vertices: 0 }),
            VertexRef::AtInfinity => Err(BzError::UnboundedCell { site }),
        })
        .collect()
}

fn bisector_cell(kpoints: &[Vec2<f64>], site: usize, tol: f64) -> Result<Vec<Vec2<f64>>> {
    let g = kpoints[site];
    if let Some(index) = kpoints.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(BzError::InvalidPoint {
            index,
            reason: "non-finite coordinate".to_string(),
        });
    }
    let planes: HalfPlanes = kpoints
        .iter()
        .enumerate()
        .filter(|(i, q)| *i != site && **q != g)
        .map(|(_, q)| Hs2::bisector(g, *q))
        .collect();
    match planes.intersection_eps(tol) {
        Intersection::Bounded(v) => Ok(v),
        Intersection::Unbounded => Err(BzError::UnboundedCell { site }),
        Intersection::Empty => Err(BzError::DegenerateCell { vertices: 0 }),
    }
}

#[cfg(test)]
mod tests;
