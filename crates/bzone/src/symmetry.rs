//! Named points on the zone boundary and their distances to Γ.
//!
//! The default strategy, `FirstThreeVertices`, reads the angularly sorted
//! polygon by position: `Y = mid(p0, p1)`, `B = mid(p1, p2)`, `A = p2`. It is a
//! heuristic tied to that ordering and lands on conventional high-symmetry
//! loci only for the rectangular/oblique zones it was written for; on a
//! hexagonal zone the labels are positional, not symmetry-derived. A
//! classifier by lattice kind can replace it through `SymmetryStrategy`
//! without touching the rest of the pipeline.

use serde::{Deserialize, Serialize};

use crate::cell::BzPolygon;
use crate::error::{BzError, Result};
use crate::Vec2;

/// Positions of Y, B and A chosen by a strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymmetryLoci {
    pub y: Vec2<f64>,
    pub b: Vec2<f64>,
    pub a: Vec2<f64>,
}

pub trait SymmetryStrategy {
    fn name(&self) -> &'static str;
    fn locate(&self, zone: &BzPolygon) -> Result<SymmetryLoci>;
}

/// Positional heuristic on the first three sorted vertices.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstThreeVertices;

impl SymmetryStrategy for FirstThreeVertices {
    fn name(&self) -> &'static str {
        "first-three-vertex"
    }

    fn locate(&self, zone: &BzPolygon) -> Result<SymmetryLoci> {
        let [p0, p1, p2] = match zone.vertices.as_slice() {
            [p0, p1, p2, ..] => [*p0, *p1, *p2],
            short => {
                return Err(BzError::DegenerateCell {
                    vertices: short.len(),
                })
            }
        };
        Ok(SymmetryLoci {
            y: (p0 + p1) * 0.5,
            b: (p1 + p2) * 0.5,
            a: p2,
        })
    }
}

/// Γ, Y, B, A with distances from Γ and the reciprocal basis norms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymmetryPoints {
    #[serde(rename = "Gamma")]
    pub gamma: Vec2<f64>,
    #[serde(rename = "Y")]
    pub y: Vec2<f64>,
    #[serde(rename = "B")]
    pub b: Vec2<f64>,
    #[serde(rename = "A")]
    pub a: Vec2<f64>,
    #[serde(rename = "dist_GY")]
    pub dist_gy: f64,
    #[serde(rename = "dist_GB")]
    pub dist_gb: f64,
    #[serde(rename = "dist_GA")]
    pub dist_ga: f64,
    pub b1_norm: f64,
    pub b2_norm: f64,
}

impl SymmetryPoints {
    /// Display labels paired with positions, Γ first.
    pub fn labeled(&self) -> [(&'static str, Vec2<f64>); 4] {
        [
            ("Γ", self.gamma),
            ("Y", self.y),
            ("B", self.b),
            ("A", self.a),
        ]
    }
}

/// Extract with the default `FirstThreeVertices` strategy.
pub fn extract_symmetry_points(
    zone: &BzPolygon,
    b1: Vec2<f64>,
    b2: Vec2<f64>,
) -> Result<SymmetryPoints> {
    extract_with(&FirstThreeVertices, zone, b1, b2)
}

pub fn extract_with<S: SymmetryStrategy + ?Sized>(
    strategy: &S,
    zone: &BzPolygon,
    b1: Vec2<f64>,
    b2: Vec2<f64>,
) -> Result<SymmetryPoints> {
    let loci = strategy.locate(zone)?;
    let gamma = Vec2::zeros();
    let out = SymmetryPoints {
        gamma,
        y: loci.y,
        b: loci.b,
        a: loci.a,
        dist_gy: (loci.y - gamma).norm(),
        dist_gb: (loci.b - gamma).norm(),
        dist_ga: (loci.a - gamma).norm(),
        b1_norm: b1.norm(),
        b2_norm: b2.norm(),
    };
    tracing::debug!(
        strategy = strategy.name(),
        dist_gy = out.dist_gy,
        dist_gb = out.dist_gb,
        dist_ga = out.dist_ga,
        "symmetry points"
    );
    Ok(out)
}
