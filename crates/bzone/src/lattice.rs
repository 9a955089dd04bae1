//! Real-space and reciprocal bases of a 2D lattice from (a, b, γ).
//!
//! Conventions
//! - `a1 = (a, 0)`, `a2 = (b cos γ, b sin γ)`; γ in degrees at the boundary.
//! - Reciprocal basis via the 2D dual-basis formula
//!   `b1 = 2π (a2.y, −a2.x) / area`, `b2 = 2π (−a1.y, a1.x) / area`,
//!   so that `a_i · b_j = 2π δ_ij` holds by construction.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{BzError, Result};
use crate::{parallelogram_area, Vec2};

/// Immutable user input: lengths a, b and included angle γ in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    pub a: f64,
    pub b: f64,
    pub gamma_degrees: f64,
}

impl LatticeParameters {
    #[inline]
    pub const fn new(a: f64, b: f64, gamma_degrees: f64) -> Self {
        Self {
            a,
            b,
            gamma_degrees,
        }
    }
}

/// Real-space basis and its signed parallelogram area (never ≈ 0).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticeVectors {
    pub a1: Vec2<f64>,
    pub a2: Vec2<f64>,
    pub area: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReciprocalVectors {
    pub b1: Vec2<f64>,
    pub b2: Vec2<f64>,
}

impl ReciprocalVectors {
    /// Area of the reciprocal unit cell, `(2π)² / area` up to sign.
    #[inline]
    pub fn area(&self) -> f64 {
        parallelogram_area(self.b1, self.b2)
    }
}

/// Output of `compute_lattice`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    pub vectors: LatticeVectors,
    pub reciprocal: ReciprocalVectors,
}

/// Build a1, a2 and the reciprocal b1, b2.
///
/// Fails with `DegenerateLattice` when `|area| <= eps_area` or the area is not
/// finite (zero length, γ ∈ {0°, 180°}, NaN input).
pub fn compute_lattice(params: &LatticeParameters, eps_area: f64) -> Result<Lattice> {
    let (a1, a2) = real_basis(params);
    let area = parallelogram_area(a1, a2);
    if !area.is_finite() || area.abs() <= eps_area {
        return Err(BzError::DegenerateLattice { area });
    }
    let b1 = Vec2::new(a2.y, -a2.x) * (TAU / area);
    let b2 = Vec2::new(-a1.y, a1.x) * (TAU / area);
    tracing::debug!(area, b1 = ?b1, b2 = ?b2, "lattice");
    Ok(Lattice {
        vectors: LatticeVectors { a1, a2, area },
        reciprocal: ReciprocalVectors { b1, b2 },
    })
}

/// 2D Bravais class of the input cell (informational).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatticeKind {
    Square,
    Rectangular,
    Hexagonal,
    CenteredRectangular,
    Oblique,
}

impl LatticeKind {
    /// Classify (a, b, γ) with relative tolerance `tol`.
    ///
    /// The cell is first reduced (`reduce_basis`), so any basis of the same
    /// lattice gets the same kind: (1, 2, 60°) is rectangular and
    /// (1, √3, 30°) is hexagonal. Non-finite or flat input reports `Oblique`.
    pub fn classify(params: &LatticeParameters, tol: f64) -> Self {
        let (a1, a2) = real_basis(params);
        if !parallelogram_area(a1, a2).is_normal() {
            return LatticeKind::Oblique;
        }
        let (u, v) = reduce_basis(a1, a2);
        let (lu, lv) = (u.norm(), v.norm());
        let dot = u.dot(&v).abs();
        let cos_g = dot / (lu * lv);
        let same_len = (lv - lu) <= tol * lv;
        let right = cos_g <= tol;
        let hex = same_len && (cos_g - 0.5).abs() <= tol;
        // v projects onto half of u: centered rectangle with |v| = |v − u|.
        let half_proj = (2.0 * dot - lu * lu).abs() <= tol * lu * lu;
        if right {
            if same_len {
                LatticeKind::Square
            } else {
                LatticeKind::Rectangular
            }
        } else if hex {
            LatticeKind::Hexagonal
        } else if same_len || half_proj {
            LatticeKind::CenteredRectangular
        } else {
            LatticeKind::Oblique
        }
    }
}

fn real_basis(params: &LatticeParameters) -> (Vec2<f64>, Vec2<f64>) {
    let gamma = params.gamma_degrees.to_radians();
    let a1 = Vec2::new(params.a, 0.0);
    let a2 = Vec2::new(params.b * gamma.cos(), params.b * gamma.sin());
    (a1, a2)
}

const MAX_REDUCTION_STEPS: usize = 64;

/// Lagrange–Gauss reduction: a basis (u, v) of the same lattice with
/// `|u| <= |v|` and `|u·v| <= |u|²/2`. Expects a non-degenerate basis.
pub fn reduce_basis(a1: Vec2<f64>, a2: Vec2<f64>) -> (Vec2<f64>, Vec2<f64>) {
    let (mut u, mut v) = (a1, a2);
    for _ in 0..MAX_REDUCTION_STEPS {
        if v.norm_squared() < u.norm_squared() {
            std::mem::swap(&mut u, &mut v);
        }
        let m = (u.dot(&v) / u.norm_squared()).round();
        v -= u * m;
        if v.norm_squared() >= u.norm_squared() {
            break;
        }
    }
    if v.norm_squared() < u.norm_squared() {
        std::mem::swap(&mut u, &mut v);
    }
    (u, v)
}
