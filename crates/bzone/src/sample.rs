//! Finite lattice patches `i·v1 + j·v2` for `i, j ∈ [-R, R]`.

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Row-major (i outer, j inner) patch of `(2R+1)²` lattice points.
///
/// Invariant: contains the exact origin at `origin_index()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    pub range: u32,
    pub points: Vec<Vec2<f64>>,
}

impl PointCloud {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Position of (i, j) = (0, 0) in enumeration order.
    #[inline]
    pub fn origin_index(&self) -> usize {
        let r = self.range as usize;
        r * (2 * r + 1) + r
    }
    #[inline]
    pub fn as_slice(&self) -> &[Vec2<f64>] {
        &self.points
    }
    /// Largest norm in the patch (0 for the degenerate R = 0 patch).
    #[inline]
    pub fn extent(&self) -> f64 {
        extent(&self.points)
    }
}

/// Largest norm among `points`, 0 when empty.
pub fn extent(points: &[Vec2<f64>]) -> f64 {
    points.iter().map(|p| p.norm()).fold(0.0, f64::max)
}

/// Enumerate `i·v1 + j·v2`, i outer and j inner, both over `[-range, range]`.
pub fn sample_grid(v1: Vec2<f64>, v2: Vec2<f64>, range: u32) -> PointCloud {
    let r = i64::from(range);
    let side = (range as usize).saturating_mul(2).saturating_add(1);
    let mut points = Vec::with_capacity(side.checked_mul(side).unwrap_or(0));
    for i in -r..=r {
        for j in -r..=r {
            points.push(v1 * (i as f64) + v2 * (j as f64));
        }
    }
    PointCloud { range, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn cardinality_and_origin() {
        let v1 = vector![1.0, 0.0];
        let v2 = vector![0.3, 0.8];
        for r in [0u32, 1, 4, 7] {
            let cloud = sample_grid(v1, v2, r);
            let side = (2 * r + 1) as usize;
            assert_eq!(cloud.len(), side * side);
            let o = cloud.points[cloud.origin_index()];
            assert_eq!(o, Vec2::zeros());
            assert!(cloud.points.iter().any(|p| *p == Vec2::zeros()));
        }
    }

    #[test]
    fn row_major_order() {
        let cloud = sample_grid(vector![1.0, 0.0], vector![0.0, 1.0], 1);
        assert_eq!(cloud.points[0], vector![-1.0, -1.0]);
        assert_eq!(cloud.points[1], vector![-1.0, 0.0]);
        assert_eq!(cloud.points[3], vector![0.0, -1.0]);
        assert_eq!(cloud.points[8], vector![1.0, 1.0]);
    }

    #[test]
    fn extent_is_corner_norm_for_orthogonal_basis() {
        let cloud = sample_grid(vector![2.0, 0.0], vector![0.0, 1.0], 3);
        assert!((cloud.extent() - (36.0_f64 + 9.0).sqrt()).abs() < 1e-12);
        assert_eq!(extent(&[]), 0.0);
    }
}
