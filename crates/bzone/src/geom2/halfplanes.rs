//! Ordered half-plane set and its intersection polygon.
//!
//! Invariants of `HalfPlanes`:
//! - Unit normals (||n|| = 1).
//! - Sorted by atan2(n.y, n.x) ascending.
//! - Parallels coalesced (most restrictive c kept per direction).

use nalgebra::Vector2;
use std::collections::VecDeque;
use std::f64::consts::{PI, TAU};

use super::types::Hs2;
use super::util::dedup_cyclic;

const PARALLEL_EPS: f64 = 1e-12;

#[derive(Clone, Debug, Default)]
pub struct HalfPlanes {
    hs: Vec<Hs2>,
}

/// Outcome of intersecting a `HalfPlanes` set.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
    Empty,
    /// Normals do not positively span the plane (or fewer than three
    /// constraints); emptiness is not resolved in this case.
    Unbounded,
    /// Counterclockwise vertices, at least three.
    Bounded(Vec<Vector2<f64>>),
}

impl Intersection {
    #[inline]
    pub fn vertices(self) -> Option<Vec<Vector2<f64>>> {
        match self {
            Intersection::Bounded(v) => Some(v),
            _ => None,
        }
    }
}

impl HalfPlanes {
    #[inline]
    pub fn as_slice(&self) -> &[Hs2] {
        &self.hs
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.hs.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hs.is_empty()
    }

    /// Insert keeping the invariants; zero or non-finite normals are ignored.
    pub fn insert(&mut self, h: Hs2) {
        let Some(h) = h.normalized() else {
            return;
        };
        let key = h.angle();
        let at = self.hs.partition_point(|x| x.angle() <= key);
        // Directions near ±π sit at both ends of the order.
        let last = self.hs.len().wrapping_sub(1);
        for k in [at.wrapping_sub(1), at, 0, last] {
            if let Some(existing) = self.hs.get_mut(k) {
                if (existing.n - h.n).norm() < 1e-9 {
                    existing.c = existing.c.min(h.c);
                    return;
                }
            }
        }
        self.hs.insert(at, h);
    }

    /// Intersect all half-planes, each enlarged by `eps` (c → c + eps).
    ///
    /// Vertices closer than `eps` to their predecessor are merged, so
    /// constraints that only touch a corner do not duplicate it.
    pub fn intersection_eps(&self, eps: f64) -> Intersection {
        let hs = &self.hs;
        if hs.len() < 3 || !normals_span_plane(hs) {
            return Intersection::Unbounded;
        }
        let mut dq: VecDeque<usize> = VecDeque::with_capacity(hs.len());
        let meet = |i: usize, j: usize| line_intersection(hs[i], hs[j]);
        for (i, h) in hs.iter().enumerate() {
            while dq.len() >= 2 {
                let p = meet(dq[dq.len() - 2], dq[dq.len() - 1]);
                if p.is_some_and(|p| h.satisfies_eps(p, eps)) {
                    break;
                }
                dq.pop_back();
            }
            while dq.len() >= 2 {
                let p = meet(dq[0], dq[1]);
                if p.is_some_and(|p| h.satisfies_eps(p, eps)) {
                    break;
                }
                dq.pop_front();
            }
            dq.push_back(i);
        }
        while dq.len() >= 3 {
            let p = meet(dq[dq.len() - 2], dq[dq.len() - 1]);
            if p.is_some_and(|p| hs[dq[0]].satisfies_eps(p, eps)) {
                break;
            }
            dq.pop_back();
        }
        while dq.len() >= 3 {
            let p = meet(dq[0], dq[1]);
            if p.is_some_and(|p| hs[dq[dq.len() - 1]].satisfies_eps(p, eps)) {
                break;
            }
            dq.pop_front();
        }
        if dq.len() < 3 {
            return Intersection::Empty;
        }
        let m = dq.len();
        let mut verts = Vec::with_capacity(m);
        for k in 0..m {
            match meet(dq[k], dq[(k + 1) % m]) {
                Some(p) => verts.push(p),
                None => return Intersection::Empty,
            }
        }
        // A sweep over an empty set can leave a self-crossing loop behind.
        let slack = eps.abs().max(1e-9);
        if !verts
            .iter()
            .all(|p| hs.iter().all(|h| h.satisfies_eps(*p, slack)))
        {
            return Intersection::Empty;
        }
        dedup_cyclic(&mut verts, slack);
        if verts.len() < 3 {
            return Intersection::Empty;
        }
        Intersection::Bounded(verts)
    }
}

impl FromIterator<Hs2> for HalfPlanes {
    fn from_iter<I: IntoIterator<Item = Hs2>>(iter: I) -> Self {
        let mut out = HalfPlanes::default();
        for h in iter {
            out.insert(h);
        }
        out
    }
}

/// Largest angular gap between consecutive normals is below π.
fn normals_span_plane(hs: &[Hs2]) -> bool {
    let angles: Vec<f64> = hs.iter().map(Hs2::angle).collect();
    let wrap = angles[0] + TAU - angles[angles.len() - 1];
    let max_gap = angles
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(wrap, f64::max);
    max_gap < PI - PARALLEL_EPS
}

fn line_intersection(h1: Hs2, h2: Hs2) -> Option<Vector2<f64>> {
    let det = h1.n.x * h2.n.y - h1.n.y * h2.n.x;
    if det.abs() < PARALLEL_EPS {
        return None;
    }
    Some(Vector2::new(
        (h1.c * h2.n.y - h1.n.y * h2.c) / det,
        (h1.n.x * h2.c - h1.c * h2.n.x) / det,
    ))
}
