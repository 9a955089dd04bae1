//! Planar Voronoi diagram of a point set, derived from its Delaunay triangulation.
//!
//! Model
//! - Voronoi vertices are circumcenters of inner Delaunay triangles. Cocircular
//!   sites (every rectangular lattice) split one circle into several triangles
//!   with the same circumcenter; those are merged into a single vertex.
//! - A region is the cyclic list of vertex references around one distinct
//!   site. A region that reaches infinity contains `VertexRef::AtInfinity`.
//! - `point_region[i]` maps input point `i` to its region, so duplicated input
//!   points share a region.

use nalgebra::Vector2;
use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag, VoronoiVertex};
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashMap;

use crate::error::{BzError, Result};

/// Reference from a region to a Voronoi vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexRef {
    Finite(usize),
    AtInfinity,
}

#[derive(Clone, Debug, Default)]
pub struct VoronoiDiagram {
    pub vertices: Vec<Vector2<f64>>,
    pub regions: Vec<Vec<VertexRef>>,
    pub point_region: Vec<usize>,
}

impl VoronoiDiagram {
    /// Build the diagram of `points`.
    ///
    /// `merge_tol` is the absolute distance under which two circumcenters are
    /// the same vertex.
    pub fn build(points: &[Vector2<f64>], merge_tol: f64) -> Result<Self> {
        let mut tri: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
        let mut site_of_point = Vec::with_capacity(points.len());
        for (index, p) in points.iter().enumerate() {
            let handle = tri
                .insert(Point2::new(p.x, p.y))
                .map_err(|e| BzError::InvalidPoint {
                    index,
                    reason: format!("{e:?}"),
                })?;
            site_of_point.push(handle);
        }

        // Region ids in first-seen order of distinct sites.
        let mut region_of_site: HashMap<FixedVertexHandle, usize> = HashMap::new();
        let mut sites: Vec<FixedVertexHandle> = Vec::new();
        let point_region = site_of_point
            .iter()
            .map(|h| {
                *region_of_site.entry(*h).or_insert_with(|| {
                    sites.push(*h);
                    sites.len() - 1
                })
            })
            .collect();

        if tri.num_inner_faces() == 0 {
            // Fewer than three distinct sites or all colinear: only strips and
            // half-planes, every region is open.
            return Ok(Self {
                vertices: Vec::new(),
                regions: vec![vec![VertexRef::AtInfinity]; sites.len()],
                point_region,
            });
        }

        let mut vertices: Vec<Vector2<f64>> = Vec::new();
        let mut vertex_of_face: HashMap<FixedFaceHandle<InnerTag>, usize> = HashMap::new();
        for face in tri.inner_faces() {
            let cc = face.circumcenter();
            let cc = Vector2::new(cc.x, cc.y);
            let id = match vertices.iter().position(|v| (v - cc).norm() <= merge_tol) {
                Some(id) => id,
                None => {
                    vertices.push(cc);
                    vertices.len() - 1
                }
            };
            vertex_of_face.insert(face.fix(), id);
        }

        let mut regions = Vec::with_capacity(sites.len());
        for site in &sites {
            let face = tri.vertex(*site).as_voronoi_face();
            let mut refs: Vec<VertexRef> = Vec::new();
            for edge in face.adjacent_edges() {
                let r = match edge.from() {
                    VoronoiVertex::Inner(f) => vertex_of_face
                        .get(&f.fix())
                        .map_or(VertexRef::AtInfinity, |id| VertexRef::Finite(*id)),
                    VoronoiVertex::Outer(_) => VertexRef::AtInfinity,
                };
                if refs.last() != Some(&r) {
                    refs.push(r);
                }
            }
            while refs.len() > 1 && refs.first() == refs.last() {
                refs.pop();
            }
            regions.push(refs);
        }

        tracing::trace!(
            sites = sites.len(),
            vertices = vertices.len(),
            "voronoi diagram"
        );
        Ok(Self {
            vertices,
            regions,
            point_region,
        })
    }

    /// Region of input point `point`.
    #[inline]
    pub fn region_of(&self, point: usize) -> Option<&[VertexRef]> {
        let region = *self.point_region.get(point)?;
        self.regions.get(region).map(Vec::as_slice)
    }

    /// Coordinates of a finite reference; `None` for `AtInfinity`.
    #[inline]
    pub fn resolve(&self, r: VertexRef) -> Option<Vector2<f64>> {
        match r {
            VertexRef::Finite(id) => self.vertices.get(id).copied(),
            VertexRef::AtInfinity => None,
        }
    }

    #[inline]
    pub fn is_bounded(&self, point: usize) -> bool {
        self.region_of(point)
            .is_some_and(|refs| !refs.is_empty() && !refs.contains(&VertexRef::AtInfinity))
    }
}
