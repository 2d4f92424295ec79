//! Adjacency view over a labeled mesh.
//!
//! The classifier and repairer only ever see a mesh through
//! [`AdjacencyView`] / [`AdjacencyViewMut`]. [`MeshAdjacency`] is the arena
//! behind the bundled [`LabeledMesh`](crate::LabeledMesh) host.

use hashbrown::HashMap;
use mesh_types::PolyMesh;

use crate::error::{ManifoldError, ManifoldResult};
use crate::label::Label;
use crate::session::Selection;

/// Read access to mesh topology and face labels.
///
/// Indices are stable for the duration of a call. Passing an index that
/// does not exist is a caller error; implementations should answer with an
/// empty slice or `None` rather than panic.
pub trait AdjacencyView {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of faces.
    fn face_count(&self) -> usize;

    /// Faces incident to a vertex (its face fan), in any order.
    fn vertex_faces(&self, vertex: usize) -> &[usize];

    /// Edges bounding a face.
    fn face_edges(&self, face: usize) -> &[usize];

    /// Faces sharing an edge.
    fn edge_faces(&self, edge: usize) -> &[usize];

    /// Whether the mesh carries a label layer at all.
    fn has_labels(&self) -> bool;

    /// Label of a face, or `None` when there is no label layer.
    fn label(&self, face: usize) -> Option<Label>;
}

/// Label mutation plus the optional host hooks used during repair.
///
/// The hooks default to no-ops, so a host without selection state or
/// update notifications only has to implement [`set_label`](Self::set_label).
pub trait AdjacencyViewMut: AdjacencyView {
    /// Overwrite the label of a face.
    fn set_label(&mut self, face: usize, label: Label);

    /// Snapshot the host's current selection.
    fn selection(&self) -> Option<Selection> {
        None
    }

    /// Put back a selection captured by [`selection`](Self::selection).
    fn restore_selection(&mut self, _selection: Selection) {}

    /// Pause host update notifications during a bulk edit.
    fn suppress_updates(&mut self) {}

    /// Resume notifications paused by [`suppress_updates`](Self::suppress_updates).
    fn resume_updates(&mut self) {}
}

/// Iterate over the faces sharing at least one edge with `face`.
///
/// A neighbor reachable through several edges is yielded once per edge.
pub fn face_neighbors<V: AdjacencyView + ?Sized>(
    view: &V,
    face: usize,
) -> impl Iterator<Item = usize> + '_ {
    view.face_edges(face)
        .iter()
        .flat_map(move |&edge| view.edge_faces(edge).iter().copied())
        .filter(move |&other| other != face)
}

/// Index-based vertex/face/edge incidence for a polygon mesh.
///
/// Every relation is stored as index lists in flat arenas, so there are
/// no back-references to own.
#[derive(Debug, Clone, Default)]
pub struct MeshAdjacency {
    vertex_faces: Vec<Vec<usize>>,
    face_edges: Vec<Vec<usize>>,
    edge_faces: Vec<Vec<usize>>,
    edges: Vec<(u32, u32)>,
}

impl MeshAdjacency {
    /// Build incidence tables from a polygon mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a face references a vertex that does not exist
    /// or has fewer than three distinct corners.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_manifold::MeshAdjacency;
    /// use mesh_types::quad_grid;
    ///
    /// let adj = MeshAdjacency::build(&quad_grid(2, 1)).expect("valid grid");
    /// assert_eq!(adj.edge_count(), 7);
    /// assert_eq!(adj.boundary_edge_count(), 6);
    /// ```
    pub fn build(mesh: &PolyMesh) -> ManifoldResult<Self> {
        let vertex_count = mesh.vertices.len();
        let mut vertex_faces: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
        let mut face_edges: Vec<Vec<usize>> = Vec::with_capacity(mesh.faces.len());
        let mut edge_faces: Vec<Vec<usize>> = Vec::new();
        let mut edges: Vec<(u32, u32)> = Vec::new();
        let mut edge_lookup: HashMap<(u32, u32), usize> = HashMap::new();

        for (face_idx, corners) in mesh.faces.iter().enumerate() {
            let mut distinct: Vec<u32> = corners.to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() < 3 {
                return Err(ManifoldError::DegenerateFace {
                    face_idx,
                    corners: distinct.len(),
                });
            }

            for &v in &distinct {
                let slot =
                    vertex_faces
                        .get_mut(v as usize)
                        .ok_or(ManifoldError::VertexOutOfBounds {
                            face_idx,
                            vertex_idx: v,
                            vertex_count,
                        })?;
                slot.push(face_idx);
            }

            let mut own_edges = Vec::with_capacity(corners.len());
            for i in 0..corners.len() {
                let (v0, v1) = (corners[i], corners[(i + 1) % corners.len()]);
                if v0 == v1 {
                    continue;
                }
                let key = normalize_edge(v0, v1);
                let edge = *edge_lookup.entry(key).or_insert_with(|| {
                    edges.push(key);
                    edge_faces.push(Vec::new());
                    edges.len() - 1
                });
                if !own_edges.contains(&edge) {
                    own_edges.push(edge);
                    edge_faces[edge].push(face_idx);
                }
            }
            face_edges.push(own_edges);
        }

        Ok(Self {
            vertex_faces,
            face_edges,
            edge_faces,
            edges,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_faces.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_edges.len()
    }

    /// Number of unique edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Faces incident to a vertex.
    ///
    /// Returns an empty slice if the vertex index is out of bounds.
    #[must_use]
    pub fn vertex_faces(&self, vertex: usize) -> &[usize] {
        self.vertex_faces.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Edges bounding a face.
    #[must_use]
    pub fn face_edges(&self, face: usize) -> &[usize] {
        self.face_edges.get(face).map_or(&[], Vec::as_slice)
    }

    /// Faces sharing an edge.
    #[must_use]
    pub fn edge_faces(&self, edge: usize) -> &[usize] {
        self.edge_faces.get(edge).map_or(&[], Vec::as_slice)
    }

    /// Endpoints of an edge, lower index first.
    #[must_use]
    pub fn edge(&self, edge: usize) -> Option<(u32, u32)> {
        self.edges.get(edge).copied()
    }

    /// Count edges used by exactly one face.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_faces.iter().filter(|f| f.len() == 1).count()
    }

    /// Count edges shared by more than two faces.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_faces.iter().filter(|f| f.len() > 2).count()
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Vertex, quad_grid, triangle_fan, unit_cube};

    #[test]
    fn grid_counts() {
        let adj = MeshAdjacency::build(&quad_grid(2, 2)).expect("valid");
        assert_eq!(adj.vertex_count(), 9);
        assert_eq!(adj.face_count(), 4);
        assert_eq!(adj.edge_count(), 12);
        assert_eq!(adj.boundary_edge_count(), 8);
        assert_eq!(adj.non_manifold_edge_count(), 0);
    }

    #[test]
    fn center_vertex_fan() {
        let adj = MeshAdjacency::build(&quad_grid(2, 2)).expect("valid");
        let mut fan = adj.vertex_faces(4).to_vec();
        fan.sort_unstable();
        assert_eq!(fan, vec![0, 1, 2, 3]);
        assert_eq!(adj.vertex_faces(0), &[0]);
    }

    #[test]
    fn cube_is_closed() {
        let adj = MeshAdjacency::build(&unit_cube()).expect("valid");
        assert_eq!(adj.edge_count(), 12);
        assert_eq!(adj.boundary_edge_count(), 0);
        for e in 0..adj.edge_count() {
            assert_eq!(adj.edge_faces(e).len(), 2);
        }
    }

    #[test]
    fn edge_endpoints_normalized() {
        let adj = MeshAdjacency::build(&triangle_fan(3)).expect("valid");
        for e in 0..adj.edge_count() {
            let (a, b) = adj.edge(e).expect("edge");
            assert!(a < b);
        }
        assert!(adj.edge(99).is_none());
    }

    #[test]
    fn out_of_bounds_queries_are_empty() {
        let adj = MeshAdjacency::build(&triangle_fan(4)).expect("valid");
        assert!(adj.vertex_faces(100).is_empty());
        assert!(adj.face_edges(100).is_empty());
        assert!(adj.edge_faces(100).is_empty());
    }

    #[test]
    fn rejects_missing_vertex() {
        let mut mesh = triangle_fan(3);
        mesh.push_face(&[0, 1, 77]);
        let err = MeshAdjacency::build(&mesh).expect_err("bad index");
        assert!(matches!(
            err,
            ManifoldError::VertexOutOfBounds { vertex_idx: 77, .. }
        ));
    }

    #[test]
    fn rejects_degenerate_face() {
        let mut mesh = PolyMesh::new();
        mesh.push_vertex(Vertex::default());
        mesh.push_vertex(Vertex::default());
        mesh.push_face(&[0, 1, 1]);
        let err = MeshAdjacency::build(&mesh).expect_err("degenerate");
        assert!(matches!(err, ManifoldError::DegenerateFace { corners: 2, .. }));
    }

    #[test]
    fn non_manifold_edge_detected() {
        let mut mesh = PolyMesh::new();
        for _ in 0..5 {
            mesh.push_vertex(Vertex::default());
        }
        mesh.push_face(&[0, 1, 2]);
        mesh.push_face(&[0, 1, 3]);
        mesh.push_face(&[0, 1, 4]);
        let adj = MeshAdjacency::build(&mesh).expect("valid");
        assert_eq!(adj.non_manifold_edge_count(), 1);
    }

    #[test]
    fn empty_mesh() {
        let adj = MeshAdjacency::build(&PolyMesh::new()).expect("valid");
        assert_eq!(adj.face_count(), 0);
        assert_eq!(adj.edge_count(), 0);
    }
}
