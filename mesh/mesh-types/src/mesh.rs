//! Indexed polygon mesh.

use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;

use crate::Vertex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex indices of one polygon, in winding order.
///
/// Triangles and quads are stored inline; larger polygons spill to the heap.
pub type Polygon = SmallVec<[u32; 4]>;

/// An indexed polygon mesh.
///
/// Faces reference vertices by index and may have any number of corners
/// (three or more). The mesh itself does no validation; consumers that
/// build topology from it are expected to reject out-of-range indices.
///
/// # Example
///
/// ```
/// use mesh_types::{PolyMesh, Vertex};
///
/// let mut mesh = PolyMesh::new();
/// mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.push_vertex(Vertex::from_coords(1.0, 1.0, 0.0));
/// mesh.push_vertex(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.push_face(&[0, 1, 2, 3]);
///
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Polygon faces as indices into the vertex array.
    pub faces: Vec<Polygon>,
}

impl PolyMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and polygons.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<Polygon>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from vertices and triangle index triplets.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{PolyMesh, Vertex};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = PolyMesh::from_triangles(vertices, &[[0, 1, 2]]);
    /// assert_eq!(mesh.face(0), Some(&[0, 1, 2][..]));
    /// ```
    #[must_use]
    pub fn from_triangles(vertices: Vec<Vertex>, triangles: &[[u32; 3]]) -> Self {
        let faces = triangles
            .iter()
            .map(|tri| Polygon::from_slice(tri))
            .collect();
        Self { vertices, faces }
    }

    /// Append a vertex and return its index.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    /// Append a polygon and return its face index.
    pub fn push_face(&mut self, corners: &[u32]) -> usize {
        self.faces.push(Polygon::from_slice(corners));
        self.faces.len() - 1
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Get the corner indices of a face.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<&[u32]> {
        self.faces.get(index).map(SmallVec::as_slice)
    }

    /// Compute the centroid of a face's corners.
    ///
    /// Returns `None` if the face is out of bounds, has no corners, or
    /// references a missing vertex.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn face_center(&self, index: usize) -> Option<Point3<f64>> {
        let corners = self.faces.get(index)?;
        if corners.is_empty() {
            return None;
        }

        let mut sum = Vector3::zeros();
        for &corner in corners {
            sum += self.vertices.get(corner as usize)?.position.coords;
        }
        Some(Point3::from(sum / corners.len() as f64))
    }

    /// Compute the centroid of every face.
    ///
    /// Faces whose center cannot be computed map to the origin, so the
    /// result always has one entry per face.
    #[must_use]
    pub fn face_centers(&self) -> Vec<Point3<f64>> {
        (0..self.faces.len())
            .map(|i| self.face_center(i).unwrap_or_else(Point3::origin))
            .collect()
    }

    /// Translate every vertex by an offset.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Append another mesh, offsetting its face indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        for face in &other.faces {
            self.faces
                .push(face.iter().map(|&v| v + vertex_offset).collect());
        }
    }
}
