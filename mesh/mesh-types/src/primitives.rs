//! Small procedural meshes used as fixtures and benchmark inputs.

use std::f64::consts::TAU;

use crate::{PolyMesh, Vertex};

/// Create an axis-aligned unit cube made of six quads.
///
/// Spans `[0, 1]` on every axis, faces wound counter-clockwise when
/// viewed from outside. Each corner vertex is shared by three faces.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 6);
/// ```
#[must_use]
pub fn unit_cube() -> PolyMesh {
    let mut mesh = PolyMesh::with_capacity(8, 6);

    mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.push_vertex(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.push_vertex(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.push_vertex(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.push_vertex(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    mesh.push_face(&[0, 3, 2, 1]); // bottom
    mesh.push_face(&[4, 5, 6, 7]); // top
    mesh.push_face(&[0, 1, 5, 4]); // front
    mesh.push_face(&[3, 7, 6, 2]); // back
    mesh.push_face(&[0, 4, 7, 3]); // left
    mesh.push_face(&[1, 2, 6, 5]); // right

    mesh
}

/// Create a flat grid of `cols x rows` unit quads in the XY plane.
///
/// Vertex `(c, r)` has index `r * (cols + 1) + c`; face `(c, r)` has index
/// `r * cols + c`. Returns an empty mesh when either dimension is zero.
///
/// # Example
///
/// ```
/// use mesh_types::quad_grid;
///
/// let grid = quad_grid(3, 2);
/// assert_eq!(grid.vertex_count(), 12);
/// assert_eq!(grid.face_count(), 6);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn quad_grid(cols: usize, rows: usize) -> PolyMesh {
    if cols == 0 || rows == 0 {
        return PolyMesh::new();
    }

    let stride = cols + 1;
    let mut mesh = PolyMesh::with_capacity(stride * (rows + 1), cols * rows);

    for r in 0..=rows {
        for c in 0..=cols {
            mesh.push_vertex(Vertex::from_coords(c as f64, r as f64, 0.0));
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let v0 = (r * stride + c) as u32;
            let v1 = v0 + 1;
            let v2 = v1 + stride as u32;
            let v3 = v0 + stride as u32;
            mesh.push_face(&[v0, v1, v2, v3]);
        }
    }

    mesh
}

/// Create a closed disk of `sides` triangles around a center vertex.
///
/// Vertex 0 sits at the origin; ring vertices `1..=sides` lie on the unit
/// circle. Face `i` spans ring vertices `i + 1` and `i + 2` (wrapping), so
/// face `i` shares an edge with faces `i - 1` and `i + 1` modulo `sides`.
/// Returns an empty mesh when `sides < 3`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn triangle_fan(sides: usize) -> PolyMesh {
    if sides < 3 {
        return PolyMesh::new();
    }

    let mut mesh = PolyMesh::with_capacity(sides + 1, sides);
    mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0));

    for i in 0..sides {
        let angle = TAU * i as f64 / sides as f64;
        mesh.push_vertex(Vertex::from_coords(angle.cos(), angle.sin(), 0.0));
    }

    let n = sides as u32;
    for i in 0..n {
        mesh.push_face(&[0, i + 1, (i + 1) % n + 1]);
    }

    mesh
}
