//! Core mesh types for labeled polygon meshes.
//!
//! This crate provides the geometry that label analysis runs on:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`PolyMesh`] - A polygon mesh with indexed vertices
//! - [`unit_cube`], [`quad_grid`], [`triangle_fan`] - Procedural fixtures
//!
//! # Layer 0 Crate
//!
//! This crate has no host-application dependencies. Topology, labels and
//! selection state are built on top of it by `mesh-manifold`.
//!
//! # Example
//!
//! ```
//! use mesh_types::{PolyMesh, Vertex};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.push_vertex(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.push_face(&[0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Tests may use unwrap/expect; library code may not.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod mesh;
mod primitives;
mod vertex;

pub use mesh::{PolyMesh, Polygon};
pub use primitives::{quad_grid, triangle_fan, unit_cube};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
