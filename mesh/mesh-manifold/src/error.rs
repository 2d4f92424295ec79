//! Error types for label-manifold operations.
//!
//! Only construction and validation can fail. Classification and repair
//! model every runtime condition as an empty or partial result.

use thiserror::Error;

/// Result type for label-manifold operations.
pub type ManifoldResult<T> = Result<T, ManifoldError>;

/// Errors that can occur while building topology or label layers.
#[derive(Debug, Error)]
pub enum ManifoldError {
    /// Face index is out of bounds.
    #[error("face index {face_idx} out of bounds (mesh has {face_count} faces)")]
    FaceOutOfBounds {
        /// The invalid face index.
        face_idx: usize,
        /// Total number of faces in the mesh.
        face_count: usize,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face_idx} references vertex {vertex_idx} (mesh has {vertex_count} vertices)")]
    VertexOutOfBounds {
        /// The face holding the bad reference.
        face_idx: usize,
        /// The invalid vertex index.
        vertex_idx: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face has fewer than three distinct corners.
    #[error("face {face_idx} is degenerate ({corners} distinct corners)")]
    DegenerateFace {
        /// The degenerate face.
        face_idx: usize,
        /// Number of distinct corners found.
        corners: usize,
    },

    /// A label layer does not cover the mesh's faces one-to-one.
    #[error("label layer has {labels} entries but mesh has {faces} faces")]
    LabelCountMismatch {
        /// Entries in the label layer.
        labels: usize,
        /// Faces in the mesh.
        faces: usize,
    },

    /// A parameter is outside its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParams {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
