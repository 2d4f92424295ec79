//! Label-manifold analysis and repair for face-labeled polygon meshes.
//!
//! Every face of a mesh carries a discrete [`Label`] (a material slot, a
//! cluster id, a quantized color). A vertex is *non-manifold* with respect
//! to the labeling when the faces around it that share a label are split
//! into more than one edge-connected region. Such vertices break tools that
//! expect each label to meet a vertex in a single wedge.
//!
//! The crate provides:
//!
//! - [`classify`] / [`analyze`] - Find non-manifold vertices
//! - [`repair`] / [`repair_with_params`] - Relabel faces so each label is
//!   one region per vertex fan
//! - [`repair_until_stable`] - Alternate classify and repair until the
//!   flagged set settles
//! - [`label_by_octant`] / [`label_by_noise`] - Generate label layers
//!
//! # Host Integration
//!
//! Algorithms only see the mesh through [`AdjacencyView`] (read) and
//! [`AdjacencyViewMut`] (relabel, plus optional selection and
//! update-suppression hooks). [`LabeledMesh`] implements both for a
//! [`mesh_types::PolyMesh`]; an editor can implement them over its own
//! mesh storage. A [`HostSession`] guard restores the host selection and
//! resumes notifications when a repair finishes.
//!
//! # Quick Start
//!
//! ```
//! use mesh_manifold::{LabelLayer, LabeledMesh, analyze, repair};
//! use mesh_types::quad_grid;
//!
//! // 2x2 checkerboard: the center vertex sees each label twice.
//! let mut mesh = LabeledMesh::new(&quad_grid(2, 2))
//!     .expect("valid mesh")
//!     .with_labels(LabelLayer::from_ids(&[0, 1, 1, 0]))
//!     .expect("one label per face");
//!
//! let report = analyze(&mesh);
//! assert_eq!(report.non_manifold_vertices, vec![4]);
//!
//! let fixed = repair(&mut mesh, &report.non_manifold_vertices);
//! assert_eq!(fixed, vec![4]);
//! assert!(analyze(&mesh).is_manifold());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod bridge;
mod classify;
mod components;
mod error;
mod label;
mod labeled_mesh;
mod labeling;
mod params;
mod repair;
mod session;
mod target;

pub use adjacency::{AdjacencyView, AdjacencyViewMut, MeshAdjacency, face_neighbors};
pub use bridge::shortest_bridge;
pub use classify::{FanStats, ManifoldReport, analyze, classify, fan_stats, is_non_manifold};
pub use components::{
    Component, components_per_label, distinct_labels, extended_fan, faces_per_label,
    label_components,
};
pub use error::{ManifoldError, ManifoldResult};
pub use label::{Label, LabelLayer};
pub use labeled_mesh::LabeledMesh;
pub use labeling::{label_by_noise, label_by_octant};
pub use params::{NoiseLabelParams, RepairParams};
pub use repair::{RepairReport, StabilizeReport, repair, repair_until_stable, repair_with_params};
pub use session::{HostSession, Selection};
pub use target::{TargetChoice, TieBreakTier, select_target};
