//! Non-manifold vertex classification.
//!
//! A vertex is non-manifold when some label's faces around it are split
//! into disjoint islands, i.e. its fan has more label-homogeneous
//! components than distinct labels.

use std::fmt;

use tracing::{debug, info};

use crate::adjacency::AdjacencyView;
use crate::components::{distinct_labels, label_components};

/// Label structure of one vertex fan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanStats {
    /// Faces in the fan.
    pub face_count: usize,
    /// Distinct labels in the fan.
    pub label_count: usize,
    /// Label-homogeneous connected components in the fan.
    pub component_count: usize,
}

impl FanStats {
    /// Whether some label occupies more than one region of the fan.
    #[must_use]
    pub const fn is_non_manifold(&self) -> bool {
        self.label_count < self.component_count
    }
}

/// Compute the label structure of a vertex fan.
///
/// Fans with fewer than two labels are not partitioned: a single label is
/// always one region around its vertex, so the component count is reported
/// equal to the label count.
pub fn fan_stats<V: AdjacencyView + ?Sized>(view: &V, vertex: usize) -> FanStats {
    let fan = view.vertex_faces(vertex);
    let label_count = distinct_labels(view, fan);

    let component_count = if label_count <= 1 {
        label_count
    } else {
        label_components(view, fan).len()
    };

    FanStats {
        face_count: fan.len(),
        label_count,
        component_count,
    }
}

/// Check a single vertex.
pub fn is_non_manifold<V: AdjacencyView + ?Sized>(view: &V, vertex: usize) -> bool {
    fan_stats(view, vertex).is_non_manifold()
}

/// Find every non-manifold vertex.
///
/// Returns vertex indices in ascending order. A mesh without a label layer
/// yields an empty list; callers that need to tell "no layer" apart from
/// "nothing flagged" should check [`AdjacencyView::has_labels`] first.
///
/// # Example
///
/// ```
/// use mesh_manifold::{LabelLayer, LabeledMesh, classify};
/// use mesh_types::triangle_fan;
///
/// let mesh = LabeledMesh::new(&triangle_fan(6))
///     .expect("valid mesh")
///     .with_labels(LabelLayer::from_ids(&[0, 0, 0, 1, 1, 1]))
///     .expect("labels");
///
/// // Two labels, two contiguous regions around the center.
/// assert!(classify(&mesh).is_empty());
/// ```
pub fn classify<V: AdjacencyView + ?Sized>(view: &V) -> Vec<usize> {
    if !view.has_labels() {
        debug!("no label layer, nothing to classify");
        return Vec::new();
    }

    let flagged: Vec<usize> = (0..view.vertex_count())
        .filter(|&v| is_non_manifold(view, v))
        .collect();

    debug!(
        vertices = view.vertex_count(),
        flagged = flagged.len(),
        "classified vertex fans"
    );
    flagged
}

/// Summary of a classification pass.
#[derive(Debug, Clone, Default)]
pub struct ManifoldReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Whether a label layer was present.
    pub has_labels: bool,
    /// Distinct labels over the whole mesh.
    pub label_count: usize,
    /// Non-manifold vertices, ascending.
    pub non_manifold_vertices: Vec<usize>,
}

impl ManifoldReport {
    /// Whether every vertex fan is label-consistent.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.non_manifold_vertices.is_empty()
    }

    /// Number of flagged vertices.
    #[must_use]
    pub fn non_manifold_count(&self) -> usize {
        self.non_manifold_vertices.len()
    }
}

impl fmt::Display for ManifoldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Label Manifold Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        if !self.has_labels {
            return writeln!(f, "  Labels: none (no label layer)");
        }
        writeln!(f, "  Labels: {}", self.label_count)?;
        writeln!(
            f,
            "  Non-manifold vertices: {}",
            self.non_manifold_vertices.len()
        )
    }
}

/// Classify the mesh and gather summary counts.
pub fn analyze<V: AdjacencyView + ?Sized>(view: &V) -> ManifoldReport {
    let all_faces: Vec<usize> = (0..view.face_count()).collect();
    let report = ManifoldReport {
        vertex_count: view.vertex_count(),
        face_count: view.face_count(),
        has_labels: view.has_labels(),
        label_count: distinct_labels(view, &all_faces),
        non_manifold_vertices: classify(view),
    };

    info!(
        flagged = report.non_manifold_count(),
        labels = report.label_count,
        "label manifold analysis complete"
    );
    report
}
