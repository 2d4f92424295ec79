//! A self-contained host: topology, optional label layer, selection.

use mesh_types::PolyMesh;

use crate::adjacency::{AdjacencyView, AdjacencyViewMut, MeshAdjacency};
use crate::error::{ManifoldError, ManifoldResult};
use crate::label::{Label, LabelLayer};
use crate::session::Selection;

/// A polygon mesh's topology together with its face labels.
///
/// This is the in-memory stand-in for a modeling application's mesh. It
/// implements [`AdjacencyViewMut`] with real selection state and an
/// update-suppression counter, so it exercises every host hook.
///
/// # Example
///
/// ```
/// use mesh_manifold::{LabelLayer, LabeledMesh, classify};
/// use mesh_types::triangle_fan;
///
/// let fan = triangle_fan(4);
/// let labels = LabelLayer::from_ids(&[0, 1, 0, 1]);
/// let mesh = LabeledMesh::new(&fan)
///     .expect("valid mesh")
///     .with_labels(labels)
///     .expect("one label per face");
///
/// assert_eq!(classify(&mesh), vec![0]);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledMesh {
    adjacency: MeshAdjacency,
    labels: Option<LabelLayer>,
    selection: Selection,
    suppress_depth: usize,
}

impl LabeledMesh {
    /// Build topology for a mesh with no label layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh has out-of-range or degenerate faces.
    pub fn new(mesh: &PolyMesh) -> ManifoldResult<Self> {
        Ok(Self::from_adjacency(MeshAdjacency::build(mesh)?))
    }

    /// Wrap precomputed topology.
    #[must_use]
    pub fn from_adjacency(adjacency: MeshAdjacency) -> Self {
        Self {
            adjacency,
            labels: None,
            selection: Selection::default(),
            suppress_depth: 0,
        }
    }

    /// Attach a label layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer does not have exactly one label per face.
    pub fn with_labels(mut self, labels: LabelLayer) -> ManifoldResult<Self> {
        self.set_labels(labels)?;
        Ok(self)
    }

    /// Replace the label layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer does not have exactly one label per face.
    pub fn set_labels(&mut self, labels: LabelLayer) -> ManifoldResult<()> {
        if labels.face_count() != self.adjacency.face_count() {
            return Err(ManifoldError::LabelCountMismatch {
                labels: labels.face_count(),
                faces: self.adjacency.face_count(),
            });
        }
        self.labels = Some(labels);
        Ok(())
    }

    /// Remove and return the label layer.
    pub fn take_labels(&mut self) -> Option<LabelLayer> {
        self.labels.take()
    }

    /// The label layer, if any.
    #[must_use]
    pub fn labels(&self) -> Option<&LabelLayer> {
        self.labels.as_ref()
    }

    /// The underlying topology.
    #[must_use]
    pub fn adjacency(&self) -> &MeshAdjacency {
        &self.adjacency
    }

    /// Current selection.
    #[must_use]
    pub fn current_selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable access to the selection.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Whether update notifications are currently paused.
    #[must_use]
    pub fn updates_suppressed(&self) -> bool {
        self.suppress_depth > 0
    }
}

impl AdjacencyView for LabeledMesh {
    fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    fn face_count(&self) -> usize {
        self.adjacency.face_count()
    }

    fn vertex_faces(&self, vertex: usize) -> &[usize] {
        self.adjacency.vertex_faces(vertex)
    }

    fn face_edges(&self, face: usize) -> &[usize] {
        self.adjacency.face_edges(face)
    }

    fn edge_faces(&self, edge: usize) -> &[usize] {
        self.adjacency.edge_faces(edge)
    }

    fn has_labels(&self) -> bool {
        self.labels.is_some()
    }

    fn label(&self, face: usize) -> Option<Label> {
        self.labels.as_ref()?.get(face)
    }
}

impl AdjacencyViewMut for LabeledMesh {
    fn set_label(&mut self, face: usize, label: Label) {
        if let Some(layer) = self.labels.as_mut() {
            // Out-of-range faces are a caller error; the layer rejects them.
            let _ = layer.set(face, label);
        }
    }

    fn selection(&self) -> Option<Selection> {
        Some(self.selection.clone())
    }

    fn restore_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn suppress_updates(&mut self) {
        self.suppress_depth += 1;
    }

    fn resume_updates(&mut self) {
        self.suppress_depth = self.suppress_depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{quad_grid, triangle_fan};

    #[test]
    fn no_layer_by_default() {
        let mesh = LabeledMesh::new(&triangle_fan(3)).expect("valid");
        assert!(!mesh.has_labels());
        assert_eq!(mesh.label(0), None);
    }

    #[test]
    fn label_count_must_match() {
        let mesh = LabeledMesh::new(&triangle_fan(3)).expect("valid");
        let err = mesh
            .with_labels(LabelLayer::from_ids(&[0, 1]))
            .expect_err("mismatch");
        assert!(matches!(
            err,
            ManifoldError::LabelCountMismatch {
                labels: 2,
                faces: 3
            }
        ));
    }

    #[test]
    fn set_label_through_trait() {
        let mut mesh = LabeledMesh::new(&quad_grid(2, 1))
            .expect("valid")
            .with_labels(LabelLayer::from_ids(&[4, 4]))
            .expect("labels");
        mesh.set_label(1, Label(9));
        assert_eq!(mesh.label(1), Some(Label(9)));
        assert_eq!(mesh.label(0), Some(Label(4)));
    }

    #[test]
    fn set_label_without_layer_is_ignored() {
        let mut mesh = LabeledMesh::new(&triangle_fan(3)).expect("valid");
        mesh.set_label(0, Label(1));
        assert!(!mesh.has_labels());
    }

    #[test]
    fn take_labels_removes_layer() {
        let mut mesh = LabeledMesh::new(&triangle_fan(3))
            .expect("valid")
            .with_labels(LabelLayer::new(3, Label(2)))
            .expect("labels");
        let layer = mesh.take_labels().expect("layer");
        assert_eq!(layer.face_count(), 3);
        assert!(!mesh.has_labels());
    }

    #[test]
    fn suppression_is_counted() {
        let mut mesh = LabeledMesh::new(&triangle_fan(3)).expect("valid");
        mesh.suppress_updates();
        mesh.suppress_updates();
        mesh.resume_updates();
        assert!(mesh.updates_suppressed());
        mesh.resume_updates();
        assert!(!mesh.updates_suppressed());
    }
}
