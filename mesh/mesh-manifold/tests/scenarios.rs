//! End-to-end scenarios for classification and repair.
//!
//! Run with: cargo test -p mesh-manifold --test scenarios

use mesh_manifold::{
    AdjacencyView, AdjacencyViewMut, Label, LabelLayer, LabeledMesh, NoiseLabelParams,
    RepairParams, Selection, TieBreakTier, analyze, classify, extended_fan, is_non_manifold,
    label_by_noise, label_by_octant, label_components, repair, repair_until_stable,
    select_target,
};
use mesh_types::{Point3, PolyMesh, Vector3, quad_grid, triangle_fan, unit_cube};

// =============================================================================
// Helpers
// =============================================================================

fn labeled(mesh: &PolyMesh, ids: &[u32]) -> LabeledMesh {
    LabeledMesh::new(mesh)
        .expect("valid mesh")
        .with_labels(LabelLayer::from_ids(ids))
        .expect("one label per face")
}

fn ids(mesh: &LabeledMesh) -> Vec<u32> {
    mesh.labels()
        .expect("labels")
        .as_slice()
        .iter()
        .map(|l| l.id())
        .collect()
}

/// A host whose own selection follows every relabel, like an editor that
/// selects the faces it touches. Counts notification toggles.
struct SelectingHost {
    mesh: LabeledMesh,
    selection: Selection,
    suppress_depth: usize,
    suppress_calls: usize,
    resume_calls: usize,
}

impl SelectingHost {
    fn new(mesh: LabeledMesh) -> Self {
        Self {
            mesh,
            selection: Selection::new(),
            suppress_depth: 0,
            suppress_calls: 0,
            resume_calls: 0,
        }
    }
}

impl AdjacencyView for SelectingHost {
    fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    fn face_count(&self) -> usize {
        self.mesh.face_count()
    }

    fn vertex_faces(&self, vertex: usize) -> &[usize] {
        self.mesh.vertex_faces(vertex)
    }

    fn face_edges(&self, face: usize) -> &[usize] {
        self.mesh.face_edges(face)
    }

    fn edge_faces(&self, edge: usize) -> &[usize] {
        self.mesh.edge_faces(edge)
    }

    fn has_labels(&self) -> bool {
        self.mesh.has_labels()
    }

    fn label(&self, face: usize) -> Option<Label> {
        self.mesh.label(face)
    }
}

impl AdjacencyViewMut for SelectingHost {
    fn set_label(&mut self, face: usize, label: Label) {
        self.selection.faces.clear();
        self.selection.faces.insert(face);
        self.mesh.set_label(face, label);
    }

    fn selection(&self) -> Option<Selection> {
        Some(self.selection.clone())
    }

    fn restore_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn suppress_updates(&mut self) {
        self.suppress_depth += 1;
        self.suppress_calls += 1;
    }

    fn resume_updates(&mut self) {
        self.suppress_depth = self.suppress_depth.saturating_sub(1);
        self.resume_calls += 1;
    }
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn alternating_four_face_fan() {
    let mut mesh = labeled(&triangle_fan(4), &[0, 1, 0, 1]);
    assert_eq!(classify(&mesh), vec![0]);

    // Closed disk: every tier ties and the lowest id wins.
    let fan = mesh.vertex_faces(0).to_vec();
    let components = label_components(&mesh, &fan);
    assert_eq!(components.len(), 4);
    let extended = label_components(&mesh, &extended_fan(&mesh, &fan));
    let choice = select_target(&components, &extended).expect("target");
    assert_eq!(choice.label, Label(0));
    assert_eq!(choice.tier, TieBreakTier::LowestLabel);

    assert_eq!(repair(&mut mesh, &[0]), vec![0]);
    assert!(!is_non_manifold(&mesh, 0));
    assert!(classify(&mesh).is_empty());
}

#[test]
fn extended_fan_breaks_tie() {
    // Vertex 5 of a 3x3 grid sees faces 0, 1, 3, 4 labeled A B B A
    // (alternating around the cycle 0-1-4-3). Face 7 adds a third B
    // island in the extended fan.
    let layout = [0, 1, 2, 1, 0, 2, 2, 1, 2];
    let mut mesh = labeled(&quad_grid(3, 3), &layout);
    assert_eq!(classify(&mesh), vec![5, 9]);

    let fan = mesh.vertex_faces(5).to_vec();
    assert_eq!(fan, vec![0, 1, 3, 4]);
    let components = label_components(&mesh, &fan);
    let extended = label_components(&mesh, &extended_fan(&mesh, &fan));
    let choice = select_target(&components, &extended).expect("target");
    assert_eq!(choice.label, Label(1));
    assert_eq!(choice.tier, TieBreakTier::ExtendedComponents);

    assert_eq!(repair(&mut mesh, &[5]), vec![5]);
    assert!(!is_non_manifold(&mesh, 5));
    let after = ids(&mesh);
    assert!(after[0] == 1 || after[4] == 1);
}

#[test]
fn contiguous_regions_are_clean() {
    let mesh = labeled(&quad_grid(4, 4), &[0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 3, 3, 2, 2, 3, 3]);
    let report = analyze(&mesh);
    assert!(report.is_manifold());
    assert_eq!(report.label_count, 4);
}

#[test]
fn cube_with_opposite_faces_shared() {
    // bottom/top share a label, as do front/back and left/right: every
    // corner sees three distinct labels.
    let mesh = labeled(&unit_cube(), &[0, 0, 1, 1, 2, 2]);
    assert!(classify(&mesh).is_empty());
}

#[test]
fn no_label_layer() {
    let mut mesh = LabeledMesh::new(&quad_grid(2, 2)).expect("valid mesh");
    assert!(classify(&mesh).is_empty());
    assert!(repair(&mut mesh, &[4]).is_empty());
    assert!(!analyze(&mesh).has_labels);
    assert!(mesh.labels().is_none());
}

// =============================================================================
// Repair
// =============================================================================

#[test]
fn repair_only_uses_labels_from_the_fan() {
    let layout = [3, 7, 3, 9, 3, 7];
    let mut mesh = labeled(&triangle_fan(6), &layout);
    repair(&mut mesh, &[0]);
    assert!(ids(&mesh).iter().all(|id| layout.contains(id)));
}

#[test]
fn stabilize_octant_labels() {
    // Octant labels are contiguous by construction.
    let mut grid = quad_grid(6, 6);
    grid.translate(Vector3::new(-3.0, -3.0, 0.0));
    let layer = label_by_octant(&grid, &Point3::origin());
    let mut mesh = LabeledMesh::new(&grid)
        .expect("valid mesh")
        .with_labels(layer)
        .expect("labels");

    let report = repair_until_stable(&mut mesh, &RepairParams::default());
    assert_eq!(report.passes, 0);
    assert!(report.converged());
}

#[test]
fn stabilize_noise_labels() {
    let mut grid = quad_grid(10, 10);
    grid.translate(Vector3::new(-5.0, -5.0, 0.0));
    let params = NoiseLabelParams::default().with_scale(1.0).with_label_count(3);
    let layer = label_by_noise(&grid, &params).expect("labels");
    let mut mesh = LabeledMesh::new(&grid)
        .expect("valid mesh")
        .with_labels(layer)
        .expect("labels");
    let before = classify(&mesh).len();

    let report = repair_until_stable(&mut mesh, &RepairParams::thorough());
    assert_eq!(report.remaining, classify(&mesh));
    assert!(report.remaining.len() <= before || report.passes > 0);
}

// =============================================================================
// Host integration
// =============================================================================

#[test]
fn host_selection_survives_repair() {
    let mut host = SelectingHost::new(labeled(&triangle_fan(6), &[0, 1, 2, 0, 1, 2]));
    host.selection.vertices.insert(3);
    host.selection.faces.insert(5);
    let before = host.selection.clone();

    let fixed = repair(&mut host, &[0]);

    assert_eq!(fixed, vec![0]);
    assert_eq!(host.selection, before);
    assert_eq!(host.suppress_depth, 0);
    assert_eq!(host.suppress_calls, 1);
    assert_eq!(host.resume_calls, 1);
}

#[test]
fn host_selection_survives_skip() {
    let mut host = SelectingHost::new(labeled(&triangle_fan(4), &[1, 1, 2, 2]));
    host.selection.faces.insert(2);
    let before = host.selection.clone();

    assert!(repair(&mut host, &[0, 1]).is_empty());
    assert_eq!(host.selection, before);
    assert_eq!(host.resume_calls, 1);
}

#[test]
fn host_selection_survives_stabilize() {
    let mut host = SelectingHost::new(labeled(&quad_grid(2, 2), &[0, 1, 1, 0]));
    host.selection.vertices.extend([0, 8]);
    let before = host.selection.clone();

    let report = repair_until_stable(&mut host, &RepairParams::default());

    assert!(report.converged());
    assert_eq!(host.selection, before);
    assert_eq!(host.suppress_calls, report.passes);
    assert_eq!(host.resume_calls, report.passes);
}
