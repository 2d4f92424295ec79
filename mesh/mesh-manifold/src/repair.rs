//! Non-manifold vertex repair.
//!
//! For each candidate vertex a target label is chosen (see
//! [`select_target`](crate::select_target)). If the target occupies one
//! region of the fan, every other face of the fan is relabeled into it.
//! If it occupies several, the regions are joined through the shortest
//! face bridges inside the fan.

use std::fmt;

use hashbrown::HashSet;
use tracing::{debug, info, warn};

use crate::adjacency::AdjacencyViewMut;
use crate::bridge::shortest_bridge;
use crate::classify::{classify, is_non_manifold};
use crate::components::{Component, extended_fan, label_components};
use crate::label::Label;
use crate::params::RepairParams;
use crate::session::HostSession;
use crate::target::select_target;

/// What happened to one candidate vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexOutcome {
    /// Fan was already label-consistent.
    Skipped,
    /// One target region; other labels were folded into it.
    Collapsed { relabeled: usize },
    /// Target regions were joined through bridges.
    Bridged { relabeled: usize, unresolved: usize },
    /// Bridging did not help; the whole fan took the target label.
    Filled { relabeled: usize, unresolved: usize },
}

impl VertexOutcome {
    const fn relabeled(self) -> usize {
        match self {
            Self::Skipped => 0,
            Self::Collapsed { relabeled }
            | Self::Bridged { relabeled, .. }
            | Self::Filled { relabeled, .. } => relabeled,
        }
    }

    const fn unresolved(self) -> usize {
        match self {
            Self::Bridged { unresolved, .. } | Self::Filled { unresolved, .. } => unresolved,
            _ => 0,
        }
    }
}

/// Statistics from one repair call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Vertices whose fan was modified, in processing order.
    pub fixed_vertices: Vec<usize>,
    /// Total face relabels performed.
    pub relabeled_faces: usize,
    /// Vertices fixed by folding other labels into a single target region.
    pub collapsed: usize,
    /// Vertices fixed by bridging target regions.
    pub bridged: usize,
    /// Vertices fixed by relabeling the whole fan.
    pub filled: usize,
    /// Candidates left untouched.
    pub skipped: usize,
    /// Target regions that could not be reached inside their fan.
    pub unresolved_bridges: usize,
}

impl RepairReport {
    /// Check if any label changed.
    #[must_use]
    pub fn was_modified(&self) -> bool {
        !self.fixed_vertices.is_empty()
    }

    fn record(&mut self, vertex: usize, outcome: VertexOutcome) {
        self.unresolved_bridges += outcome.unresolved();
        if outcome.relabeled() == 0 {
            self.skipped += 1;
            return;
        }

        self.fixed_vertices.push(vertex);
        self.relabeled_faces += outcome.relabeled();
        match outcome {
            VertexOutcome::Collapsed { .. } => self.collapsed += 1,
            VertexOutcome::Bridged { .. } => self.bridged += 1,
            VertexOutcome::Filled { .. } => self.filled += 1,
            VertexOutcome::Skipped => {}
        }
    }
}

impl fmt::Display for RepairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repair: {} vertices fixed ({} collapsed, {} bridged, {} filled), {} faces relabeled, {} skipped",
            self.fixed_vertices.len(),
            self.collapsed,
            self.bridged,
            self.filled,
            self.relabeled_faces,
            self.skipped
        )?;
        if self.unresolved_bridges > 0 {
            write!(f, ", {} unresolved bridges", self.unresolved_bridges)?;
        }
        Ok(())
    }
}

/// Repair candidate vertices with default parameters.
///
/// Returns the vertices whose fan was modified, in the order processed.
/// See [`repair_with_params`] for details.
///
/// # Example
///
/// ```
/// use mesh_manifold::{LabelLayer, LabeledMesh, classify, repair};
/// use mesh_types::triangle_fan;
///
/// let mut mesh = LabeledMesh::new(&triangle_fan(4))
///     .expect("valid mesh")
///     .with_labels(LabelLayer::from_ids(&[0, 1, 0, 1]))
///     .expect("labels");
///
/// let flagged = classify(&mesh);
/// assert_eq!(repair(&mut mesh, &flagged), vec![0]);
/// assert!(classify(&mesh).is_empty());
/// ```
pub fn repair<V: AdjacencyViewMut + ?Sized>(view: &mut V, candidates: &[usize]) -> Vec<usize> {
    repair_with_params(view, candidates, &RepairParams::default()).fixed_vertices
}

/// Repair candidate vertices.
///
/// Candidates are processed in the order given; a vertex listed twice is
/// processed twice. Vertices whose fan is already consistent are skipped.
/// The host selection is restored and update notifications are resumed
/// before returning, whatever path was taken. A view without a label
/// layer yields an empty report.
///
/// Fixing one vertex can disturb a neighboring fan, so a single call is
/// not guaranteed to leave the whole mesh consistent; re-run
/// [`classify`] or use [`repair_until_stable`].
pub fn repair_with_params<V: AdjacencyViewMut + ?Sized>(
    view: &mut V,
    candidates: &[usize],
    params: &RepairParams,
) -> RepairReport {
    let mut session = HostSession::begin(view);
    let mut report = RepairReport::default();

    if !session.has_labels() {
        debug!("no label layer, nothing to repair");
        return report;
    }

    for &vertex in candidates {
        let outcome = repair_vertex(&mut *session, vertex, params);
        debug!(vertex, ?outcome, "repaired vertex");
        report.record(vertex, outcome);
    }

    info!(
        candidates = candidates.len(),
        fixed = report.fixed_vertices.len(),
        relabeled = report.relabeled_faces,
        "repair pass complete"
    );
    report
}

fn repair_vertex<V: AdjacencyViewMut + ?Sized>(
    view: &mut V,
    vertex: usize,
    params: &RepairParams,
) -> VertexOutcome {
    let fan = view.vertex_faces(vertex).to_vec();
    let components = label_components(&*view, &fan);
    let label_count = components
        .iter()
        .map(|c| c.label)
        .collect::<HashSet<_>>()
        .len();
    if label_count <= 1 || components.len() <= label_count {
        return VertexOutcome::Skipped;
    }

    let extended = label_components(&*view, &extended_fan(&*view, &fan));
    let Some(choice) = select_target(&components, &extended) else {
        return VertexOutcome::Skipped;
    };
    let target = choice.label;
    debug!(vertex, %target, tier = ?choice.tier, "selected target label");

    let islands: Vec<&Component> = components.iter().filter(|c| c.label == target).collect();
    if islands.len() < 2 {
        let relabeled = relabel_all(view, &fan, target);
        return VertexOutcome::Collapsed { relabeled };
    }

    let (relabeled, unresolved) = bridge_islands(view, vertex, &fan, &islands, target);
    if relabeled == 0 {
        let relabeled = relabel_all(view, &fan, target);
        return VertexOutcome::Filled {
            relabeled,
            unresolved,
        };
    }

    if params.verify_bridges && is_non_manifold(&*view, vertex) {
        let filled = relabel_all(view, &fan, target);
        return VertexOutcome::Filled {
            relabeled: relabeled + filled,
            unresolved,
        };
    }

    VertexOutcome::Bridged {
        relabeled,
        unresolved,
    }
}

/// Join every island to the first through the shortest path inside the fan.
///
/// Returns `(faces relabeled, islands left unreached)`.
fn bridge_islands<V: AdjacencyViewMut + ?Sized>(
    view: &mut V,
    vertex: usize,
    fan: &[usize],
    islands: &[&Component],
    target: Label,
) -> (usize, usize) {
    let allowed: HashSet<usize> = fan.iter().copied().collect();
    let mut merged: HashSet<usize> = islands[0].faces.iter().copied().collect();
    let mut relabeled = 0;
    let mut unresolved = 0;

    for island in &islands[1..] {
        let Some(bridge) = shortest_bridge(&*view, &allowed, &island.faces, &merged) else {
            warn!(
                vertex,
                island_faces = island.len(),
                "no face path to merge target region"
            );
            unresolved += 1;
            continue;
        };

        for face in bridge {
            if view.label(face) != Some(target) {
                view.set_label(face, target);
                relabeled += 1;
            }
            merged.insert(face);
        }
        merged.extend(island.faces.iter().copied());
    }

    (relabeled, unresolved)
}

fn relabel_all<V: AdjacencyViewMut + ?Sized>(view: &mut V, faces: &[usize], target: Label) -> usize {
    let mut relabeled = 0;
    for &face in faces {
        if view.label(face) != Some(target) {
            view.set_label(face, target);
            relabeled += 1;
        }
    }
    relabeled
}

/// Outcome of [`repair_until_stable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StabilizeReport {
    /// Repair passes run.
    pub passes: usize,
    /// Distinct vertices modified over all passes, in first-fixed order.
    pub fixed_vertices: Vec<usize>,
    /// Total face relabels over all passes.
    pub relabeled_faces: usize,
    /// Vertices still flagged when the loop stopped, ascending.
    pub remaining: Vec<usize>,
}

impl StabilizeReport {
    /// Whether every vertex ended up label-consistent.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl fmt::Display for StabilizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stabilize: {} passes, {} vertices fixed, {} faces relabeled, {} remaining",
            self.passes,
            self.fixed_vertices.len(),
            self.relabeled_faces,
            self.remaining.len()
        )
    }
}

/// Classify and repair until nothing is flagged.
///
/// Stops early when a pass changes nothing or leaves the flagged set
/// unchanged, and never runs more than `params.max_passes` passes.
///
/// # Example
///
/// ```
/// use mesh_manifold::{LabelLayer, LabeledMesh, RepairParams, repair_until_stable};
/// use mesh_types::quad_grid;
///
/// let mut mesh = LabeledMesh::new(&quad_grid(2, 2))
///     .expect("valid mesh")
///     .with_labels(LabelLayer::from_ids(&[0, 1, 1, 0]))
///     .expect("labels");
///
/// let report = repair_until_stable(&mut mesh, &RepairParams::default());
/// assert!(report.converged());
/// ```
pub fn repair_until_stable<V: AdjacencyViewMut + ?Sized>(
    view: &mut V,
    params: &RepairParams,
) -> StabilizeReport {
    let mut report = StabilizeReport::default();
    let mut seen: HashSet<usize> = HashSet::new();
    let mut flagged = classify(&*view);

    while !flagged.is_empty() && report.passes < params.max_passes {
        let pass = repair_with_params(view, &flagged, params);
        report.passes += 1;
        report.relabeled_faces += pass.relabeled_faces;
        for &vertex in &pass.fixed_vertices {
            if seen.insert(vertex) {
                report.fixed_vertices.push(vertex);
            }
        }

        let next = classify(&*view);
        let stalled = !pass.was_modified() || next == flagged;
        flagged = next;
        if stalled {
            debug!(pass = report.passes, "flagged set stopped changing");
            break;
        }
    }

    report.remaining = flagged;
    info!(
        passes = report.passes,
        fixed = report.fixed_vertices.len(),
        remaining = report.remaining.len(),
        "stabilize complete"
    );
    report
}
