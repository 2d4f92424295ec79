//! Label-homogeneous connected components of a restricted face set.
//!
//! Two faces are connected when they share an edge, both belong to the
//! restricted set, and both carry the same label.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::adjacency::{AdjacencyView, face_neighbors};
use crate::label::Label;

/// A maximal connected set of same-label faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Label shared by every face of the component.
    pub label: Label,
    /// Faces in breadth-first discovery order; the seed comes first.
    pub faces: Vec<usize>,
}

impl Component {
    /// Number of faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Check if the component has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Partition `faces` into label-homogeneous connected components.
///
/// Components are seeded in the order `faces` lists them, so the result is
/// deterministic for a given input order. The component count itself does
/// not depend on the order. Faces without a label are left out.
pub fn label_components<V: AdjacencyView + ?Sized>(view: &V, faces: &[usize]) -> Vec<Component> {
    let members: HashSet<usize> = faces.iter().copied().collect();
    let mut visited: HashSet<usize> = HashSet::with_capacity(faces.len());
    let mut components = Vec::new();

    for &seed in faces {
        if visited.contains(&seed) {
            continue;
        }
        let Some(label) = view.label(seed) else {
            continue;
        };

        visited.insert(seed);
        let mut component = vec![seed];
        let mut queue = VecDeque::from([seed]);

        while let Some(face) = queue.pop_front() {
            for neighbor in face_neighbors(view, face) {
                if !members.contains(&neighbor) || visited.contains(&neighbor) {
                    continue;
                }
                if view.label(neighbor) != Some(label) {
                    continue;
                }
                visited.insert(neighbor);
                component.push(neighbor);
                queue.push_back(neighbor);
            }
        }

        components.push(Component {
            label,
            faces: component,
        });
    }

    components
}

/// The fan plus every face sharing an edge with a fan face.
///
/// Fan faces come first in their original order, followed by the ring
/// faces in discovery order.
pub fn extended_fan<V: AdjacencyView + ?Sized>(view: &V, fan: &[usize]) -> Vec<usize> {
    let mut seen: HashSet<usize> = fan.iter().copied().collect();
    let mut extended = fan.to_vec();

    for &face in fan {
        for neighbor in face_neighbors(view, face) {
            if seen.insert(neighbor) {
                extended.push(neighbor);
            }
        }
    }

    extended
}

/// Number of distinct labels among `faces`.
pub fn distinct_labels<V: AdjacencyView + ?Sized>(view: &V, faces: &[usize]) -> usize {
    faces
        .iter()
        .filter_map(|&f| view.label(f))
        .collect::<HashSet<_>>()
        .len()
}

/// Count components per label.
#[must_use]
pub fn components_per_label(components: &[Component]) -> HashMap<Label, usize> {
    let mut counts = HashMap::new();
    for component in components {
        *counts.entry(component.label).or_insert(0) += 1;
    }
    counts
}

/// Count faces per label across components.
#[must_use]
pub fn faces_per_label(components: &[Component]) -> HashMap<Label, usize> {
    let mut counts = HashMap::new();
    for component in components {
        *counts.entry(component.label).or_insert(0) += component.len();
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelLayer;
    use crate::labeled_mesh::LabeledMesh;
    use mesh_types::{quad_grid, triangle_fan};

    fn fan_with(ids: &[u32]) -> LabeledMesh {
        LabeledMesh::new(&triangle_fan(ids.len()))
            .expect("valid")
            .with_labels(LabelLayer::from_ids(ids))
            .expect("labels")
    }

    #[test]
    fn single_label_is_one_component() {
        let mesh = fan_with(&[3, 3, 3, 3, 3]);
        let comps = label_components(&mesh, &[0, 1, 2, 3, 4]);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].len(), 5);
    }

    #[test]
    fn alternating_labels_isolate_every_face() {
        let mesh = fan_with(&[0, 1, 0, 1]);
        let comps = label_components(&mesh, &[0, 1, 2, 3]);
        assert_eq!(comps.len(), 4);
        assert!(comps.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn wraparound_joins_first_and_last() {
        // Faces 0 and 5 share an edge across the seam.
        let mesh = fan_with(&[1, 2, 2, 2, 2, 1]);
        let comps = label_components(&mesh, &[0, 1, 2, 3, 4, 5]);
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].label, Label(1));
        assert_eq!(comps[0].faces, vec![0, 5]);
    }

    #[test]
    fn restriction_cuts_connections() {
        let mesh = fan_with(&[1, 1, 1, 1]);
        // Without faces 1 and 3, faces 0 and 2 only touch at the center.
        let comps = label_components(&mesh, &[0, 2]);
        assert_eq!(comps.len(), 2);
    }

    #[test]
    fn count_is_order_independent() {
        let mesh = fan_with(&[0, 0, 1, 2, 1, 1, 0]);
        let forward = label_components(&mesh, &[0, 1, 2, 3, 4, 5, 6]);
        let backward = label_components(&mesh, &[6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(forward.len(), backward.len());
    }

    #[test]
    fn no_layer_yields_nothing() {
        let mesh = LabeledMesh::new(&triangle_fan(4)).expect("valid");
        assert!(label_components(&mesh, &[0, 1, 2, 3]).is_empty());
    }

    #[test]
    fn extended_fan_adds_ring() {
        let grid = quad_grid(3, 3);
        let mesh = LabeledMesh::new(&grid)
            .expect("valid")
            .with_labels(LabelLayer::new(9, Label(0)))
            .expect("labels");
        // Corner face 0 touches faces 1 and 3 by edge.
        let extended = extended_fan(&mesh, &[0]);
        assert_eq!(extended[0], 0);
        let mut ring = extended[1..].to_vec();
        ring.sort_unstable();
        assert_eq!(ring, vec![1, 3]);
    }

    #[test]
    fn per_label_counts() {
        let mesh = fan_with(&[0, 1, 0, 1, 1]);
        let comps = label_components(&mesh, &[0, 1, 2, 3, 4]);
        let per_comp = components_per_label(&comps);
        let per_face = faces_per_label(&comps);
        assert_eq!(per_comp.get(&Label(0)), Some(&2));
        assert_eq!(per_comp.get(&Label(1)), Some(&2));
        assert_eq!(per_face.get(&Label(1)), Some(&3));
        assert_eq!(distinct_labels(&mesh, &[0, 1, 2, 3, 4]), 2);
    }
}
