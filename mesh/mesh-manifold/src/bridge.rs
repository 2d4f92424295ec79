//! Shortest face bridges between same-label islands.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::adjacency::{AdjacencyView, face_neighbors};

/// Find the shortest chain of faces linking `from` to `to`.
///
/// The search is breadth-first over edge adjacency, ignores labels and
/// never leaves `allowed`. The returned faces are the ones strictly
/// between the two sets, ordered from `from` towards `to`; an empty vector
/// means the sets already touch. Returns `None` when `to` cannot be
/// reached inside `allowed`.
pub fn shortest_bridge<V: AdjacencyView + ?Sized>(
    view: &V,
    allowed: &HashSet<usize>,
    from: &[usize],
    to: &HashSet<usize>,
) -> Option<Vec<usize>> {
    let sources: HashSet<usize> = from
        .iter()
        .copied()
        .filter(|f| allowed.contains(f))
        .collect();
    if sources.iter().any(|f| to.contains(f)) {
        return Some(Vec::new());
    }

    let mut came_from: HashMap<usize, usize> = HashMap::new();
    let mut visited: HashSet<usize> = sources.clone();
    // Seed in caller order so ties resolve the same way on every run.
    let mut queue: VecDeque<usize> = from.iter().copied().filter(|f| sources.contains(f)).collect();

    while let Some(face) = queue.pop_front() {
        for neighbor in face_neighbors(view, face) {
            if !allowed.contains(&neighbor) || !visited.insert(neighbor) {
                continue;
            }
            came_from.insert(neighbor, face);

            if to.contains(&neighbor) {
                let mut path = Vec::new();
                let mut current = face;
                while !sources.contains(&current) {
                    path.push(current);
                    current = *came_from.get(&current)?;
                }
                path.reverse();
                return Some(path);
            }

            queue.push_back(neighbor);
        }
    }

    None
}
