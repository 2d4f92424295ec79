//! Scoped host session for bulk label edits.
//!
//! [`HostSession`] snapshots the host selection and pauses host update
//! notifications when it is created, and undoes both when it is dropped.
//! Every exit from a repair pass, early returns included, goes through
//! the drop.

use std::ops::{Deref, DerefMut};

use hashbrown::HashSet;
use tracing::debug;

use crate::adjacency::AdjacencyViewMut;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selected vertices and faces of a host mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    /// Selected vertex indices.
    pub vertices: HashSet<usize>,
    /// Selected face indices.
    pub faces: HashSet<usize>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Clear both vertex and face selection.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }
}

/// RAII guard around a mutable adjacency view.
///
/// Dereferences to the wrapped view, so repair code edits labels through
/// the guard and never holds the bare `&mut` while a session is open.
pub struct HostSession<'a, V: AdjacencyViewMut + ?Sized> {
    view: &'a mut V,
    saved: Option<Selection>,
}

impl<'a, V: AdjacencyViewMut + ?Sized> HostSession<'a, V> {
    /// Open a session: snapshot selection, suppress updates.
    pub fn begin(view: &'a mut V) -> Self {
        let saved = view.selection();
        view.suppress_updates();
        debug!(has_selection = saved.is_some(), "host session opened");
        Self { view, saved }
    }
}

impl<V: AdjacencyViewMut + ?Sized> Deref for HostSession<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: AdjacencyViewMut + ?Sized> DerefMut for HostSession<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: AdjacencyViewMut + ?Sized> Drop for HostSession<'_, V> {
    fn drop(&mut self) {
        if let Some(selection) = self.saved.take() {
            self.view.restore_selection(selection);
        }
        self.view.resume_updates();
        debug!("host session closed");
    }
}
