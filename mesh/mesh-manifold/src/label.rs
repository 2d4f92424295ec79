//! Face labels and per-face label storage.
//!
//! A label is an opaque, equality-comparable token. Hosts map their native
//! representation (material slot, cluster id, color) into it.

use std::fmt;

use hashbrown::{HashMap, HashSet};

use crate::error::{ManifoldError, ManifoldResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque per-face label.
///
/// Ordering exists only so that ties can be broken deterministically
/// (lowest id wins); it carries no meaning otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Label(pub u32);

impl Label {
    /// Create a label from a raw id.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id of this label.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Pack an 8-bit RGB color into a label.
    ///
    /// Two colors map to the same label iff all three channels match.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_manifold::Label;
    ///
    /// let red = Label::from_rgb(255, 0, 0);
    /// assert_eq!(red.to_rgb(), (255, 0, 0));
    /// assert_ne!(red, Label::from_rgb(254, 0, 0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Unpack a label created with [`Label::from_rgb`].
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl From<u32> for Label {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A label for every face of a mesh.
///
/// There is no "unassigned" state: every face always has a label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelLayer {
    labels: Vec<Label>,
}

impl LabelLayer {
    /// Create a layer with every face set to `fill`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_manifold::{Label, LabelLayer};
    ///
    /// let layer = LabelLayer::new(100, Label::new(0));
    /// assert_eq!(layer.face_count(), 100);
    /// assert_eq!(layer.distinct_count(), 1);
    /// ```
    #[must_use]
    pub fn new(face_count: usize, fill: Label) -> Self {
        Self {
            labels: vec![fill; face_count],
        }
    }

    /// Create a layer from one label per face.
    #[must_use]
    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Create a layer from raw ids, one per face.
    #[must_use]
    pub fn from_ids(ids: &[u32]) -> Self {
        Self {
            labels: ids.iter().copied().map(Label).collect(),
        }
    }

    /// Get the label of a face.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn get(&self, face_idx: usize) -> Option<Label> {
        self.labels.get(face_idx).copied()
    }

    /// Set the label of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face index is out of bounds.
    pub fn set(&mut self, face_idx: usize, label: Label) -> ManifoldResult<()> {
        let face_count = self.labels.len();
        let slot = self
            .labels
            .get_mut(face_idx)
            .ok_or(ManifoldError::FaceOutOfBounds {
                face_idx,
                face_count,
            })?;
        *slot = label;
        Ok(())
    }

    /// Assign one label to many faces.
    ///
    /// # Errors
    ///
    /// Returns an error if any face index is out of bounds. Faces before
    /// the offending index have already been relabeled.
    pub fn assign_many(&mut self, face_indices: &[usize], label: Label) -> ManifoldResult<()> {
        for &face_idx in face_indices {
            self.set(face_idx, label)?;
        }
        Ok(())
    }

    /// Number of faces covered.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct labels in use.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.labels.iter().collect::<HashSet<_>>().len()
    }

    /// All distinct labels, ascending.
    #[must_use]
    pub fn label_ids(&self) -> Vec<Label> {
        let unique: HashSet<Label> = self.labels.iter().copied().collect();
        let mut ids: Vec<Label> = unique.into_iter().collect();
        ids.sort_unstable();
        ids
    }

    /// Faces carrying a given label, ascending.
    #[must_use]
    pub fn faces_with_label(&self, label: Label) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, l)| *l == label)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of faces per label.
    #[must_use]
    pub fn label_sizes(&self) -> HashMap<Label, usize> {
        let mut sizes = HashMap::new();
        for &label in &self.labels {
            *sizes.entry(label).or_insert(0) += 1;
        }
        sizes
    }

    /// Labels as a slice, indexed by face.
    #[must_use]
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    /// Consume the layer and return the labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }
}

impl FromIterator<Label> for LabelLayer {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}
