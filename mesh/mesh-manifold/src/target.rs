//! Dominant-label selection for a non-manifold fan.
//!
//! Tiers are tried in order, each only among the labels still tied after
//! the previous one:
//!
//! 1. most components in the fan,
//! 2. most faces in the fan,
//! 3. most components in the extended fan,
//! 4. lowest label id.

use hashbrown::HashMap;

use crate::components::{Component, components_per_label, faces_per_label};
use crate::label::Label;

/// Which tier settled the target label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieBreakTier {
    /// Unique label with the most components in the fan.
    FanComponents,
    /// Unique label with the most faces in the fan.
    FanFaces,
    /// Unique label with the most components in the extended fan.
    ExtendedComponents,
    /// Every tier tied; the lowest label id was taken.
    LowestLabel,
}

/// The selected target label and how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetChoice {
    /// The label the fan will be merged into.
    pub label: Label,
    /// The tier that decided.
    pub tier: TieBreakTier,
}

/// Choose the label a non-manifold fan should be merged into.
///
/// Only labels present in `fan` are candidates; `extended` is consulted
/// for tier 3 only. Returns `None` when `fan` is empty.
///
/// # Example
///
/// ```
/// use mesh_manifold::{Component, Label, TieBreakTier, select_target};
///
/// let comp = |id, faces: &[usize]| Component { label: Label(id), faces: faces.to_vec() };
/// let fan = vec![comp(1, &[0]), comp(2, &[1, 2]), comp(1, &[3])];
///
/// let choice = select_target(&fan, &fan).expect("non-empty fan");
/// assert_eq!(choice.label, Label(1));
/// assert_eq!(choice.tier, TieBreakTier::FanComponents);
/// ```
#[must_use]
pub fn select_target(fan: &[Component], extended: &[Component]) -> Option<TargetChoice> {
    let mut candidates: Vec<Label> = fan.iter().map(|c| c.label).collect();
    candidates.sort_unstable();
    candidates.dedup();

    let tiers: [(TieBreakTier, HashMap<Label, usize>); 3] = [
        (TieBreakTier::FanComponents, components_per_label(fan)),
        (TieBreakTier::FanFaces, faces_per_label(fan)),
        (
            TieBreakTier::ExtendedComponents,
            components_per_label(extended),
        ),
    ];

    for (tier, scores) in &tiers {
        if candidates.is_empty() {
            return None;
        }
        candidates = leaders(&candidates, scores);
        if let [label] = candidates[..] {
            return Some(TargetChoice { label, tier: *tier });
        }
    }

    // Leaders are kept sorted, so the first is the lowest id.
    candidates.first().map(|&label| TargetChoice {
        label,
        tier: TieBreakTier::LowestLabel,
    })
}

/// Candidates sharing the highest score, ascending. Missing scores count as 0.
fn leaders(candidates: &[Label], scores: &HashMap<Label, usize>) -> Vec<Label> {
    let score = |label: &Label| scores.get(label).copied().unwrap_or(0);
    let best = candidates.iter().map(score).max().unwrap_or(0);
    candidates
        .iter()
        .filter(|label| score(*label) == best)
        .copied()
        .collect()
}
