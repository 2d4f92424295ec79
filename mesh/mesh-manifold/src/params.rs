//! Parameters for repair and label generation.

use crate::error::{ManifoldError, ManifoldResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for non-manifold repair.
///
/// # Example
///
/// ```
/// use mesh_manifold::RepairParams;
///
/// let params = RepairParams::default()
///     .with_max_passes(3)
///     .with_verify_bridges(false);
/// assert_eq!(params.max_passes, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepairParams {
    /// Upper bound on classify/repair rounds in
    /// [`repair_until_stable`](crate::repair_until_stable).
    /// Default: 8
    pub max_passes: usize,

    /// After bridging islands, re-check the fan and collapse it into the
    /// target label if it is still non-manifold.
    /// Default: true
    pub verify_bridges: bool,
}

impl Default for RepairParams {
    fn default() -> Self {
        Self {
            max_passes: 8,
            verify_bridges: true,
        }
    }
}

impl RepairParams {
    /// One round only; the caller drives any further passes.
    #[must_use]
    pub fn single_pass() -> Self {
        Self {
            max_passes: 1,
            ..Default::default()
        }
    }

    /// Many rounds, for heavily fragmented labelings.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            max_passes: 32,
            ..Default::default()
        }
    }

    /// Set the pass limit.
    #[must_use]
    pub const fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Set whether bridged fans are re-checked.
    #[must_use]
    pub const fn with_verify_bridges(mut self, verify: bool) -> Self {
        self.verify_bridges = verify;
        self
    }
}

/// Parameters for noise-based label generation.
///
/// The seed is explicit; two calls with equal parameters on the same mesh
/// produce the same labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseLabelParams {
    /// RNG seed. Default: 42
    pub seed: u64,
    /// Scale applied to face centers before projection. Default: 0.1
    pub scale: f64,
    /// Number of labels to spread faces over. Default: 8
    pub label_count: u32,
}

impl Default for NoiseLabelParams {
    fn default() -> Self {
        Self {
            seed: 42,
            scale: 0.1,
            label_count: 8,
        }
    }
}

impl NoiseLabelParams {
    /// Set the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the number of labels.
    #[must_use]
    pub const fn with_label_count(mut self, count: u32) -> Self {
        self.label_count = count;
        self
    }

    /// Check that the parameters can produce labels.
    ///
    /// # Errors
    ///
    /// Returns an error if `label_count` is zero or `scale` is not a
    /// positive finite number.
    pub fn validate(&self) -> ManifoldResult<()> {
        if self.label_count == 0 {
            return Err(ManifoldError::InvalidParams {
                name: "label_count",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ManifoldError::InvalidParams {
                name: "scale",
                reason: format!("must be positive and finite, got {}", self.scale),
            });
        }
        Ok(())
    }
}
