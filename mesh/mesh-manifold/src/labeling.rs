//! Procedural label layers.
//!
//! Generators for test and preview labelings: one by spatial octant, one by
//! seeded random projections of face centers.

use std::f64::consts::TAU;

use mesh_types::{Point3, PolyMesh, Vector3};
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::ManifoldResult;
use crate::label::{Label, LabelLayer};
use crate::params::NoiseLabelParams;

/// Label each face by the octant of its center relative to `origin`.
///
/// Bit 0 is set for positive x, bit 1 for positive y, bit 2 for positive
/// z, so labels range over `0..=7`. Centers on a dividing plane count as
/// non-positive.
///
/// # Example
///
/// ```
/// use mesh_manifold::{Label, label_by_octant};
/// use mesh_types::{Point3, unit_cube};
///
/// let layer = label_by_octant(&unit_cube(), &Point3::new(0.5, 0.5, 0.5));
/// // The top face center sits at z = 1, on the x and y planes.
/// assert_eq!(layer.get(1), Some(Label(4)));
/// ```
#[must_use]
pub fn label_by_octant(mesh: &PolyMesh, origin: &Point3<f64>) -> LabelLayer {
    mesh.face_centers()
        .iter()
        .map(|center| {
            let d = center - origin;
            let mut id = 0;
            if d.x > 0.0 {
                id |= 1;
            }
            if d.y > 0.0 {
                id |= 2;
            }
            if d.z > 0.0 {
                id |= 4;
            }
            Label(id)
        })
        .collect()
}

/// Label faces by projecting scaled centers onto random directions.
///
/// Each face draws its own direction from an RNG seeded with
/// `params.seed`, so nearby faces rarely agree and the result is a
/// deliberately fragmented labeling. The same parameters on the same mesh
/// always give the same layer.
///
/// # Errors
///
/// Returns [`ManifoldError::InvalidParams`](crate::ManifoldError::InvalidParams)
/// if `params` fail [`NoiseLabelParams::validate`].
pub fn label_by_noise(mesh: &PolyMesh, params: &NoiseLabelParams) -> ManifoldResult<LabelLayer> {
    params.validate()?;

    let mut rng = StdRng::seed_from_u64(params.seed);
    let count = i64::from(params.label_count);

    let layer: LabelLayer = mesh
        .face_centers()
        .iter()
        .map(|center| {
            let direction = random_unit_vector(&mut rng);
            let n = direction.dot(&(center.coords * params.scale));
            Label(bucket(n, count))
        })
        .collect();

    debug!(
        faces = layer.face_count(),
        labels = layer.distinct_count(),
        seed = params.seed,
        "generated noise labels"
    );
    Ok(layer)
}

/// Uniform direction on the unit sphere.
fn random_unit_vector<R: Rng>(rng: &mut R) -> Vector3<f64> {
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let theta: f64 = rng.gen_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vector3::new(r * theta.cos(), r * theta.sin(), z)
}

/// Map a projection in roughly `[-1, 1]` onto `0..count`, wrapping outside.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bucket(n: f64, count: i64) -> u32 {
    let raw = ((n + 1.0) / 2.0 * count as f64).floor() as i64;
    // rem_euclid keeps the result in 0..count, which fits in u32.
    raw.rem_euclid(count) as u32
}
