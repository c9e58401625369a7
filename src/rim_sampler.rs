//! # Rim sampling
//!
//! Discretizes the circular outline of a body's disk, as seen along the shadow axis, into
//! equally spaced points. Each point is obtained by rotating `radius · perp` about the shadow
//! axis and translating it to the body's center:
//!
//! ```text
//! p_k = center + rotate(axis, k · 360 / N, radius · perp),   k = 0 .. N − 1
//! ```
//!
//! All points lie in the plane orthogonal to the axis through the body's center, at exactly one
//! radius from it. The cost downstream is `O(N²)` rays per computation.
use nalgebra::{Unit, Vector3};
use serde::Serialize;

use crate::{
    constants::{Degree, Kilometer},
    vector_math::rotate,
};

/// Which body a rim point was sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RimSource {
    Eclipsee,
    Eclipser,
}

/// A sampled point on the boundary circle of a body's disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimPoint {
    pub position: Vector3<f64>,
    pub source: RimSource,
    /// Sample angle about the shadow axis, in `[0, 360)` degrees, measured from `perp`.
    pub angle: Degree,
}

/// Sample `samples` equally spaced points on the rim of a body.
///
/// Arguments
/// -----------------
/// * `source`: which body the rim belongs to (kept as a tag on every point).
/// * `center`: the body's center.
/// * `radius`: the body's radius (km).
/// * `axis`: unit shadow axis, normal of the rim plane.
/// * `perp`: unit vector orthogonal to `axis`, direction of the sample at angle 0.
/// * `samples`: number of points `N`; the angular step is `360 / N` degrees.
///
/// Return
/// ----------
/// * `N` rim points ordered by increasing sample angle. An empty vector when `samples == 0`.
///
/// See also
/// ------------
/// * [`rotate`] – Rodrigues rotation used for every sample.
pub fn sample_rim(
    source: RimSource,
    center: &Vector3<f64>,
    radius: Kilometer,
    axis: &Unit<Vector3<f64>>,
    perp: &Unit<Vector3<f64>>,
    samples: usize,
) -> Vec<RimPoint> {
    if samples == 0 {
        return Vec::new();
    }

    let radius_vector = perp.into_inner() * radius;
    let step: Degree = 360.0 / samples as f64;

    (0..samples)
        .map(|k| {
            let angle = k as f64 * step;
            RimPoint {
                position: center + rotate(axis, angle, &radius_vector),
                source,
                angle,
            }
        })
        .collect()
}
