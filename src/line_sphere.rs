//! # Line–sphere intersection
//!
//! Intersects the infinite line `o + s·u` with the sphere `|x − t| = r` by solving
//!
//! ```text
//! a·s² + b·s + c = 0,   a = u·u,   b = 2·u·(o − t),   c = |o − t|² − r²
//! ```
//!
//! A negative discriminant means the line misses the sphere. Otherwise the smaller root
//! `s = (−b − √disc) / 2a` is kept: the first crossing encountered when travelling along `u`.
//! No filtering on the sign of `s` is applied, so a sphere lying behind the origin still yields
//! its nearer crossing with a negative parameter.
use nalgebra::Vector3;

use crate::constants::Kilometer;

/// Nearer crossing of a ray with a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Intersection point, in the frame of the inputs.
    pub point: Vector3<f64>,
    /// Ray parameter `s` such that `point = origin + s · direction`.
    pub parameter: f64,
}

/// Intersect a ray with a sphere and return the nearer crossing.
///
/// Arguments
/// -----------------
/// * `origin`: ray origin `o`.
/// * `direction`: ray direction `u`, not necessarily normalized but non-zero.
/// * `center`: sphere center `t`.
/// * `radius`: sphere radius `r` (km).
///
/// Return
/// ----------
/// * `Some(RayHit)` with the smaller root, or `None` when the discriminant is negative.
///   A tangent line (zero discriminant) counts as a hit.
///
/// Panics
/// ----------
/// In debug builds, if `direction` has zero length.
pub fn intersect_sphere(
    origin: &Vector3<f64>,
    direction: &Vector3<f64>,
    center: &Vector3<f64>,
    radius: Kilometer,
) -> Option<RayHit> {
    let oc = origin - center;
    let a = direction.dot(direction);
    debug_assert!(a > 0.0, "ray direction must be non-zero");

    let b = 2.0 * direction.dot(&oc);
    let c = oc.dot(&oc) - radius * radius;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    let s = (-b - disc.sqrt()) / (2.0 * a);
    Some(RayHit {
        point: origin + direction * s,
        parameter: s,
    })
}
