//! # Vector primitives
//!
//! Small geometric helpers on top of [`nalgebra`] used by the shadow pipeline.
//!
//! `dot`, `cross` and `norm` are the inherent [`Vector3`] methods and are not re-wrapped here.
//! This module adds what `nalgebra` does not provide in the form the cone geometry needs:
//!
//! * [`rotation_matrix`] / [`rotate`] – Rodrigues axis-angle rotation, angle in **degrees**.
//! * [`angle_between`] – unsigned angle in `[0, π]`, stable for very small angles.
//! * [`unit_direction`] – checked normalization returning
//!   [`UmbraError::GeometryDegenerate`] instead of a NaN-filled vector.
//!
//! Axis contract
//! -----------------
//! Rotation axes are typed [`Unit<Vector3<f64>>`]: normalization happens exactly once, when the
//! caller builds the unit vector (usually through [`unit_direction`]). [`rotate`] never
//! renormalizes its axis.
use nalgebra::{Matrix3, Unit, Vector3};

use crate::{
    constants::{Degree, Radian, RADEG},
    umbra_errors::UmbraError,
};

/// Build the Rodrigues rotation matrix for a unit axis and an angle in degrees.
///
/// The matrix is
///
/// ```text
/// R = cos θ · I + sin θ · [u]× + (1 − cos θ) · u uᵀ
/// ```
///
/// where `[u]×` is the skew-symmetric cross-product matrix of `u`.
///
/// Arguments
/// -----------------
/// * `axis`: the rotation axis, already normalized.
/// * `angle`: the rotation angle in **degrees**, counter-clockwise about `axis`.
///
/// Return
/// ----------
/// * The 3×3 orthonormal rotation matrix.
///
/// See also
/// ------------
/// * [`rotate`] – Apply the rotation to a vector.
pub fn rotation_matrix(axis: &Unit<Vector3<f64>>, angle: Degree) -> Matrix3<f64> {
    let u = axis.as_ref();
    let (s, c) = (angle * RADEG).sin_cos();

    Matrix3::identity() * c + u.cross_matrix() * s + (u * u.transpose()) * (1.0 - c)
}

/// Rotate `vector` by `angle` degrees about the unit `axis`.
///
/// Arguments
/// -----------------
/// * `axis`: the rotation axis, already normalized.
/// * `angle`: the rotation angle in **degrees**.
/// * `vector`: the vector to rotate.
///
/// Return
/// ----------
/// * The rotated vector. Its norm and its angle to `axis` are preserved.
pub fn rotate(axis: &Unit<Vector3<f64>>, angle: Degree, vector: &Vector3<f64>) -> Vector3<f64> {
    rotation_matrix(axis, angle) * vector
}

/// Unsigned angle between two vectors, in radians within `[0, π]`.
///
/// Computed as `atan2(|a × b|, a · b)`, accurate for the sub-degree cone angles of a solar
/// eclipse.
/// Neither vector needs to be normalized. Returns `0.0` if either vector is zero.
#[inline]
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> Radian {
    a.cross(b).norm().atan2(a.dot(b))
}

/// Normalize `vector`, failing on zero-length or non-finite input.
///
/// Arguments
/// -----------------
/// * `vector`: the vector to normalize.
/// * `what`: a short label used in the error message (e.g. `"shadow axis"`).
///
/// Return
/// ----------
/// * The unit vector, or [`UmbraError::GeometryDegenerate`] if the norm is zero or not finite.
pub fn unit_direction(vector: &Vector3<f64>, what: &str) -> Result<Unit<Vector3<f64>>, UmbraError> {
    let norm = vector.norm();
    if !norm.is_finite() || norm == 0.0 {
        return Err(UmbraError::GeometryDegenerate(format!(
            "{what} has zero or non-finite length ({norm})"
        )));
    }
    Ok(Unit::new_unchecked(vector / norm))
}
