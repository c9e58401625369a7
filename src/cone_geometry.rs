//! # Shadow cone geometry
//!
//! Derives, once per computation, every quantity of the eclipser's shadow cone that the rest of
//! the pipeline needs: the eclipsee → eclipser axis, a perpendicular direction fixing the rim
//! sampling phase, the three cone half-angles and the signed umbra radius at the screen distance.
//!
//! ```text
//!                 a2 (outer penumbra)
//!   eclipsee  ─────────────────────── eclipser ───── d2 ───── screen
//!      R_s          a1 (umbra edge)      R_m                  R_e
//!       |<────────────── d ────────────>|
//! ```
//!
//! * `a1 = atan2(R_s − R_m, d)` – half-angle of the converging umbra boundary rays.
//!   Negative when the eclipser is larger than the eclipsee (no antumbra possible).
//! * `a2 = atan2(R_s + R_m, d)` – half-angle of the outer penumbra boundary rays.
//! * `a3 = atan2(R_s + R_m − d2·tan a1, d + d2)` – separates umbra from penumbra for the
//!   classifier, as seen at the screen distance.
//! * `shadow_radius = R_m − d2·tan a1` – signed umbra radius at the screen distance; negative when
//!   the umbra cone has already converged before reaching the screen.
//!
//! When no umbra apex lies between eclipser and screen, `a1 ≤ a3 ≤ a2` holds. When the apex does
//! lie in between (`a1 > 0` and `R_m / tan a1 < d2`) the whole computation is flagged antumbral.
use nalgebra::{Unit, Vector3};
use tracing::debug;

use crate::{
    body::Body,
    constants::{Kilometer, Radian, DEGENERACY_EPS},
    umbra_errors::UmbraError,
    vector_math::unit_direction,
};

/// Immutable shadow-cone description shared (read-only) by every ray of one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowCone {
    /// Eclipsee ↔ eclipser center distance (km).
    pub d: Kilometer,
    /// Eclipser ↔ screen center distance (km).
    pub d2: Kilometer,
    /// Umbra boundary half-angle (rad), may be negative.
    pub a1: Radian,
    /// Outer penumbra half-angle (rad).
    pub a2: Radian,
    /// Umbra / penumbra separation angle at the screen distance (rad).
    pub a3: Radian,
    /// Signed umbra radius at the screen distance (km).
    pub shadow_radius: Kilometer,
    /// Unit eclipsee → eclipser direction.
    pub axis: Unit<Vector3<f64>>,
    /// Unit vector orthogonal to `axis`, origin of the rim sample angles.
    pub perp: Unit<Vector3<f64>>,
    /// Radius of the eclipser (km), kept for the apex distance.
    pub eclipser_radius: Kilometer,
    /// Global antumbra condition: the umbra apex lies closer to the eclipser than the screen.
    pub antumbra: bool,
}

impl ShadowCone {
    /// Compute the shadow cone of `eclipser` lit by `eclipsee`, as seen on `screen`.
    ///
    /// Arguments
    /// -----------------
    /// * `eclipsee`: the light source (e.g. the Sun).
    /// * `eclipser`: the shadow-casting body (e.g. the Moon).
    /// * `screen`: the body receiving the shadow (e.g. the Earth).
    /// * `reference`: optional reference direction used to build `perp`. When `None`, the
    ///   eclipsee position vector is used, so the sampling phase follows the frame origin.
    ///
    /// Return
    /// ----------
    /// * The [`ShadowCone`], or [`UmbraError::GeometryDegenerate`] when:
    ///   - the eclipsee and the eclipser centers coincide (no axis),
    ///   - the reference direction is zero or parallel to the axis (no perpendicular).
    ///
    /// See also
    /// ------------
    /// * [`ShadowParams::reference_direction`](crate::shadow::ShadowParams::reference_direction) –
    ///   Fallback reference for frames centred on the eclipsee or aligned with the axis.
    pub fn new(
        eclipsee: &Body,
        eclipser: &Body,
        screen: &Body,
        reference: Option<&Vector3<f64>>,
    ) -> Result<Self, UmbraError> {
        let along = eclipser.position - eclipsee.position;
        let d = along.norm();
        let d2 = eclipser.distance_to(screen);

        let a1 = (eclipsee.radius - eclipser.radius).atan2(d);
        let a2 = (eclipsee.radius + eclipser.radius).atan2(d);
        let tan_a1 = a1.tan();
        let a3 = (eclipsee.radius + eclipser.radius - d2 * tan_a1).atan2(d + d2);
        let shadow_radius = eclipser.radius - d2 * tan_a1;

        let axis = unit_direction(&along, "eclipsee -> eclipser axis")?;

        let reference = reference.unwrap_or(&eclipsee.position);
        let cross = reference.cross(axis.as_ref());
        if cross.norm() <= DEGENERACY_EPS * reference.norm() {
            return Err(UmbraError::GeometryDegenerate(format!(
                "reference direction [{}, {}, {}] is zero or parallel to the shadow axis; \
                 supply a fallback reference direction",
                reference.x, reference.y, reference.z
            )));
        }
        let perp = unit_direction(&cross, "rim sampling perpendicular")?;

        let antumbra = a1 > 0.0 && eclipser.radius / tan_a1 < d2;

        debug!(d, d2, a1, a2, a3, shadow_radius, antumbra, "shadow cone computed");

        Ok(ShadowCone {
            d,
            d2,
            a1,
            a2,
            a3,
            shadow_radius,
            axis,
            perp,
            eclipser_radius: eclipser.radius,
            antumbra,
        })
    }

    /// Distance from the eclipser center to the umbra apex (km).
    ///
    /// Returns `None` when `a1 <= 0`: an eclipser at least as large as the eclipsee casts a
    /// non-converging umbra.
    pub fn umbra_apex_distance(&self) -> Option<Kilometer> {
        (self.a1 > 0.0).then(|| self.eclipser_radius / self.a1.tan())
    }
}

#[cfg(test)]
mod cone_geometry_test {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::constants::{EARTH_RADIUS_KM, MOON_RADIUS_KM, SUN_RADIUS_KM};

    const SUN_EARTH_KM: f64 = 1.4975e8;

    /// Sun, Moon and Earth on a line parallel to x, with the Sun off the frame origin.
    fn aligned(moon_earth: f64) -> (Body, Body, Body) {
        let sun_pos = Vector3::new(0.0, 1.0e6, 0.0);
        let earth_pos = sun_pos + Vector3::new(SUN_EARTH_KM, 0.0, 0.0);
        let moon_pos = earth_pos - Vector3::new(moon_earth, 0.0, 0.0);
        (
            Body::new(sun_pos, SUN_RADIUS_KM).unwrap(),
            Body::new(moon_pos, MOON_RADIUS_KM).unwrap(),
            Body::new(earth_pos, EARTH_RADIUS_KM).unwrap(),
        )
    }

    #[test]
    fn test_total_eclipse_cone() {
        let (sun, moon, earth) = aligned(359_800.0);
        let cone = ShadowCone::new(&sun, &moon, &earth, None).unwrap();

        assert_relative_eq!(cone.d, SUN_EARTH_KM - 359_800.0, max_relative = 1e-15);
        assert_relative_eq!(cone.d2, 359_800.0, max_relative = 1e-12);

        assert_abs_diff_eq!(cone.axis.into_inner(), Vector3::x(), epsilon = 1e-15);
        assert_abs_diff_eq!(cone.perp.into_inner(), -Vector3::z(), epsilon = 1e-15);
        assert_abs_diff_eq!(cone.axis.dot(cone.perp.as_ref()), 0.0, epsilon = 1e-15);

        assert!(!cone.antumbra);
        assert!(cone.a1 > 0.0);
        assert!(cone.a1 < cone.a3 && cone.a3 < cone.a2);

        // umbra about 65 km in radius at the Earth's center distance
        assert!(cone.shadow_radius > 60.0 && cone.shadow_radius < 70.0);
        assert!(cone.umbra_apex_distance().unwrap() > cone.d2);
    }

    #[test]
    fn test_annular_eclipse_cone() {
        let (sun, moon, earth) = aligned(400_000.0);
        let cone = ShadowCone::new(&sun, &moon, &earth, None).unwrap();

        assert!(cone.antumbra);
        assert!(cone.shadow_radius < 0.0);
        assert!(cone.a3 < cone.a1);
        assert!(cone.umbra_apex_distance().unwrap() < cone.d2);
    }

    #[test]
    fn test_larger_eclipser_has_negative_a1() {
        let eclipsee = Body::new(Vector3::new(0.0, 10.0, 0.0), 1.0).unwrap();
        let eclipser = Body::new(Vector3::new(100.0, 10.0, 0.0), 5.0).unwrap();
        let screen = Body::new(Vector3::new(200.0, 10.0, 0.0), 2.0).unwrap();

        let cone = ShadowCone::new(&eclipsee, &eclipser, &screen, None).unwrap();

        assert!(cone.a1 < 0.0);
        assert!(!cone.antumbra);
        assert!(cone.shadow_radius > eclipser.radius);
        assert_eq!(cone.umbra_apex_distance(), None);
    }

    #[test]
    fn test_reference_parallel_to_axis_is_degenerate() {
        let sun = Body::new(Vector3::new(-SUN_EARTH_KM, 0.0, 0.0), SUN_RADIUS_KM).unwrap();
        let moon = Body::new(Vector3::new(-359_800.0, 0.0, 0.0), MOON_RADIUS_KM).unwrap();
        let earth = Body::new(Vector3::zeros(), EARTH_RADIUS_KM).unwrap();

        assert!(matches!(
            ShadowCone::new(&sun, &moon, &earth, None),
            Err(UmbraError::GeometryDegenerate(_))
        ));

        let fallback = Vector3::new(0.0, 0.0, 1.0);
        let cone = ShadowCone::new(&sun, &moon, &earth, Some(&fallback)).unwrap();
        assert_abs_diff_eq!(cone.perp.into_inner(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_coincident_eclipsee_and_eclipser() {
        let a = Body::new(Vector3::new(1.0, 2.0, 3.0), 5.0).unwrap();
        let screen = Body::new(Vector3::new(10.0, 2.0, 3.0), 1.0).unwrap();

        assert!(matches!(
            ShadowCone::new(&a, &a, &screen, None),
            Err(UmbraError::GeometryDegenerate(_))
        ));
    }
}
