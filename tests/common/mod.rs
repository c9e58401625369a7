#![allow(dead_code)]

use approx::assert_relative_eq;
use nalgebra::Vector3;
use umbra::constants::{EARTH_RADIUS_KM, MOON_RADIUS_KM, SUN_RADIUS_KM};
use umbra::{Body, ShadowCategory, ShadowResult};

pub const SUN_EARTH_KM: f64 = 1.4975e8;

/// Moon–Earth distance giving a total eclipse (umbra apex beyond the Earth's center).
pub const TOTAL_MOON_EARTH_KM: f64 = 359_800.0;

/// Moon–Earth distance giving an annular eclipse (umbra apex before the Earth's center).
pub const ANNULAR_MOON_EARTH_KM: f64 = 400_000.0;

/// Sun, Moon and Earth aligned along +x, the Sun 10⁶ km off the frame origin along y.
pub fn sun_moon_earth(moon_earth: f64, earth_radius: f64) -> (Body, Body, Body) {
    let sun_pos = Vector3::new(0.0, 1.0e6, 0.0);
    let earth_pos = sun_pos + Vector3::new(SUN_EARTH_KM, 0.0, 0.0);
    let moon_pos = earth_pos - Vector3::new(moon_earth, 0.0, 0.0);
    (
        Body::new(sun_pos, SUN_RADIUS_KM).unwrap(),
        Body::new(moon_pos, MOON_RADIUS_KM).unwrap(),
        Body::new(earth_pos, earth_radius).unwrap(),
    )
}

pub fn aligned(moon_earth: f64) -> (Body, Body, Body) {
    sun_moon_earth(moon_earth, EARTH_RADIUS_KM)
}

/// Check that every classified intercept agrees with the angle bands of its cone.
pub fn assert_categories_follow_bands(result: &ShadowResult, epsilon: f64) {
    let cone = &result.cone;
    for intercept in result.boundary_grid.iter() {
        let Some(phi) = intercept.angular_offset else {
            assert_eq!(intercept.category, ShadowCategory::NoShadow);
            continue;
        };
        match intercept.category {
            ShadowCategory::Umbra => {
                assert!(phi >= (1.0 - epsilon) * cone.a1 && phi < cone.a3)
            }
            ShadowCategory::Penumbra => {
                assert!(phi >= cone.a3 && phi <= (1.0 + epsilon) * cone.a2)
            }
            ShadowCategory::Antumbra => assert!(cone.antumbra),
            ShadowCategory::NoShadow => assert!(intercept.is_unclassified()),
        }
    }
}

/// Check that every hit lies on the screen surface.
pub fn assert_hits_on_surface(result: &ShadowResult, screen: &Body) {
    for intercept in result.boundary_grid.iter() {
        if let Some(p) = intercept.position {
            assert!(p.iter().all(|c| c.is_finite()));
            assert_relative_eq!((p - screen.position).norm(), screen.radius, max_relative = 1e-6);
        }
    }
}
