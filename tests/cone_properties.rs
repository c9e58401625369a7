mod common;

use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use umbra::cone_geometry::ShadowCone;
use umbra::{Body, ShadowEngine, ShadowParams};

use crate::common::assert_categories_follow_bands;

fn random_unit(rng: &mut StdRng) -> Vector3<f64> {
    loop {
        let v = Vector3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let n = v.norm();
        if n > 0.1 && n < 1.0 {
            return v / n;
        }
    }
}

/// Random eclipse geometry whose umbra apex lies beyond the screen at a `fraction` of the apex
/// distance, in a random direction and a random frame position.
fn random_umbral_system(rng: &mut StdRng, fraction: f64) -> (Body, Body, Body) {
    let eclipsee_radius = rng.random_range(100.0..10_000.0);
    let eclipser_radius = rng.random_range(1.0..0.5 * eclipsee_radius);
    let d = rng.random_range(1.0e5..1.0e7);
    let apex = eclipser_radius * d / (eclipsee_radius - eclipser_radius);
    let d2 = fraction * apex;
    let screen_radius = rng.random_range(0.5..4.0) * eclipser_radius;

    let axis = random_unit(rng);
    let origin = random_unit(rng) * rng.random_range(1.0e4..1.0e6);

    (
        Body::new(origin, eclipsee_radius).unwrap(),
        Body::new(origin + axis * d, eclipser_radius).unwrap(),
        Body::new(origin + axis * (d + d2), screen_radius).unwrap(),
    )
}

#[test]
fn test_angle_ordering_without_antumbra() {
    let mut rng = StdRng::seed_from_u64(42_u64);

    for _ in 0..500 {
        let fraction = rng.random_range(0.05..0.95);
        let (eclipsee, eclipser, screen) = random_umbral_system(&mut rng, fraction);
        let reference = random_unit(&mut rng);

        let cone = ShadowCone::new(&eclipsee, &eclipser, &screen, Some(&reference)).unwrap();

        assert!(!cone.antumbra);
        assert!(cone.a1 > 0.0);
        assert!(cone.a1 <= cone.a3, "a1 = {}, a3 = {}", cone.a1, cone.a3);
        assert!(cone.a3 <= cone.a2, "a3 = {}, a2 = {}", cone.a3, cone.a2);
        assert!(cone.shadow_radius > 0.0);
    }
}

#[test]
fn test_antumbra_beyond_apex() {
    let mut rng = StdRng::seed_from_u64(7_u64);

    for _ in 0..200 {
        let fraction = rng.random_range(1.05..3.0);
        let (eclipsee, eclipser, screen) = random_umbral_system(&mut rng, fraction);
        let reference = random_unit(&mut rng);

        let cone = ShadowCone::new(&eclipsee, &eclipser, &screen, Some(&reference)).unwrap();

        assert!(cone.antumbra);
        assert!(cone.shadow_radius < 0.0);
        assert!(cone.umbra_apex_distance().unwrap() < cone.d2);
    }
}

#[test]
fn test_grid_categories_match_angle_bands() {
    let mut rng = StdRng::seed_from_u64(2024_u64);

    for _ in 0..20 {
        let fraction = rng.random_range(0.05..2.0);
        let (eclipsee, eclipser, screen) = random_umbral_system(&mut rng, fraction);
        let params = ShadowParams::builder()
            .rim_samples(24)
            .reference_direction(random_unit(&mut rng))
            .build()
            .unwrap();

        let result = ShadowEngine::new(params)
            .compute(&eclipsee, &eclipser, &screen)
            .unwrap();

        assert_eq!(
            result.summary.hits + result.summary.misses,
            result.boundary_grid.len()
        );
        assert_categories_follow_bands(&result, 1e-4);
    }
}
