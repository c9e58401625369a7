//! # Shadow engine
//!
//! Runs one end-to-end shadow computation for an (eclipsee, eclipser, screen) triple:
//!
//! 1. build the [`ShadowCone`] (axis, perpendicular, half-angles, antumbra flag),
//! 2. intersect the eclipsee-center → eclipser-center centerline with the screen,
//! 3. sample `N` points on both rims,
//! 4. trace the `N × N` rays (eclipsee rim point → eclipser rim point), intersect each with the
//!    screen and classify the hits,
//! 5. summarize the grid.
//!
//! The computation is a pure function of its inputs: the engine holds no state besides its
//! [`ShadowParams`], and each call returns a fresh [`ShadowResult`] owned by the caller. Grid
//! cells are independent of each other; with the `parallel` cargo feature the rows are evaluated
//! on the rayon thread pool.
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector3;
//! use umbra::{find_shadow, Body, ShadowCategory};
//! use umbra::constants::{EARTH_RADIUS_KM, MOON_RADIUS_KM, SUN_RADIUS_KM};
//!
//! let sun = Body::new(Vector3::new(0.0, 1.0e6, 0.0), SUN_RADIUS_KM).unwrap();
//! let earth = Body::new(Vector3::new(1.4975e8, 1.0e6, 0.0), EARTH_RADIUS_KM).unwrap();
//! let moon = Body::new(Vector3::new(1.4975e8 - 359_800.0, 1.0e6, 0.0), MOON_RADIUS_KM).unwrap();
//!
//! let result = find_shadow(&sun, &moon, &earth).unwrap();
//!
//! assert!(!result.centerline_missed());
//! assert_eq!(result.center_intercept.category, ShadowCategory::Umbra);
//! assert_eq!(result.boundary_grid.shape(), (36, 36));
//! ```
use itertools::iproduct;
use nalgebra::Vector3;
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    body::Body,
    cone_geometry::ShadowCone,
    line_sphere::intersect_sphere,
    rim_sampler::{sample_rim, RimPoint, RimSource},
    shadow::{
        shadow_result::{BoundaryGrid, Intercept, ShadowResult, ShadowSummary},
        ShadowParams,
    },
    shadow_classifier::{classify, ShadowCategory},
    umbra_errors::UmbraError,
    vector_math::angle_between,
};

/// Shadow computation entry point.
#[derive(Debug, Clone, Default)]
pub struct ShadowEngine {
    params: ShadowParams,
}

/// Read-only state shared by every ray of a computation.
struct RayTracer<'a> {
    cone: &'a ShadowCone,
    screen: &'a Body,
    epsilon: f64,
}

impl RayTracer<'_> {
    /// Intersect the ray `origin → through` with the screen and classify the hit.
    fn trace(&self, origin: &Vector3<f64>, through: &Vector3<f64>) -> Intercept {
        let direction = through - origin;
        match intersect_sphere(
            origin,
            &direction,
            &self.screen.position,
            self.screen.radius,
        ) {
            None => Intercept::miss(),
            Some(hit) => {
                let phi = angle_between(&direction, self.cone.axis.as_ref());
                Intercept {
                    position: Some(hit.point),
                    angular_offset: Some(phi),
                    category: classify(phi, self.cone, self.epsilon),
                }
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn trace_row(&self, origin: &RimPoint, eclipser_rim: &[RimPoint]) -> Vec<Intercept> {
        eclipser_rim
            .iter()
            .map(|through| self.trace(&origin.position, &through.position))
            .collect()
    }

    fn trace_grid_sequential(
        &self,
        eclipsee_rim: &[RimPoint],
        eclipser_rim: &[RimPoint],
    ) -> Vec<Intercept> {
        iproduct!(eclipsee_rim.iter(), eclipser_rim.iter())
            .map(|(origin, through)| self.trace(&origin.position, &through.position))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn trace_grid_parallel(
        &self,
        eclipsee_rim: &[RimPoint],
        eclipser_rim: &[RimPoint],
    ) -> Vec<Intercept> {
        let rows: Vec<Vec<Intercept>> = eclipsee_rim
            .par_iter()
            .map(|origin| self.trace_row(origin, eclipser_rim))
            .collect();

        rows.into_iter().flatten().collect()
    }

    #[cfg(feature = "parallel")]
    fn trace_grid(
        &self,
        eclipsee_rim: &[RimPoint],
        eclipser_rim: &[RimPoint],
        parallel: bool,
    ) -> Vec<Intercept> {
        if parallel {
            self.trace_grid_parallel(eclipsee_rim, eclipser_rim)
        } else {
            self.trace_grid_sequential(eclipsee_rim, eclipser_rim)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn trace_grid(
        &self,
        eclipsee_rim: &[RimPoint],
        eclipser_rim: &[RimPoint],
        _parallel: bool,
    ) -> Vec<Intercept> {
        self.trace_grid_sequential(eclipsee_rim, eclipser_rim)
    }
}

impl ShadowEngine {
    pub fn new(params: ShadowParams) -> Self {
        ShadowEngine { params }
    }

    pub fn params(&self) -> &ShadowParams {
        &self.params
    }

    /// Compute the shadow of `eclipser`, lit by `eclipsee`, on `screen`.
    ///
    /// Arguments
    /// -----------------
    /// * `eclipsee`: the light source (e.g. the Sun).
    /// * `eclipser`: the shadow-casting body (e.g. the Moon).
    /// * `screen`: the receiving body (e.g. the Earth).
    ///
    /// All three must be expressed in the same frame, in kilometers, at the same instant.
    ///
    /// Return
    /// ----------
    /// * A [`ShadowResult`] with the cone, the centerline intercept, both rims, the
    ///   `N × N` boundary grid (`N = rim_samples`) and its summary.
    ///
    /// Errors
    /// ----------
    /// * [`UmbraError::InvalidBody`] – a body has a non-finite position or a non-positive radius.
    /// * [`UmbraError::InvalidShadowParameter`] – the engine parameters break a validation rule.
    /// * [`UmbraError::GeometryDegenerate`] – eclipsee and eclipser coincide, or the reference
    ///   direction used for the rim perpendicular is zero or parallel to the shadow axis.
    ///
    /// Remarks
    /// ----------
    /// * A centerline missing the screen is not an error: the result has no center position and
    ///   [`ShadowResult::centerline_missed`] returns `true`.
    /// * Rays that hit the screen but fall in no angle band are kept as
    ///   [`ShadowCategory::NoShadow`], counted in [`ShadowSummary::unclassified`] and reported
    ///   with a `warn` event.
    pub fn compute(
        &self,
        eclipsee: &Body,
        eclipser: &Body,
        screen: &Body,
    ) -> Result<ShadowResult, UmbraError> {
        self.params.validate()?;
        eclipsee.validate()?;
        eclipser.validate()?;
        screen.validate()?;

        let cone = ShadowCone::new(
            eclipsee,
            eclipser,
            screen,
            self.params.reference_direction.as_ref(),
        )?;

        let center_intercept = centerline(eclipsee, eclipser, screen, &cone);

        let n = self.params.rim_samples;
        let eclipsee_rim = sample_rim(
            RimSource::Eclipsee,
            &eclipsee.position,
            eclipsee.radius,
            &cone.axis,
            &cone.perp,
            n,
        );
        let eclipser_rim = sample_rim(
            RimSource::Eclipser,
            &eclipser.position,
            eclipser.radius,
            &cone.axis,
            &cone.perp,
            n,
        );

        let tracer = RayTracer {
            cone: &cone,
            screen,
            epsilon: self.params.epsilon,
        };
        let cells = tracer.trace_grid(&eclipsee_rim, &eclipser_rim, self.params.parallel);
        let boundary_grid = BoundaryGrid::from_cells(n, n, cells);
        let summary = ShadowSummary::from_intercepts(boundary_grid.iter());

        if summary.unclassified > 0 {
            warn!(
                unclassified = summary.unclassified,
                hits = summary.hits,
                "screen intercepts matched no shadow band"
            );
        }
        info!(
            rays = boundary_grid.len(),
            hits = summary.hits,
            misses = summary.misses,
            penumbra = summary.penumbra,
            umbra = summary.umbra,
            antumbra = summary.antumbra,
            "shadow grid classified"
        );

        Ok(ShadowResult {
            cone,
            center_intercept,
            boundary_grid,
            eclipsee_rim,
            eclipser_rim,
            summary,
        })
    }
}

/// Intersect the eclipsee-center → eclipser-center line with the screen.
///
/// The centerline hit is [`ShadowCategory::Antumbra`] when the cone is antumbral and
/// [`ShadowCategory::Umbra`] otherwise.
fn centerline(eclipsee: &Body, eclipser: &Body, screen: &Body, cone: &ShadowCone) -> Intercept {
    let direction = eclipser.position - eclipsee.position;
    match intersect_sphere(
        &eclipsee.position,
        &direction,
        &screen.position,
        screen.radius,
    ) {
        None => {
            debug!("centerline misses the screen, no eclipse on the center line");
            Intercept::miss()
        }
        Some(hit) => Intercept {
            position: Some(hit.point),
            angular_offset: Some(angle_between(&direction, cone.axis.as_ref())),
            category: if cone.antumbra {
                ShadowCategory::Antumbra
            } else {
                ShadowCategory::Umbra
            },
        },
    }
}

/// Compute a shadow with default [`ShadowParams`].
///
/// Shorthand for `ShadowEngine::default().compute(eclipsee, eclipser, screen)`.
pub fn find_shadow(
    eclipsee: &Body,
    eclipser: &Body,
    screen: &Body,
) -> Result<ShadowResult, UmbraError> {
    ShadowEngine::default().compute(eclipsee, eclipser, screen)
}
