//! # Shadow computation parameters
//!
//! This module defines the [`crate::shadow::ShadowParams`] configuration struct and its builder,
//! which control how the [`ShadowEngine`](crate::shadow::engine::ShadowEngine) samples the rims
//! of the eclipsee and the eclipser, how tolerant the classifier is at the band edges, and how
//! degenerate frames are handled.
//!
//! ## Pipeline overview
//!
//! 1. **Cone geometry**
//!    Axis, perpendicular and cone half-angles are derived once from the three bodies. The
//!    perpendicular is built from the eclipsee position, or from `reference_direction` when set.
//!
//! 2. **Centerline**
//!    The eclipsee center → eclipser center ray is intersected with the screen: the best single
//!    estimate of the shadow center.
//!
//! 3. **Rim sampling**
//!    Both rims are sampled with `rim_samples` equally spaced points.
//!
//! 4. **Grid classification**
//!    Every (eclipsee rim, eclipser rim) pair forms a ray; each ray is intersected with the
//!    screen and classified with the relative tolerance `epsilon`. Rows are evaluated in
//!    parallel when `parallel` is set and the `parallel` cargo feature is enabled.
//!
//! ## Example
//!
//! ```rust
//! use umbra::shadow::ShadowParams;
//!
//! let params = ShadowParams::builder()
//!     .step_degrees(20.0)
//!     .epsilon(1e-6)
//!     .parallel(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.rim_samples, 18);
//! ```
//!
//! ## See also
//!
//! * [`crate::shadow::engine::ShadowEngine`] – consumes these parameters
//! * [`crate::shadow::shadow_result::ShadowResult`] – output of a computation
use nalgebra::Vector3;

use crate::{
    constants::{Degree, DEFAULT_EPSILON, DEFAULT_RIM_SAMPLES},
    umbra_errors::UmbraError,
};

pub mod engine;
pub mod shadow_result;

/// Configuration of one shadow computation.
///
/// Fields
/// -----------------
/// * `rim_samples` – number of points `N` sampled on each rim; the angular step is `360 / N`
///   degrees and the grid holds `N × N` intercepts.
/// * `epsilon` – relative tolerance applied to the umbra lower bound `(1 − ε)·a1` and the
///   penumbra upper bound `(1 + ε)·a2`.
/// * `reference_direction` – optional vector used instead of the eclipsee position to build the
///   rim-sampling perpendicular. Required when the eclipsee position is zero or parallel to the
///   shadow axis (e.g. frames centred on the eclipsee).
/// * `parallel` – evaluate grid rows concurrently (only effective with the `parallel` feature).
///
/// Defaults
/// -----------------
/// * `rim_samples`: 36 (10° step)
/// * `epsilon`: 1e-4
/// * `reference_direction`: `None`
/// * `parallel`: `true`
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowParams {
    pub rim_samples: usize,
    pub epsilon: f64,
    pub reference_direction: Option<Vector3<f64>>,
    pub parallel: bool,
}

impl ShadowParams {
    /// Construct a new [`ShadowParams`] with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`ShadowParamsBuilder`].
    pub fn builder() -> ShadowParamsBuilder {
        ShadowParamsBuilder::new()
    }

    /// Angular step between two consecutive rim samples, in degrees.
    pub fn step_degrees(&self) -> Degree {
        360.0 / self.rim_samples as f64
    }
}

impl Default for ShadowParams {
    fn default() -> Self {
        ShadowParams {
            rim_samples: DEFAULT_RIM_SAMPLES,
            epsilon: DEFAULT_EPSILON,
            reference_direction: None,
            parallel: true,
        }
    }
}

/// Builder for [`ShadowParams`], with validation.
#[derive(Debug, Clone)]
pub struct ShadowParamsBuilder {
    params: ShadowParams,
    step_degrees: Option<Degree>,
}

impl Default for ShadowParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadowParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: ShadowParams::default(),
            step_degrees: None,
        }
    }

    pub fn rim_samples(mut self, v: usize) -> Self {
        self.params.rim_samples = v;
        self.step_degrees = None;
        self
    }

    /// Set the sampling through its angular step instead of a count.
    ///
    /// The step must divide 360° into a whole number of samples; this is checked by
    /// [`build`](ShadowParamsBuilder::build).
    pub fn step_degrees(mut self, v: Degree) -> Self {
        self.step_degrees = Some(v);
        self
    }

    pub fn epsilon(mut self, v: f64) -> Self {
        self.params.epsilon = v;
        self
    }

    pub fn reference_direction(mut self, v: Vector3<f64>) -> Self {
        self.params.reference_direction = Some(v);
        self
    }

    pub fn parallel(mut self, v: bool) -> Self {
        self.params.parallel = v;
        self
    }

    /// Finalize the builder and produce a [`ShadowParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `step_degrees`, when set, must be in `(0, 360]` and divide 360° into a whole number
    ///   of samples (within `1e-9`).
    /// * `rim_samples ≥ 1`.
    /// * `0 ≤ epsilon < 1` and finite.
    /// * `reference_direction`, when set, must be finite and non-zero.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(ShadowParams)` if all values are valid.
    /// * `Err(UmbraError::InvalidShadowParameter)` otherwise.
    pub fn build(self) -> Result<ShadowParams, UmbraError> {
        let mut p = self.params;

        if let Some(step) = self.step_degrees {
            if !(step > 0.0 && step <= 360.0) {
                return Err(UmbraError::InvalidShadowParameter(format!(
                    "step_degrees must be in (0, 360], got {step}"
                )));
            }
            let count = 360.0 / step;
            if (count - count.round()).abs() > 1e-9 {
                return Err(UmbraError::InvalidShadowParameter(format!(
                    "step_degrees must divide 360 evenly, got {step}"
                )));
            }
            p.rim_samples = count.round() as usize;
        }

        p.validate()?;
        Ok(p)
    }
}

impl ShadowParams {
    /// Check the rules enforced by [`ShadowParamsBuilder::build`] on an existing value.
    pub fn validate(&self) -> Result<(), UmbraError> {
        let p = self;
        if p.rim_samples == 0 {
            return Err(UmbraError::InvalidShadowParameter(
                "rim_samples must be >= 1".into(),
            ));
        }
        if !(p.epsilon >= 0.0 && p.epsilon < 1.0) {
            return Err(UmbraError::InvalidShadowParameter(format!(
                "epsilon must be in [0, 1), got {}",
                p.epsilon
            )));
        }
        if let Some(reference) = &p.reference_direction {
            if reference.iter().any(|c| !c.is_finite()) || reference.norm() == 0.0 {
                return Err(UmbraError::InvalidShadowParameter(
                    "reference_direction must be finite and non-zero".into(),
                ));
            }
        }
        Ok(())
    }
}
