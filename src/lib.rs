//! # Umbra
//!
//! Shadow geometry for three spherical bodies: an **eclipsee** (light source, e.g. the Sun), an
//! **eclipser** (occulting body, e.g. the Moon) and a **screen** (receiving body, e.g. the Earth).
//!
//! Given the three bodies at one instant, [`ShadowEngine::compute`] builds the shadow cone,
//! samples both rims, traces every rim-to-rim ray onto the screen and classifies each intercept
//! as penumbra, umbra, antumbra or no shadow. The result is a [`ShadowResult`] holding the
//! centerline intercept (best estimate of the shadow center) and the `N × N` boundary grid.
//!
//! ```rust
//! use nalgebra::Vector3;
//! use umbra::{Body, ShadowEngine, ShadowParams};
//! use umbra::constants::{EARTH_RADIUS_KM, MOON_RADIUS_KM, SUN_RADIUS_KM};
//!
//! let sun = Body::new(Vector3::new(0.0, 1.0e6, 0.0), SUN_RADIUS_KM).unwrap();
//! let earth = Body::new(Vector3::new(1.4975e8, 1.0e6, 0.0), EARTH_RADIUS_KM).unwrap();
//! let moon = Body::new(Vector3::new(1.4975e8 - 359_800.0, 1.0e6, 0.0), MOON_RADIUS_KM).unwrap();
//!
//! let engine = ShadowEngine::new(ShadowParams::builder().step_degrees(20.0).build().unwrap());
//! let result = engine.compute(&sun, &moon, &earth).unwrap();
//!
//! assert!(result.summary.umbra > 0);
//! assert!(result.summary.penumbra > 0);
//! ```
//!
//! Positions and radii are kilometers in any shared inertial frame. Ephemeris lookup,
//! eclipse-time search and plotting are left to the caller.
pub mod body;
pub mod cone_geometry;
pub mod constants;
pub mod line_sphere;
pub mod rim_sampler;
pub mod screen_coords;
pub mod shadow;
pub mod shadow_classifier;
pub mod umbra_errors;
pub mod vector_math;

pub use body::Body;
pub use shadow::engine::{find_shadow, ShadowEngine};
pub use shadow::shadow_result::{Intercept, ShadowResult, ShadowSummary};
pub use shadow::ShadowParams;
pub use shadow_classifier::ShadowCategory;
pub use umbra_errors::UmbraError;
