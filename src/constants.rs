//! # Constants and type definitions for Umbra
//!
//! This module centralizes the **physical constants**, **numerical thresholds**, and **unit
//! aliases** used throughout the `umbra` library.
//!
//! ## Overview
//!
//! - Reference radii of the Sun, the Moon and the Earth (the classic eclipsee / eclipser /
//!   screen triple)
//! - Unit conversions (degrees ↔ radians)
//! - Default sampling and tolerance values used by [`ShadowParams`](crate::shadow::ShadowParams)
//! - Unit aliases used across the crate
//!
//! All distances are expressed in **kilometers** and all angles handed to the classifier in
//! **radians**. Rim sample angles are expressed in **degrees**.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Mean radius of the Sun in kilometers
pub const SUN_RADIUS_KM: f64 = 696_340.0;

/// Mean radius of the Moon in kilometers
pub const MOON_RADIUS_KM: f64 = 1_737.4;

/// Mean radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

// -------------------------------------------------------------------------------------------------
// Numerical thresholds and defaults
// -------------------------------------------------------------------------------------------------

/// Relative threshold below which a cross product is considered degenerate.
///
/// A reference vector `r` and a unit axis `a` are treated as parallel when
/// `|r × a| <= DEGENERACY_EPS * |r|`, i.e. when the sine of their angle is below this value.
pub const DEGENERACY_EPS: f64 = 1e-12;

/// Default relative tolerance applied to the umbra/penumbra angle bands
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Default number of rim samples per body (10° step)
pub const DEFAULT_RIM_SAMPLES: usize = 36;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
