//! # Shadow classification
//!
//! Assigns a [`ShadowCategory`] to a ray that reached the screen, from the angle `φ` between the
//! ray and the shadow axis. Rules are evaluated in order, first match wins:
//!
//! 1. the cone is antumbral (global condition) → [`ShadowCategory::Antumbra`]
//! 2. `(1 − ε)·a1 ≤ φ < a3` → [`ShadowCategory::Umbra`]
//! 3. `a3 ≤ φ ≤ (1 + ε)·a2` → [`ShadowCategory::Penumbra`]
//! 4. otherwise → [`ShadowCategory::NoShadow`]
//!
//! Reaching rule 4 for a ray that did hit the screen means the angle bands and the actual
//! geometry disagree. The engine counts and reports those intercepts as unclassified.
use std::fmt;

use serde::Serialize;

use crate::{cone_geometry::ShadowCone, constants::Radian};

/// Shadow region a screen intercept belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ShadowCategory {
    /// No shadow: the ray missed the screen, or matched none of the angle bands.
    #[default]
    NoShadow,
    Penumbra,
    Umbra,
    Antumbra,
}

impl ShadowCategory {
    /// Numeric code of the category: `0` none, `1` penumbra, `2` umbra, `3` antumbra.
    pub fn code(&self) -> u8 {
        match self {
            ShadowCategory::NoShadow => 0,
            ShadowCategory::Penumbra => 1,
            ShadowCategory::Umbra => 2,
            ShadowCategory::Antumbra => 3,
        }
    }

    /// Inverse of [`ShadowCategory::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ShadowCategory::NoShadow),
            1 => Some(ShadowCategory::Penumbra),
            2 => Some(ShadowCategory::Umbra),
            3 => Some(ShadowCategory::Antumbra),
            _ => None,
        }
    }

    /// True for every category but [`ShadowCategory::NoShadow`].
    pub fn is_shadow(&self) -> bool {
        !matches!(self, ShadowCategory::NoShadow)
    }
}

impl fmt::Display for ShadowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShadowCategory::NoShadow => "none",
            ShadowCategory::Penumbra => "penumbra",
            ShadowCategory::Umbra => "umbra",
            ShadowCategory::Antumbra => "antumbra",
        };
        f.write_str(label)
    }
}

/// Classify a screen intercept from its angular offset to the shadow axis.
///
/// Arguments
/// -----------------
/// * `angular_offset`: angle `φ ∈ [0, π]` between the ray direction and the shadow axis (rad).
/// * `cone`: shadow cone of the current computation (angles and antumbra flag).
/// * `epsilon`: relative tolerance widening the umbra lower bound and the penumbra upper bound.
///
/// Return
/// ----------
/// * The first matching [`ShadowCategory`]; [`ShadowCategory::NoShadow`] if no band matches.
///
/// Remarks
/// ----------
/// * Only call this for rays that actually hit the screen. Misses are
///   [`ShadowCategory::NoShadow`] whatever their angle.
pub fn classify(angular_offset: Radian, cone: &ShadowCone, epsilon: f64) -> ShadowCategory {
    let phi = angular_offset;

    if cone.antumbra {
        ShadowCategory::Antumbra
    } else if phi >= (1.0 - epsilon) * cone.a1 && phi < cone.a3 {
        ShadowCategory::Umbra
    } else if phi >= cone.a3 && phi <= (1.0 + epsilon) * cone.a2 {
        ShadowCategory::Penumbra
    } else {
        ShadowCategory::NoShadow
    }
}
