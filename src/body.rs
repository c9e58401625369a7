//! # Spherical bodies
//!
//! A [`Body`] is the minimal description the shadow engine needs for each of the three
//! participants of an eclipse: a center position and a radius, both in kilometers, at a single
//! instant and in one shared inertial frame.
//!
//! Bodies are produced by the caller from whatever ephemeris source it uses. The engine never
//! reads global ephemeris state; it only consumes [`Body`] values.
//!
//! ## Typical usage
//!
//! ```rust
//! use nalgebra::Vector3;
//! use umbra::body::Body;
//! use umbra::constants::{EARTH_RADIUS_KM, SUN_RADIUS_KM};
//!
//! // Barycentric position of the Earth and apparent (Earth-relative) position of the Sun
//! let earth_bary = Vector3::new(-1.38e8, -5.6e7, -2.4e7);
//! let sun_apparent = Vector3::new(1.38e8, 5.5e7, 2.4e7);
//!
//! let earth = Body::new(earth_bary, EARTH_RADIUS_KM).unwrap();
//! let sun = Body::from_apparent(&earth_bary, &sun_apparent, SUN_RADIUS_KM).unwrap();
//! assert_eq!(sun.position, earth_bary + sun_apparent);
//! ```
use nalgebra::Vector3;

use crate::{constants::Kilometer, umbra_errors::UmbraError};

/// A spherical body at one instant.
///
/// Fields
/// -----------------
/// * `position`: center of the body in kilometers, in the caller's inertial frame.
/// * `radius`: physical radius in kilometers, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector3<f64>,
    pub radius: Kilometer,
}

impl Body {
    /// Construct a validated [`Body`].
    ///
    /// Arguments
    /// -----------------
    /// * `position`: center of the body (km).
    /// * `radius`: radius of the body (km).
    ///
    /// Return
    /// ----------
    /// * The body, or [`UmbraError::InvalidBody`] if a position component is not finite or if the
    ///   radius is not a finite, strictly positive number.
    pub fn new(position: Vector3<f64>, radius: Kilometer) -> Result<Self, UmbraError> {
        let body = Body { position, radius };
        body.validate()?;
        Ok(body)
    }

    /// Check the invariants enforced by [`Body::new`] on an existing value.
    pub fn validate(&self) -> Result<(), UmbraError> {
        let p = &self.position;
        if p.iter().any(|c| !c.is_finite()) {
            return Err(UmbraError::InvalidBody(format!(
                "position must be finite, got [{}, {}, {}]",
                p.x, p.y, p.z
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(UmbraError::InvalidBody(format!(
                "radius must be finite and strictly positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }

    /// Build a body from a screen-relative (apparent) position.
    ///
    /// Ephemeris services usually deliver the eclipsee and the eclipser as vectors seen from the
    /// screen body. Adding the screen's own position brings them back into the shared frame
    /// where the three bodies are compared.
    ///
    /// Arguments
    /// -----------------
    /// * `screen_position`: position of the screen body (km).
    /// * `relative_position`: position of this body relative to the screen (km).
    /// * `radius`: radius of this body (km).
    ///
    /// See also
    /// ------------
    /// * [`Body::new`] – Validation rules.
    pub fn from_apparent(
        screen_position: &Vector3<f64>,
        relative_position: &Vector3<f64>,
        radius: Kilometer,
    ) -> Result<Self, UmbraError> {
        Body::new(screen_position + relative_position, radius)
    }

    /// Distance between the centers of two bodies, in kilometers.
    pub fn distance_to(&self, other: &Body) -> Kilometer {
        (other.position - self.position).norm()
    }
}
