//! # Screen-centred spherical coordinates
//!
//! Converts a point on (or near) the screen body into longitude / latitude angles about the
//! screen center, measured in the axes of the input frame. This is a purely geometric
//! projection: no rotation model of the screen body is applied, so the angles are **not**
//! geographic coordinates for the Earth.
use nalgebra::Vector3;

use crate::{
    body::Body,
    constants::{Kilometer, Radian, DPI},
};

/// Spherical position of a point relative to the screen center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCoordinates {
    /// Angle in the frame's xy-plane from +x, in `[0, 2π)` (rad).
    pub longitude: Radian,
    /// Angle above the frame's xy-plane, in `[-π/2, π/2]` (rad).
    pub latitude: Radian,
    /// Distance from the screen center minus the screen radius (km); ~0 for surface intercepts.
    pub altitude: Kilometer,
}

impl ScreenCoordinates {
    pub fn longitude_deg(&self) -> f64 {
        self.longitude.to_degrees()
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude.to_degrees()
    }
}

/// Express `point` in spherical coordinates centred on `screen`.
///
/// Arguments
/// -----------------
/// * `point`: position in the same frame as `screen` (km), typically an intercept position.
/// * `screen`: the screen body.
///
/// Return
/// ----------
/// * The [`ScreenCoordinates`] of `point`. At the screen center both angles are `0`; on the
///   polar axis the longitude is `0`.
pub fn screen_coordinates(point: &Vector3<f64>, screen: &Body) -> ScreenCoordinates {
    let local = point - screen.position;
    let r = local.norm();
    let altitude = r - screen.radius;

    if r == 0.0 {
        return ScreenCoordinates {
            longitude: 0.0,
            latitude: 0.0,
            altitude,
        };
    }

    let latitude = (local.z / r).clamp(-1.0, 1.0).asin();
    if latitude.cos() == 0.0 || (local.x == 0.0 && local.y == 0.0) {
        return ScreenCoordinates {
            longitude: 0.0,
            latitude,
            altitude,
        };
    }

    let longitude = local.y.atan2(local.x);
    let longitude = if longitude < 0.0 {
        longitude + DPI
    } else {
        longitude
    };

    ScreenCoordinates {
        longitude,
        latitude,
        altitude,
    }
}

#[cfg(test)]
mod screen_coords_test {
    use super::*;

    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn earth() -> Body {
        Body::new(Vector3::new(1.0e8, -2.0e7, 5.0e6), 6371.0).unwrap()
    }

    #[test]
    fn test_cardinal_points() {
        let screen = earth();
        let r = screen.radius;

        let cases = [
            (Vector3::new(r, 0.0, 0.0), 0.0, 0.0),
            (Vector3::new(0.0, r, 0.0), FRAC_PI_2, 0.0),
            (Vector3::new(-r, 0.0, 0.0), PI, 0.0),
            (Vector3::new(0.0, -r, 0.0), 3.0 * FRAC_PI_2, 0.0),
            (Vector3::new(0.0, 0.0, r), 0.0, FRAC_PI_2),
            (Vector3::new(0.0, 0.0, -r), 0.0, -FRAC_PI_2),
        ];

        for (offset, lon, lat) in cases {
            let c = screen_coordinates(&(screen.position + offset), &screen);
            assert_abs_diff_eq!(c.longitude, lon, epsilon = 1e-12);
            assert_abs_diff_eq!(c.latitude, lat, epsilon = 1e-12);
            assert_abs_diff_eq!(c.altitude, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_diagonal_and_altitude() {
        let screen = earth();
        let offset = Vector3::new(1.0, 1.0, 2.0_f64.sqrt()) * 5000.0;

        let c = screen_coordinates(&(screen.position + offset), &screen);

        assert_abs_diff_eq!(c.longitude_deg(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.latitude, FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(c.altitude, 10_000.0 - 6371.0, epsilon = 1e-6);
    }

    #[test]
    fn test_screen_center() {
        let screen = earth();
        let c = screen_coordinates(&screen.position, &screen);
        assert_eq!(c.longitude, 0.0);
        assert_eq!(c.latitude, 0.0);
        assert_eq!(c.altitude, -6371.0);
    }
}
