//! Ellipsoid projection between antenna pointing and geodetic coordinates
//!
//! The satellite sits on the equator at `GEO_RADIUS_M` from the earth's
//! centre. Its local frame has +x pointing away from the earth, +y east and
//! +z north, so boresight (az = 0, el = 0) looks straight down at the
//! sub-satellite point.

use crate::constants::{
    EARTH_RADIUS_KM, GEO_RADIUS_KM, GEO_RADIUS_M, WGS84_A, WGS84_B, WGS84_E2, WGS84_EP2,
};
use crate::coords::{AzEl, LonLat};
use nalgebra::{Rotation3, Vector3};

/// ECEF position of a geostationary satellite (m)
fn satellite_position(satellite_longitude_rad: f64) -> Vector3<f64> {
    let (sin_lon, cos_lon) = satellite_longitude_rad.sin_cos();
    Vector3::new(GEO_RADIUS_M * cos_lon, GEO_RADIUS_M * sin_lon, 0.0)
}

/// Rotation from the satellite frame into ECEF
fn satellite_to_ecef(satellite_longitude_rad: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), satellite_longitude_rad)
}

/// Unit pointing vector in the satellite frame
fn pointing_vector(az_rad: f64, el_rad: f64) -> Vector3<f64> {
    Vector3::new(
        -az_rad.cos() * el_rad.cos(),
        az_rad.sin() * el_rad.cos(),
        el_rad.sin(),
    )
}

/// Distance along `direction` from `origin` to the visible ellipsoid surface.
///
/// Solves `t1·t² + t2·t + t3 = 0` and keeps the nearer root. When the ray
/// misses the earth the foot of the perpendicular from the earth's centre
/// is used instead, which places the point beyond the limb.
fn range_to_surface(origin: &Vector3<f64>, direction: &Vector3<f64>) -> f64 {
    let a2 = WGS84_A * WGS84_A;
    let b2 = WGS84_B * WGS84_B;

    let t1 = (direction.x.powi(2) + direction.y.powi(2)) / a2 + direction.z.powi(2) / b2;
    let t2 = 2.0 * ((origin.x * direction.x + origin.y * direction.y) / a2
        + origin.z * direction.z / b2);
    let t3 = (origin.x.powi(2) + origin.y.powi(2)) / a2 + origin.z.powi(2) / b2 - 1.0;

    let discriminant = t2 * t2 - 4.0 * t1 * t3;
    if discriminant >= 0.0 {
        let root = discriminant.sqrt();
        let far = (-t2 + root) / (2.0 * t1);
        let near = (-t2 - root) / (2.0 * t1);
        near.min(far)
    } else {
        -origin.dot(direction)
    }
}

/// ECEF to geodetic using Bowring's closed-form approximation
fn ecef_to_geodetic(point: &Vector3<f64>) -> LonLat {
    let p = point.x.hypot(point.y);
    let theta = (point.z * WGS84_A / (p * WGS84_B)).atan();
    let (sin_theta, cos_theta) = theta.sin_cos();

    let latitude = ((point.z + WGS84_EP2 * WGS84_B * sin_theta.powi(3))
        / (p - WGS84_E2 * WGS84_A * cos_theta.powi(3)))
    .atan();
    let longitude = point.y.atan2(point.x);

    LonLat::new(longitude.to_degrees(), latitude.to_degrees())
}

/// Geodetic (height 0) to ECEF
fn geodetic_to_ecef(position: LonLat) -> Vector3<f64> {
    let lat = position.lat.to_radians();
    let lon = position.lon.to_radians();

    // Radius of curvature in prime vertical
    let n = WGS84_A / (1.0 - WGS84_E2 * lat.sin().powi(2)).sqrt();

    Vector3::new(
        n * lat.cos() * lon.cos(),
        n * lat.cos() * lon.sin(),
        n * (1.0 - WGS84_E2) * lat.sin(),
    )
}

/// Project an antenna pointing direction onto the ellipsoid.
///
/// Directions that miss the earth are clamped beyond the limb rather than
/// rejected; filter with [`crate::is_visible`] when real coverage matters.
pub fn az_el_to_lon_lat(pointing: AzEl, satellite_longitude_deg: f64) -> LonLat {
    let (az, el) = pointing.to_radians();
    let satellite_longitude = satellite_longitude_deg.to_radians();

    let satellite = satellite_position(satellite_longitude);
    let direction = satellite_to_ecef(satellite_longitude) * pointing_vector(az, el);

    let range = range_to_surface(&satellite, &direction);
    let intersection = satellite + direction * range;

    ecef_to_geodetic(&intersection)
}

/// Pointing direction from the satellite to a point on the ellipsoid surface
pub fn lon_lat_to_az_el(position: LonLat, satellite_longitude_deg: f64) -> AzEl {
    let satellite_longitude = satellite_longitude_deg.to_radians();

    let satellite = satellite_position(satellite_longitude);
    let line_of_sight = (geodetic_to_ecef(position) - satellite).normalize();
    let local = satellite_to_ecef(satellite_longitude).inverse() * line_of_sight;

    let el = local.z.clamp(-1.0, 1.0).asin();
    let az = local.y.atan2(-local.x);

    AzEl::new(az.to_degrees(), el.to_degrees())
}

/// Off-boresight radius (degrees) of the contour on which ground users see
/// the satellite at `user_elevation_deg` above the horizon.
pub fn elevation_contour_radius_deg(user_elevation_deg: f64) -> f64 {
    ((EARTH_RADIUS_KM / GEO_RADIUS_KM) * user_elevation_deg.to_radians().cos())
        .asin()
        .to_degrees()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        // Visible directions survive a trip through the ellipsoid and back
        #[test]
        fn fuzz_round_trip(
            az in -6.0f64..6.0,
            el in -6.0f64..6.0,
            sat_lon in -180.0f64..180.0,
        ) {
            let pointing = AzEl::new(az, el);
            let back = lon_lat_to_az_el(az_el_to_lon_lat(pointing, sat_lon), sat_lon);
            prop_assert!((back.az - az).abs() < 1e-6, "az {} -> {}", az, back.az);
            prop_assert!((back.el - el).abs() < 1e-6, "el {} -> {}", el, back.el);
        }

        // Latitude follows the sign of elevation
        #[test]
        fn fuzz_latitude_hemisphere(az in -6.0f64..6.0, el in 0.01f64..6.0) {
            prop_assert!(az_el_to_lon_lat(AzEl::new(az, el), 0.0).lat > 0.0);
            prop_assert!(az_el_to_lon_lat(AzEl::new(az, -el), 0.0).lat < 0.0);
        }
    }
}
