//! Earth model and orbit constants

/// WGS84 semi-major axis (m)
pub const WGS84_A: f64 = 6378137.0;
/// WGS84 semi-minor axis (m)
pub const WGS84_B: f64 = 6356752.3142;
/// First eccentricity squared
pub const WGS84_E2: f64 = 0.00669437999014;
/// Second eccentricity squared
pub const WGS84_EP2: f64 = 0.00673949674228;

/// Geostationary orbit radius from the earth's centre (m)
pub const GEO_RADIUS_M: f64 = 42164137.0;

/// Mean equatorial radius used for elevation contours (km)
pub const EARTH_RADIUS_KM: f64 = 6378.0;
/// Geostationary radius used for elevation contours (km)
pub const GEO_RADIUS_KM: f64 = 42164.0;

/// Vertices in the elevation contour and array boundary rings
pub const CONTOUR_VERTICES: usize = 256;

/// Default bound on the reuse hop vector components (exclusive for `i`)
pub const DEFAULT_MAX_REUSE_EXTENT: u32 = 13;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eccentricities_consistent() {
        let e2 = (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_A * WGS84_A);
        let ep2 = (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
        assert!((e2 - WGS84_E2).abs() < 1e-10);
        assert!((ep2 - WGS84_EP2).abs() < 1e-10);
    }
}
