//! Earth coverage test for beams seen from GEO

use crate::constants::{GEO_RADIUS_M, WGS84_A};
use crate::coords::AzEl;

/// Angular radius (degrees) of the earth disk seen from geostationary radius
pub fn earth_disk_half_angle_deg() -> f64 {
    (WGS84_A / GEO_RADIUS_M).asin().to_degrees()
}

/// Whether any part of a beam centred at `pointing` can touch the earth disk.
///
/// Compares the flat az/el distance of the beam's nearest edge against the
/// disk radius. This is a loose test: it treats the disk as a circle in the
/// az/el plane and the beam edge as centre distance minus radius.
pub fn is_visible(pointing: AzEl, beam_radius_deg: f64) -> bool {
    pointing.off_boresight() - beam_radius_deg < earth_disk_half_angle_deg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::az_el_to_lon_lat;

    #[test]
    fn test_disk_half_angle() {
        let half_angle = earth_disk_half_angle_deg();
        assert!((half_angle - 8.7).abs() < 0.01, "half angle {}", half_angle);
    }

    #[test]
    fn test_boresight_visible() {
        assert!(is_visible(AzEl::new(0.0, 0.0), 0.0));
    }

    #[test]
    fn test_beyond_limb_not_visible() {
        assert!(!is_visible(AzEl::new(90.0, 0.0), 0.0));
        assert!(!is_visible(AzEl::new(0.0, -12.0), 1.0));
    }

    #[test]
    fn test_beam_edge_overlapping_limb() {
        // Centre off the disk, edge still on it
        assert!(!is_visible(AzEl::new(9.0, 0.0), 0.0));
        assert!(is_visible(AzEl::new(9.0, 0.0), 0.5));
    }

    #[test]
    fn test_square_corner_loose() {
        // Distance is measured in the flat az/el plane, so a beam on the
        // diagonal is judged by its hypotenuse
        assert!(is_visible(AzEl::new(6.0, 6.0), 0.0));
        assert!(!is_visible(AzEl::new(6.5, 6.5), 0.0));
    }

    #[test]
    fn test_visible_centres_hit_the_earth() {
        // A visible centre projects onto the real surface rather than the
        // clamped beyond-limb fallback
        let ground = az_el_to_lon_lat(AzEl::new(5.0, 5.0), 0.0);
        assert!(ground.lat.abs() < 90.0);
        assert!(ground.lon.abs() < 90.0);
    }
}
