//! Closed circular rings in az/el space
//!
//! Used for beam outlines, elevation contours and the array boundary.

use crate::coords::AzEl;
use crate::{check_finite, check_radius, FootprintError, Result};
use std::f64::consts::PI;

/// Sample `point_count` points clockwise around `centre`, then repeat the
/// first point so the ring is closed. Returns `point_count + 1` points.
pub fn sample_circle(centre: AzEl, radius_deg: f64, point_count: usize) -> Result<Vec<AzEl>> {
    check_finite("circle centre azimuth", centre.az)?;
    check_finite("circle centre elevation", centre.el)?;
    check_radius("circle radius", radius_deg)?;
    if point_count < 3 {
        return Err(FootprintError::InvalidPointCount(point_count));
    }

    let increment = 2.0 * PI / point_count as f64;
    let mut ring: Vec<AzEl> = (0..point_count)
        .map(|k| {
            let angle = -(k as f64) * increment;
            AzEl::new(
                centre.az + radius_deg * angle.cos(),
                centre.el + radius_deg * angle.sin(),
            )
        })
        .collect();
    ring.push(ring[0]);

    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_ring() {
        let ring = sample_circle(AzEl::new(1.0, -2.0), 0.5, 6).unwrap();
        assert_eq!(ring.len(), 7);
        assert_eq!(ring[0], ring[6]);
        assert_eq!(ring[0], AzEl::new(1.5, -2.0));
    }

    #[test]
    fn test_points_on_radius() {
        let centre = AzEl::new(-3.0, 4.0);
        let ring = sample_circle(centre, 0.75, 32).unwrap();
        for point in &ring {
            let r = (point.az - centre.az).hypot(point.el - centre.el);
            assert!((r - 0.75).abs() < 1e-12);
        }
    }

    #[test]
    fn test_equal_angular_steps() {
        let n = 12;
        let ring = sample_circle(AzEl::BORESIGHT, 1.0, n).unwrap();
        let step = 2.0 * PI / n as f64;
        for pair in ring.windows(2) {
            let a = pair[0].el.atan2(pair[0].az);
            let b = pair[1].el.atan2(pair[1].az);
            let mut delta = b - a;
            if delta > PI {
                delta -= 2.0 * PI;
            } else if delta < -PI {
                delta += 2.0 * PI;
            }
            // Clockwise
            assert!((delta + step).abs() < 1e-9, "delta {}", delta);
        }
    }

    #[test]
    fn test_clockwise_first_step() {
        let ring = sample_circle(AzEl::BORESIGHT, 1.0, 4).unwrap();
        assert!((ring[1].az).abs() < 1e-12);
        assert!((ring[1].el + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            sample_circle(AzEl::BORESIGHT, 1.0, 2),
            Err(FootprintError::InvalidPointCount(2))
        );
        assert!(sample_circle(AzEl::BORESIGHT, 0.0, 6).is_err());
        assert!(sample_circle(AzEl::new(f64::NAN, 0.0), 1.0, 6).is_err());
    }
}
