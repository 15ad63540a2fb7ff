//! Footprint Core Library
//!
//! Geometry and combinatorics for a phased-array multi-beam antenna on a
//! geostationary satellite:
//! - antenna az/el pointing to geodetic lon/lat on the WGS84 ellipsoid
//! - hexagonally packed beam grids over a circular aperture
//! - hexagonal frequency-reuse cluster enumeration and assignment
//!
//! Everything here is pure and synchronous. Rendering and parameter
//! management belong to the caller.

use thiserror::Error;

pub mod circle;
pub mod constants;
pub mod coords;
pub mod coverage;
pub mod grid;
pub mod projection;
pub mod reuse;

pub use circle::sample_circle;
pub use coords::{AzEl, LonLat};
pub use coverage::{earth_disk_half_angle_deg, is_visible};
pub use grid::{generate_grid, BeamCentre, BeamGrid, BeamId};
pub use projection::{az_el_to_lon_lat, elevation_contour_radius_deg, lon_lat_to_az_el};
pub use reuse::{enumerate_combinations, mark_reuse, ReuseCombination};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FootprintError {
    #[error("{name} must be a positive finite angle, got {value}")]
    InvalidRadius { name: &'static str, value: f64 },
    #[error("Circle needs at least 3 points, got {0}")]
    InvalidPointCount(usize),
    #[error("Reuse extent must be at least 2, got {0}")]
    InvalidExtent(u32),
    #[error("Cluster index {index} out of range (0..{count})")]
    ClusterIndexOutOfRange { index: usize, count: usize },
    #[error("{name} must be finite, got {value}")]
    NonFiniteAngle { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, FootprintError>;

/// Reject zero, negative and non-finite radii.
pub(crate) fn check_radius(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FootprintError::InvalidRadius { name, value })
    }
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FootprintError::NonFiniteAngle { name, value })
    }
}
