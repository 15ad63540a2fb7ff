//! Angle pairs used throughout the crate
//!
//! Angles are carried in degrees. Conversion to radians happens at the point
//! of use through `f64::to_radians` / `f64::to_degrees`.

use serde::{Deserialize, Serialize};

/// Antenna-relative pointing angle (degrees)
///
/// Azimuth grows towards the east of the sub-satellite point, elevation
/// towards the north. (0, 0) is boresight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AzEl {
    pub az: f64,
    pub el: f64,
}

impl AzEl {
    pub const BORESIGHT: AzEl = AzEl { az: 0.0, el: 0.0 };

    pub fn new(az: f64, el: f64) -> Self {
        Self { az, el }
    }

    /// Angular distance from boresight in the flat az/el plane
    pub fn off_boresight(&self) -> f64 {
        self.az.hypot(self.el)
    }

    /// Shift by an array pointing offset
    pub fn offset(&self, by: AzEl) -> AzEl {
        AzEl::new(self.az + by.az, self.el + by.el)
    }

    /// (az, el) in radians
    pub fn to_radians(&self) -> (f64, f64) {
        (self.az.to_radians(), self.el.to_radians())
    }
}

/// Geodetic coordinate (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// GeoJSON position order: [lon, lat]
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lon, self.lat]
    }
}

impl From<(f64, f64)> for AzEl {
    fn from((az, el): (f64, f64)) -> Self {
        AzEl::new(az, el)
    }
}

impl From<(f64, f64)> for LonLat {
    fn from((lon, lat): (f64, f64)) -> Self {
        LonLat::new(lon, lat)
    }
}
