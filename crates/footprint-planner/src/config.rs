//! Layout configuration and loading from JSON files

use crate::{PlannerError, Result};
use footprint_core::constants::DEFAULT_MAX_REUSE_EXTENT;
use footprint_core::AzEl;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{info, warn};

/// Slider ranges of the interactive tool. Values outside them are accepted
/// if they still make geometric sense.
const SATELLITE_LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
const POINTS_PER_BEAM_RANGE: RangeInclusive<usize> = 6..=128;
const ARRAY_OFFSET_RANGE: RangeInclusive<f64> = -7.0..=7.0;
const ARRAY_RADIUS_RANGE: RangeInclusive<f64> = 0.1..=8.7;
const BEAM_RADIUS_RANGE: RangeInclusive<f64> = 0.1..=4.0;

/// Everything one layout computation depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Orbital slot (degrees east)
    pub satellite_longitude_deg: f64,
    /// Ground elevation angle of the drawn contour (degrees, 0-90)
    pub elevation_contour_deg: f64,
    /// Vertices per beam outline
    pub points_per_beam: usize,
    pub array_az_offset_deg: f64,
    pub array_el_offset_deg: f64,
    /// Aperture radius of the array in az/el space (degrees)
    pub array_radius_deg: f64,
    pub beam_radius_deg: f64,
    /// Index into the sorted reuse combinations
    pub cluster_size_index: usize,
    /// Hop vectors are enumerated for `1 <= i < max_reuse_extent`
    pub max_reuse_extent: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            satellite_longitude_deg: -35.0,
            elevation_contour_deg: 5.0,
            points_per_beam: 6,
            array_az_offset_deg: 0.0,
            array_el_offset_deg: 0.0,
            array_radius_deg: 6.4,
            beam_radius_deg: 0.2,
            cluster_size_index: 3,
            max_reuse_extent: DEFAULT_MAX_REUSE_EXTENT,
        }
    }
}

impl LayoutConfig {
    pub fn array_offset(&self) -> AzEl {
        AzEl::new(self.array_az_offset_deg, self.array_el_offset_deg)
    }

    /// Reject values the geometry cannot work with. The cluster index is
    /// checked against the enumerated combinations at layout time.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("satellite_longitude_deg", self.satellite_longitude_deg),
            ("elevation_contour_deg", self.elevation_contour_deg),
            ("array_az_offset_deg", self.array_az_offset_deg),
            ("array_el_offset_deg", self.array_el_offset_deg),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("array_radius_deg", self.array_radius_deg),
            ("beam_radius_deg", self.beam_radius_deg),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=90.0).contains(&self.elevation_contour_deg) {
            return Err(PlannerError::InvalidConfig(format!(
                "elevation_contour_deg must be within 0-90, got {}",
                self.elevation_contour_deg
            )));
        }
        if self.points_per_beam < 3 {
            return Err(PlannerError::InvalidConfig(format!(
                "points_per_beam must be at least 3, got {}",
                self.points_per_beam
            )));
        }
        if self.max_reuse_extent < 2 {
            return Err(PlannerError::InvalidConfig(format!(
                "max_reuse_extent must be at least 2, got {}",
                self.max_reuse_extent
            )));
        }

        self.warn_outside_slider_ranges();
        Ok(())
    }

    fn warn_outside_slider_ranges(&self) {
        if !SATELLITE_LONGITUDE_RANGE.contains(&self.satellite_longitude_deg) {
            warn!("satellite longitude {}° outside ±180°", self.satellite_longitude_deg);
        }
        if !POINTS_PER_BEAM_RANGE.contains(&self.points_per_beam) {
            warn!("{} points per beam outside 6-128", self.points_per_beam);
        }
        if !ARRAY_OFFSET_RANGE.contains(&self.array_az_offset_deg)
            || !ARRAY_OFFSET_RANGE.contains(&self.array_el_offset_deg)
        {
            warn!(
                "array offset ({}°, {}°) outside ±7°",
                self.array_az_offset_deg, self.array_el_offset_deg
            );
        }
        if !ARRAY_RADIUS_RANGE.contains(&self.array_radius_deg) {
            warn!("array radius {}° outside 0.1-8.7°", self.array_radius_deg);
        }
        if !BEAM_RADIUS_RANGE.contains(&self.beam_radius_deg) {
            warn!("beam radius {}° outside 0.1-4°", self.beam_radius_deg);
        }
    }
}

/// Load a layout configuration from a JSON file. Missing fields take their
/// defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<LayoutConfig> {
    let path = path.as_ref();
    info!("Loading layout configuration from {:?}", path);

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: LayoutConfig = serde_json::from_reader(reader)?;

    config.validate()?;
    Ok(config)
}
