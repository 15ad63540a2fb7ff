//! Beam layout computation for one configuration

use crate::config::LayoutConfig;
use crate::Result;
use footprint_core::constants::CONTOUR_VERTICES;
use footprint_core::reuse::{mark_reuse_from_first, select_combination};
use footprint_core::{
    az_el_to_lon_lat, elevation_contour_radius_deg, enumerate_combinations, generate_grid,
    is_visible, sample_circle, AzEl, BeamGrid, LonLat, ReuseCombination,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, info, warn};

/// Closed polygon ring in lon/lat, first point repeated last
pub type Ring = Vec<LonLat>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Beams in the generated grid
    pub beam_count: usize,
    /// Beams that pass the coverage test after the array offset
    pub visible_beam_count: usize,
    /// Aperture area divided by the hexagonal cell area of one beam
    pub cells_in_array_area: f64,
    /// Beams sharing the reuse traversal's start channel
    pub reuse_count: usize,
    pub cluster_size: u32,
    pub reuse_i: u32,
    pub reuse_j: u32,
    pub co_frequency_centre_separation_deg: f64,
    pub co_frequency_edge_separation_deg: f64,
}

#[derive(Debug, Clone)]
pub struct BeamLayout {
    pub grid: BeamGrid,
    pub combination: ReuseCombination,
    /// Outlines of visible beams on the start channel
    pub reused_beams: Vec<Ring>,
    /// Outlines of all other visible beams
    pub beams: Vec<Ring>,
    pub elevation_contour: Ring,
    pub array_boundary: Ring,
    pub satellite_icon: Vec<Ring>,
    pub metrics: LayoutMetrics,
}

/// Theoretical number of hexagonal beam cells in the aperture
pub fn cells_in_array_area(array_radius_deg: f64, beam_radius_deg: f64) -> f64 {
    let array_area = PI * array_radius_deg * array_radius_deg;
    let cell_area = 6.0 * beam_radius_deg * beam_radius_deg * 3.0_f64.sqrt() / 4.0;
    array_area / cell_area
}

fn project_ring(points: &[AzEl], satellite_longitude_deg: f64) -> Ring {
    points
        .iter()
        .map(|p| az_el_to_lon_lat(*p, satellite_longitude_deg))
        .collect()
}

fn closed_rectangle(lon: (f64, f64), lat: (f64, f64)) -> Ring {
    vec![
        LonLat::new(lon.1, lat.1),
        LonLat::new(lon.1, lat.0),
        LonLat::new(lon.0, lat.0),
        LonLat::new(lon.0, lat.1),
        LonLat::new(lon.1, lat.1),
    ]
}

/// Body and two solar panels drawn at the orbital slot
pub fn satellite_icon(satellite_longitude_deg: f64) -> Vec<Ring> {
    let lon = satellite_longitude_deg;
    vec![
        closed_rectangle((lon - 1.0, lon + 1.0), (-1.0, 1.0)),
        closed_rectangle((lon - 0.7, lon + 0.7), (1.5, 6.0)),
        closed_rectangle((lon - 0.7, lon + 0.7), (-6.0, -1.5)),
    ]
}

/// Compute the full beam layout for a configuration.
///
/// A fresh grid is generated on every call; nothing is carried over between
/// configurations.
pub fn compute_beam_layout(config: &LayoutConfig) -> Result<BeamLayout> {
    config.validate()?;

    let combinations = enumerate_combinations(config.max_reuse_extent)?;
    let combination = select_combination(&combinations, config.cluster_size_index)?;

    let mut grid = generate_grid(config.array_radius_deg, config.beam_radius_deg)?;
    mark_reuse_from_first(&mut grid, combination);

    let beam_radius = config.beam_radius_deg;
    let satellite_longitude = config.satellite_longitude_deg;
    let offset = config.array_offset();

    let mut reused_beams = Vec::new();
    let mut beams = Vec::new();
    for beam in grid.beams() {
        let centre = beam.position().offset(offset);
        if !is_visible(centre, beam_radius) {
            continue;
        }

        let outline = sample_circle(centre, beam_radius, config.points_per_beam)?;
        let ring = project_ring(&outline, satellite_longitude);
        if beam.reuse {
            reused_beams.push(ring);
        } else {
            beams.push(ring);
        }
    }

    let contour_radius = elevation_contour_radius_deg(config.elevation_contour_deg);
    let elevation_contour = project_ring(
        &sample_circle(AzEl::BORESIGHT, contour_radius, CONTOUR_VERTICES)?,
        satellite_longitude,
    );
    let array_boundary = project_ring(
        &sample_circle(offset, config.array_radius_deg, CONTOUR_VERTICES)?,
        satellite_longitude,
    );
    debug!(
        "Elevation contour {:.3}° off boresight for {}° ground elevation",
        contour_radius, config.elevation_contour_deg
    );

    let metrics = LayoutMetrics {
        beam_count: grid.len(),
        visible_beam_count: reused_beams.len() + beams.len(),
        cells_in_array_area: cells_in_array_area(config.array_radius_deg, beam_radius),
        reuse_count: grid.reuse_count(),
        cluster_size: combination.cluster_size,
        reuse_i: combination.i,
        reuse_j: combination.j,
        co_frequency_centre_separation_deg: combination
            .co_frequency_centre_separation_deg(beam_radius),
        co_frequency_edge_separation_deg: combination.co_frequency_edge_separation_deg(beam_radius),
    };

    if metrics.visible_beam_count == 0 {
        warn!(
            "No beams reach the earth with array offset ({}°, {}°)",
            offset.az, offset.el
        );
    }
    info!(
        "Layout: {} beams ({} visible), {} on reuse channel, cluster size {} ({}, {})",
        metrics.beam_count,
        metrics.visible_beam_count,
        metrics.reuse_count,
        metrics.cluster_size,
        metrics.reuse_i,
        metrics.reuse_j
    );

    Ok(BeamLayout {
        grid,
        combination,
        reused_beams,
        beams,
        elevation_contour,
        array_boundary,
        satellite_icon: satellite_icon(satellite_longitude),
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlannerError;
    use footprint_core::{lon_lat_to_az_el, FootprintError};

    fn assert_closed(ring: &Ring, len: usize) {
        assert_eq!(ring.len(), len);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_default_layout() {
        let config = LayoutConfig::default();
        let layout = compute_beam_layout(&config).unwrap();
        let metrics = &layout.metrics;

        assert!(metrics.beam_count > 0);
        // 6.4° + 0.2° stays inside the 8.7° earth disk
        assert_eq!(metrics.visible_beam_count, metrics.beam_count);
        assert_eq!(layout.reused_beams.len(), metrics.reuse_count);
        assert_eq!(
            layout.reused_beams.len() + layout.beams.len(),
            metrics.visible_beam_count
        );
        for ring in layout.reused_beams.iter().chain(&layout.beams) {
            assert_closed(ring, config.points_per_beam + 1);
        }

        assert_eq!((metrics.reuse_i, metrics.reuse_j, metrics.cluster_size), (2, 1, 7));
        let share = metrics.reuse_count as f64 / metrics.beam_count as f64;
        assert!((share - 1.0 / 7.0).abs() < 0.02, "share {}", share);
    }

    #[test]
    fn test_metrics_formulas() {
        let config = LayoutConfig {
            array_radius_deg: 3.0,
            beam_radius_deg: 0.5,
            cluster_size_index: 1,
            ..Default::default()
        };
        let metrics = compute_beam_layout(&config).unwrap().metrics;

        let cell_area = 6.0 * 0.25 * 3.0_f64.sqrt() / 4.0;
        assert!((metrics.cells_in_array_area - PI * 9.0 / cell_area).abs() < 1e-9);

        assert_eq!(metrics.cluster_size, 3);
        assert!((metrics.co_frequency_centre_separation_deg - 1.5).abs() < 1e-12);
        assert!((metrics.co_frequency_edge_separation_deg - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_offset_beyond_limb_hides_beams() {
        let config = LayoutConfig {
            array_az_offset_deg: 7.0,
            array_el_offset_deg: 7.0,
            ..Default::default()
        };
        let layout = compute_beam_layout(&config).unwrap();
        assert!(layout.metrics.visible_beam_count < layout.metrics.beam_count);
        assert!(layout.metrics.visible_beam_count > 0);
    }

    #[test]
    fn test_offset_does_not_change_reuse() {
        let centred = compute_beam_layout(&LayoutConfig::default()).unwrap();
        let shifted = compute_beam_layout(&LayoutConfig {
            array_az_offset_deg: -3.0,
            array_el_offset_deg: 2.5,
            ..Default::default()
        })
        .unwrap();

        let flags = |layout: &BeamLayout| -> Vec<bool> {
            layout.grid.beams().iter().map(|b| b.reuse).collect()
        };
        assert_eq!(flags(&centred), flags(&shifted));
    }

    #[test]
    fn test_cluster_index_out_of_range() {
        let config = LayoutConfig {
            max_reuse_extent: 3,
            cluster_size_index: 5,
            ..Default::default()
        };
        let err = compute_beam_layout(&config).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Footprint(FootprintError::ClusterIndexOutOfRange { index: 5, count: 5 })
        ));
    }

    #[test]
    fn test_elevation_contour_on_radius() {
        let config = LayoutConfig::default();
        let layout = compute_beam_layout(&config).unwrap();
        assert_closed(&layout.elevation_contour, CONTOUR_VERTICES + 1);

        let radius = elevation_contour_radius_deg(config.elevation_contour_deg);
        for point in &layout.elevation_contour {
            let pointing = lon_lat_to_az_el(*point, config.satellite_longitude_deg);
            assert!((pointing.off_boresight() - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn test_array_boundary_follows_offset() {
        let config = LayoutConfig {
            array_radius_deg: 2.0,
            array_az_offset_deg: 1.0,
            array_el_offset_deg: -1.5,
            ..Default::default()
        };
        let layout = compute_beam_layout(&config).unwrap();
        assert_closed(&layout.array_boundary, CONTOUR_VERTICES + 1);

        for point in &layout.array_boundary {
            let pointing = lon_lat_to_az_el(*point, config.satellite_longitude_deg);
            let r = (pointing.az - 1.0).hypot(pointing.el + 1.5);
            assert!((r - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_satellite_icon() {
        let icon = satellite_icon(-35.0);
        assert_eq!(icon.len(), 3);
        for ring in &icon {
            assert_closed(ring, 5);
            for point in ring {
                assert!((point.lon + 35.0).abs() <= 1.0 + 1e-12);
            }
        }
        assert_eq!(icon[0][0], LonLat::new(-34.0, 1.0));
        assert!(icon[1].iter().all(|p| p.lat >= 1.5));
        assert!(icon[2].iter().all(|p| p.lat <= -1.5));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LayoutConfig {
            beam_radius_deg: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            compute_beam_layout(&config),
            Err(PlannerError::InvalidConfig(_))
        ));
    }
}
