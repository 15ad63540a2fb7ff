//! Footprint Planner
//!
//! Turns a [`LayoutConfig`] into everything a map front end draws for a GEO
//! multi-beam array: beam outlines split by reuse channel, the elevation
//! contour, the array boundary, the satellite marker and summary metrics.
//!
//! # Pipeline
//!
//! ```text
//! generate_grid ─▶ mark_reuse ─▶ offset + is_visible ─▶ sample_circle ─▶ az_el_to_lon_lat
//! ```
//!
//! The reuse pattern is computed on the unshifted grid; the array pointing
//! offset only moves where each beam lands.

use thiserror::Error;

pub mod config;
pub mod export;
pub mod layout;

pub use config::{load_config, LayoutConfig};
pub use export::to_geojson;
pub use layout::{compute_beam_layout, BeamLayout, LayoutMetrics, Ring};

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Geometry error: {0}")]
    Footprint(#[from] footprint_core::FootprintError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
