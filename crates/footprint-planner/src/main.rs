//! Beam Footprint Planner CLI
//!
//! Computes the footprint and reuse layout of a GEO multi-beam array.
//!
//! Usage:
//!   plan-footprint --config layout.json --cluster-index 5 \
//!                  --output footprint.geojson
//!   plan-footprint --list-clusters

use anyhow::Result;
use clap::Parser;
use footprint_core::enumerate_combinations;
use footprint_planner::{compute_beam_layout, load_config, to_geojson, LayoutConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "plan-footprint",
    about = "Compute beam footprints and frequency reuse for a GEO multi-beam array"
)]
struct Args {
    /// Layout configuration JSON file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Orbital slot in degrees east
    #[arg(long, allow_hyphen_values = true)]
    satellite_longitude: Option<f64>,

    /// Ground elevation angle of the contour in degrees
    #[arg(long)]
    elevation_contour: Option<f64>,

    /// Vertices per beam outline
    #[arg(long)]
    points_per_beam: Option<usize>,

    /// Array azimuth pointing offset in degrees
    #[arg(long, allow_hyphen_values = true)]
    az_offset: Option<f64>,

    /// Array elevation pointing offset in degrees
    #[arg(long, allow_hyphen_values = true)]
    el_offset: Option<f64>,

    /// Array aperture radius in degrees
    #[arg(long)]
    array_radius: Option<f64>,

    /// Beam radius in degrees
    #[arg(long)]
    beam_radius: Option<f64>,

    /// Index into the sorted reuse combinations (see --list-clusters)
    #[arg(long)]
    cluster_index: Option<usize>,

    /// Print the reuse combinations and exit
    #[arg(long)]
    list_clusters: bool,

    /// Output GeoJSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut LayoutConfig) {
        if let Some(v) = self.satellite_longitude {
            config.satellite_longitude_deg = v;
        }
        if let Some(v) = self.elevation_contour {
            config.elevation_contour_deg = v;
        }
        if let Some(v) = self.points_per_beam {
            config.points_per_beam = v;
        }
        if let Some(v) = self.az_offset {
            config.array_az_offset_deg = v;
        }
        if let Some(v) = self.el_offset {
            config.array_el_offset_deg = v;
        }
        if let Some(v) = self.array_radius {
            config.array_radius_deg = v;
        }
        if let Some(v) = self.beam_radius {
            config.beam_radius_deg = v;
        }
        if let Some(v) = self.cluster_index {
            config.cluster_size_index = v;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => LayoutConfig::default(),
    };
    args.apply_overrides(&mut config);

    if args.list_clusters {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{:>5} {:>4} {:>4} {:>8}", "index", "i", "j", "cluster")?;
        for (index, c) in enumerate_combinations(config.max_reuse_extent)?
            .iter()
            .enumerate()
        {
            writeln!(out, "{:>5} {:>4} {:>4} {:>8}", index, c.i, c.j, c.cluster_size)?;
        }
        return Ok(());
    }

    let layout = compute_beam_layout(&config)?;
    let metrics = &layout.metrics;

    info!("{}", "=".repeat(60));
    info!("GEO Beam Footprint @ {}°", config.satellite_longitude_deg);
    info!("{}", "=".repeat(60));
    info!(
        "Cells drawn = {}, cells in array area = {:.1}",
        metrics.visible_beam_count, metrics.cells_in_array_area
    );
    info!(
        "Cluster size {} (i={}, j={}), frequency reuses = {}",
        metrics.cluster_size, metrics.reuse_i, metrics.reuse_j, metrics.reuse_count
    );
    info!(
        "Co-frequency centre separation = {:.2}°, edge separation = {:.2}°",
        metrics.co_frequency_centre_separation_deg, metrics.co_frequency_edge_separation_deg
    );

    if let Some(path) = &args.output {
        info!("Writing GeoJSON to {:?}", path);
        let geojson = to_geojson(&layout)?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &geojson)?;
        writer.flush()?;
    }

    Ok(())
}
