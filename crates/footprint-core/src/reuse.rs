//! Hexagonal frequency-reuse clusters
//!
//! A reuse pattern is described by a hop vector (i, j) on the hex lattice.
//! Beams reachable from a start beam by repeated hops in the six rotations
//! of (i, j) share its frequency channel; the pattern repeats every
//! `C = i² + ij + j²` beams.

use crate::grid::BeamGrid;
use crate::{FootprintError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry of the cluster size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReuseCombination {
    pub i: u32,
    pub j: u32,
    pub cluster_size: u32,
}

impl ReuseCombination {
    pub fn new(i: u32, j: u32) -> Self {
        Self {
            i,
            j,
            cluster_size: i * i + i * j + j * j,
        }
    }

    /// Distance between co-frequency beam centres (degrees)
    pub fn co_frequency_centre_separation_deg(&self, beam_radius_deg: f64) -> f64 {
        (3.0 * self.cluster_size as f64).sqrt() * beam_radius_deg
    }

    /// Gap between the edges of co-frequency beams (degrees)
    pub fn co_frequency_edge_separation_deg(&self, beam_radius_deg: f64) -> f64 {
        self.co_frequency_centre_separation_deg(beam_radius_deg) - 2.0 * beam_radius_deg
    }
}

/// All hop vectors with `1 <= i < max_extent` and `0 <= j <= i`, stably
/// sorted by cluster size so equal sizes keep enumeration order.
pub fn enumerate_combinations(max_extent: u32) -> Result<Vec<ReuseCombination>> {
    if max_extent < 2 {
        return Err(FootprintError::InvalidExtent(max_extent));
    }

    let mut combinations: Vec<ReuseCombination> = (1..max_extent)
        .flat_map(|i| (0..=i).map(move |j| ReuseCombination::new(i, j)))
        .collect();
    combinations.sort_by_key(|c| c.cluster_size);

    Ok(combinations)
}

/// Look up a cluster size selector index
pub fn select_combination(
    combinations: &[ReuseCombination],
    index: usize,
) -> Result<ReuseCombination> {
    combinations
        .get(index)
        .copied()
        .ok_or(FootprintError::ClusterIndexOutOfRange {
            index,
            count: combinations.len(),
        })
}

/// The six lattice directions of a hex cell, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexDirection {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::North,
        HexDirection::NorthEast,
        HexDirection::SouthEast,
        HexDirection::South,
        HexDirection::SouthWest,
        HexDirection::NorthWest,
    ];

    /// (column, row) step for hop vector (i, j) rotated into this direction
    pub fn offset(&self, i: i64, j: i64) -> (i64, i64) {
        match self {
            HexDirection::North => (j, -i),
            HexDirection::NorthEast => (i + j, j),
            HexDirection::SouthEast => (i, i + j),
            HexDirection::South => (-j, i),
            HexDirection::SouthWest => (-i - j, -j),
            HexDirection::NorthWest => (-i, -i - j),
        }
    }
}

/// Flag every beam reachable from (start_column, start_row) by hops of
/// (i, j) in the six hex directions. Absent or already flagged cells end a
/// branch. Returns the number of beams newly flagged.
pub fn mark_reuse(grid: &mut BeamGrid, start_column: i64, start_row: i64, i: u32, j: u32) -> usize {
    let (i, j) = (i as i64, j as i64);
    let mut pending = vec![(start_column, start_row)];
    let mut marked = 0;

    while let Some((column, row)) = pending.pop() {
        let Some(id) = grid.id_at(column, row) else {
            continue;
        };
        if !grid.mark(id) {
            continue;
        }
        marked += 1;

        for direction in HexDirection::ALL {
            let (dc, dr) = direction.offset(i, j);
            pending.push((column + dc, row + dr));
        }
    }

    debug!(
        "Reuse ({}, {}) from ({}, {}) flagged {} of {} beams",
        i,
        j,
        start_column,
        start_row,
        marked,
        grid.len()
    );

    marked
}

/// Run [`mark_reuse`] from the first populated cell in column-major order
pub fn mark_reuse_from_first(grid: &mut BeamGrid, combination: ReuseCombination) -> usize {
    match grid.first_populated() {
        Some((column, row)) => mark_reuse(
            grid,
            column as i64,
            row as i64,
            combination.i,
            combination.j,
        ),
        None => 0,
    }
}
