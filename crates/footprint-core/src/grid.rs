//! Hexagonal beam grid over a circular aperture
//!
//! Beams live in an arena addressed by [`BeamId`]. The flat sequence is the
//! arena itself in generation order, and the sparse (column, row) lattice
//! stores ids into the same arena, so a reuse flag set through either view
//! is seen by both.
//!
//! Lattice layout: columns step `1.5 r` in azimuth, rows step `√3 r` in
//! elevation, and each column's top row sits `√3/2 r` higher than the
//! previous column's. In these skewed coordinates the six hexagonal
//! neighbours of (c, n) are (c, n-1), (c+1, n), (c+1, n+1), (c, n+1),
//! (c-1, n) and (c-1, n-1). The lattice is anchored so that boresight is
//! always a beam centre.

use crate::coords::AzEl;
use crate::{check_radius, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stable index of a beam in its grid's arena
pub type BeamId = usize;

/// A single beam centre in antenna az/el space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamCentre {
    pub az: f64,
    pub el: f64,
    pub column: usize,
    pub row: usize,
    /// Shares the frequency channel of the reuse traversal's start beam
    pub reuse: bool,
}

impl BeamCentre {
    pub fn position(&self) -> AzEl {
        AzEl::new(self.az, self.el)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamGrid {
    beams: Vec<BeamCentre>,
    cells: Vec<Vec<Option<BeamId>>>,
    aperture_radius_deg: f64,
    beam_radius_deg: f64,
}

impl BeamGrid {
    /// All beams in generation order
    pub fn beams(&self) -> &[BeamCentre] {
        &self.beams
    }

    pub fn len(&self) -> usize {
        self.beams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beams.is_empty()
    }

    pub fn aperture_radius_deg(&self) -> f64 {
        self.aperture_radius_deg
    }

    pub fn beam_radius_deg(&self) -> f64 {
        self.beam_radius_deg
    }

    pub fn beam(&self, id: BeamId) -> Option<&BeamCentre> {
        self.beams.get(id)
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    /// Rows allocated in `column` (populated or not)
    pub fn row_count(&self, column: usize) -> usize {
        self.cells.get(column).map_or(0, Vec::len)
    }

    /// Arena id at a lattice cell. Cells outside the generated bounds,
    /// including negative indices, are absent.
    pub fn id_at(&self, column: i64, row: i64) -> Option<BeamId> {
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        self.cells.get(column)?.get(row).copied().flatten()
    }

    pub fn get(&self, column: i64, row: i64) -> Option<&BeamCentre> {
        self.id_at(column, row).and_then(|id| self.beams.get(id))
    }

    /// First populated cell in column-major scan order
    pub fn first_populated(&self) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(column, rows)| {
            rows.iter().position(Option::is_some).map(|row| (column, row))
        })
    }

    /// Set the reuse flag. Returns false if the beam was already marked or
    /// does not exist.
    pub(crate) fn mark(&mut self, id: BeamId) -> bool {
        match self.beams.get_mut(id) {
            Some(beam) if !beam.reuse => {
                beam.reuse = true;
                true
            }
            _ => false,
        }
    }

    pub fn reused(&self) -> impl Iterator<Item = &BeamCentre> {
        self.beams.iter().filter(|b| b.reuse)
    }

    pub fn reuse_count(&self) -> usize {
        self.reused().count()
    }

    fn insert(&mut self, column: usize, row: usize, az: f64, el: f64) {
        let id = self.beams.len();
        self.beams.push(BeamCentre {
            az,
            el,
            column,
            row,
            reuse: false,
        });

        let rows = &mut self.cells[column];
        if rows.len() <= row {
            rows.resize(row + 1, None);
        }
        rows[row] = Some(id);
    }
}

/// Lay beams of `beam_radius_deg` on a hexagonal lattice covering a circle
/// of `aperture_radius_deg` around boresight.
///
/// A cell is kept when its centre lies strictly within
/// `aperture_radius_deg + beam_radius_deg`, so edge beams that still overlap
/// the aperture are included.
pub fn generate_grid(aperture_radius_deg: f64, beam_radius_deg: f64) -> Result<BeamGrid> {
    check_radius("aperture radius", aperture_radius_deg)?;
    check_radius("beam radius", beam_radius_deg)?;

    let limit = aperture_radius_deg + beam_radius_deg;
    let column_pitch = 1.5 * beam_radius_deg;
    let row_pitch = 3.0_f64.sqrt() * beam_radius_deg;

    let half_columns = (limit / column_pitch).floor() as i64;
    // Skewed row index whose elevation clears the limit in the leftmost column
    let top = (-(half_columns as f64) / 2.0 - limit / row_pitch).floor() as i64;

    let mut grid = BeamGrid {
        beams: Vec::new(),
        cells: Vec::with_capacity((2 * half_columns + 1) as usize),
        aperture_radius_deg,
        beam_radius_deg,
    };

    for (column, q) in (-half_columns..=half_columns).enumerate() {
        grid.cells.push(Vec::new());
        let az = column_pitch * q as f64;

        for n in top.. {
            let el = row_pitch * (q as f64 / 2.0 - n as f64);
            if el <= -limit {
                break;
            }
            if az.hypot(el) < limit {
                grid.insert(column, (n - top) as usize, az, el);
            }
        }
    }

    debug!(
        "Generated {} beams over {} columns (aperture {:.3}°, beam {:.3}°)",
        grid.len(),
        grid.column_count(),
        aperture_radius_deg,
        beam_radius_deg
    );

    Ok(grid)
}
