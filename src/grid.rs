//! Square binary grid

use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// An N×N matrix of 0/1 cells, stored row-major.
///
/// A `Grid` is never mutated once built: the transition function always
/// produces a fresh one, so every state recorded in a trajectory stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// All-dead grid of the given size
    pub fn zeros(size: usize) -> Self {
        Self { size, cells: vec![0; size * size] }
    }

    /// Build a grid from rows, rejecting ragged, non-square or non-binary input.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid(format!(
                    "row {} has {} cells, expected {} for a {}x{} grid",
                    i, row.len(), size, size, size
                )));
            }
            if let Some(j) = row.iter().position(|&v| v > 1) {
                return Err(Error::invalid(format!(
                    "cell ({}, {}) is {}, only 0 and 1 are allowed",
                    i, j, row[j]
                )));
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Random fill where each cell is alive with probability `density`
    pub fn random<R: Rng>(size: usize, density: f64, rng: &mut R) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::invalid(format!(
                "density {} is outside [0, 1]",
                density
            )));
        }
        let cells = (0..size * size)
            .map(|_| rng.gen_bool(density) as u8)
            .collect();
        Ok(Self { size, cells })
    }

    /// Internal constructor for the transition function, which only ever
    /// writes 0 or 1.
    pub(crate) fn from_cells(size: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        debug_assert!(cells.iter().all(|&v| v <= 1));
        Self { size, cells }
    }

    /// Side length N
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Cell value at (row, col), `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics, and an empty grid has no rows anyway
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Number of cells set to 1
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    pub(crate) fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses rows of `0`/`1`. Whitespace between cells is optional; blank
/// lines and lines starting with `#` are skipped.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                match ch {
                    '0' => row.push(0),
                    '1' => row.push(1),
                    other => {
                        return Err(Error::invalid(format!(
                            "line {}: unexpected character '{}'",
                            lineno + 1,
                            other
                        )));
                    }
                }
            }
            rows.push(row);
        }

        Grid::from_rows(rows)
    }
}
