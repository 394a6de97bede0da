//! The N×N grid value.
//!
//! ## Representation
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a grid is O(1)
//! and a single-cell change is a copy-on-write update. No method mutates
//! `self`; every "change" returns a new `Grid`.
//!
//! ## Boundary form
//!
//! Outside the engine a grid is `Vec<Vec<Option<u64>>>`: N rows of N cells.
//! `Grid::try_from` validates that shape and every value, and serde goes
//! through the same form.

pub mod rotate;
pub mod spawn;

use std::ops::Index;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Cell, Tile};

pub use rotate::{rotate_clockwise, rotate_clockwise_times};
pub use spawn::{empty_grid, new_game, spawn_random_tile, SPAWN_TWO_PROBABILITY};

/// Boundary rows: `None` is empty, `Some(v)` a tile value.
pub type Rows = Vec<Vec<Option<u64>>>;

/// Error converting boundary rows into a `Grid`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, which is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u64 },
}

/// Square grid of cells.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct Grid {
    size: usize,
    cells: Vector<Cell>,
}

impl Grid {
    /// Create an N×N grid with every cell empty.
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");

        Self {
            size,
            cells: std::iter::repeat(None).take(size * size).collect(),
        }
    }

    /// Build a grid from row-major cells already known to be `size * size` long.
    pub(crate) fn from_cells(size: usize, cells: Vector<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Build a grid from rows of tile values, `0` meaning empty.
    ///
    /// Convenience for tests and fixtures.
    ///
    /// ```
    /// use rust_2048::grid::Grid;
    ///
    /// let grid = Grid::from_values(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(grid.occupied_count(), 2);
    /// ```
    pub fn from_values<const N: usize>(rows: &[[u64; N]]) -> Result<Self, GridError> {
        let rows: Rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v == 0 { None } else { Some(v) })
                    .collect()
            })
            .collect();
        Self::try_from(rows)
    }

    /// Grid dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col). Panics when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self[(row, col)]
    }

    /// Return a new grid with one cell replaced.
    #[must_use]
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        assert!(row < self.size && col < self.size, "Cell ({row}, {col}) out of bounds");
        Self {
            size: self.size,
            cells: self.cells.update(row * self.size + col, cell),
        }
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate over the cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = row * self.size;
        (start..start + self.size).map(move |i| self.cells[i])
    }

    /// Coordinates of every empty cell, in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Sum of all tile values, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.cells()
            .flatten()
            .fold(0u64, |sum, tile| sum.saturating_add(tile.value()))
    }

    /// Highest tile on the grid, if any.
    #[must_use]
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells().flatten().max()
    }

    /// Convert to the boundary form.
    #[must_use]
    pub fn to_rows(&self) -> Rows {
        (0..self.size)
            .map(|r| self.row(r).map(|cell| cell.map(Tile::value)).collect())
            .collect()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(row < self.size && col < self.size, "Cell ({row}, {col}) out of bounds");
        &self.cells[row * self.size + col]
    }
}

impl TryFrom<Rows> for Grid {
    type Error = GridError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vector::new();
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                let cell = match value {
                    None => None,
                    Some(value) => Some(
                        Tile::new(value).ok_or(GridError::InvalidTile { row, col, value })?,
                    ),
                };
                cells.push_back(cell);
            }
        }

        Ok(Self { size, cells })
    }
}

impl From<Grid> for Rows {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .max_tile()
            .map_or(1, |tile| tile.value().to_string().len());

        for r in 0..self.size {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in self.row(r).enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{:>width$}", tile.value())?,
                    None => write!(f, "{:>width$}", ".")?,
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("rows", &self.to_rows())
            .finish()
    }
}
