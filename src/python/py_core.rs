//! Grid bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, GameRng, DEFAULT_TARGET};
use crate::grid::{rotate_clockwise, spawn_random_tile, Grid, Rows};
use crate::rules::{apply_move, can_move, is_win, legal_moves};

/// Parse a direction name, raising `ValueError` on failure.
pub(crate) fn parse_direction(direction: &str) -> PyResult<Direction> {
    direction
        .parse()
        .map_err(|e: crate::core::ParseDirectionError| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Python wrapper for Grid.
///
/// Immutable: every operation returns a new Grid.
#[pyclass(name = "Grid")]
#[derive(Clone, Debug)]
pub struct PyGrid(pub Grid);

#[pymethods]
impl PyGrid {
    /// Create an empty N×N grid.
    #[new]
    fn new(size: usize) -> PyResult<Self> {
        if size == 0 {
            return Err(PyErr::new::<PyValueError, _>("grid size must be at least 1"));
        }
        Ok(Self(Grid::empty(size)))
    }

    /// Build a grid from rows of `int | None`.
    #[staticmethod]
    fn from_rows(rows: Rows) -> PyResult<Self> {
        Grid::try_from(rows)
            .map(Self)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    /// Grid dimension N.
    #[getter]
    fn size(&self) -> usize {
        self.0.size()
    }

    /// Rows of `int | None`.
    fn rows(&self) -> Rows {
        self.0.to_rows()
    }

    /// Tile values as a 2-D uint64 array, 0 for empty cells.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u64>>> {
        let values: Vec<Vec<u64>> = self
            .0
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.unwrap_or(0)).collect())
            .collect();
        PyArray2::from_vec2_bound(py, &values)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Apply a move. Returns `(grid, score_delta, moved)`.
    fn apply_move(&self, direction: &str) -> PyResult<(PyGrid, u64, bool)> {
        let result = apply_move(&self.0, parse_direction(direction)?);
        Ok((PyGrid(result.grid), result.score_delta, result.moved))
    }

    /// Spawn a random tile using a seeded RNG.
    fn spawn_random_tile(&self, seed: u64) -> PyGrid {
        let mut rng = GameRng::new(seed);
        PyGrid(spawn_random_tile(&self.0, &mut rng))
    }

    /// Rotate 90° clockwise.
    fn rotate_clockwise(&self) -> PyGrid {
        PyGrid(rotate_clockwise(&self.0))
    }

    #[pyo3(signature = (target = DEFAULT_TARGET))]
    fn is_win(&self, target: u64) -> bool {
        is_win(&self.0, target)
    }

    fn can_move(&self) -> bool {
        can_move(&self.0)
    }

    /// Names of the directions that would change the grid.
    fn legal_moves(&self) -> Vec<&'static str> {
        legal_moves(&self.0).into_iter().map(Direction::name).collect()
    }

    fn __repr__(&self) -> String {
        format!("Grid({:?})", self.0.to_rows())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
