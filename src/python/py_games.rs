//! Session bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{GameConfig, Tile, DEFAULT_SIZE, DEFAULT_TARGET};
use crate::session::Game;

use super::py_core::{parse_direction, PyGrid};

/// Python wrapper for a game session.
#[pyclass(name = "Game")]
pub struct PyGame(Game);

#[pymethods]
impl PyGame {
    /// Start a new game.
    ///
    /// # Arguments
    /// - size: Grid dimension N
    /// - target: Winning tile value
    /// - seed: RNG seed for reproducible spawns
    #[new]
    #[pyo3(signature = (size = DEFAULT_SIZE, target = DEFAULT_TARGET, seed = 42))]
    fn new(size: usize, target: u64, seed: u64) -> PyResult<Self> {
        if size == 0 {
            return Err(PyErr::new::<PyValueError, _>("grid size must be at least 1"));
        }
        if Tile::new(target).is_none() {
            return Err(PyErr::new::<PyValueError, _>(
                "target must be a power of two >= 2",
            ));
        }
        let config = GameConfig::new(size).with_target(target);
        Ok(Self(Game::new(config, seed)))
    }

    /// Play a move. Returns `(moved, score_delta)`.
    ///
    /// Raises `RuntimeError` if the game is finished.
    fn apply_move(&mut self, direction: &str) -> PyResult<(bool, u64)> {
        let direction = parse_direction(direction)?;
        self.0
            .apply_move(direction)
            .map(|turn| (turn.moved, turn.score_delta))
            .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))
    }

    fn restart(&mut self) {
        self.0.restart();
    }

    fn resize(&mut self, size: usize) -> PyResult<()> {
        self.0
            .resize(size)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    #[getter]
    fn grid(&self) -> PyGrid {
        PyGrid(self.0.grid().clone())
    }

    #[getter]
    fn score(&self) -> u64 {
        self.0.score()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.0.moves()
    }

    /// "playing", "won" or "game over".
    #[getter]
    fn status(&self) -> String {
        self.0.status().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(size={}, score={}, status={:?})",
            self.0.config().size,
            self.0.score(),
            self.0.status().to_string()
        )
    }
}
