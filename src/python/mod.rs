//! Python bindings for the rust-2048 engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048 as g
//!
//! game = g.Game(size=4, seed=42)
//! moved, delta = game.apply_move("left")
//!
//! # Feed the board to a model
//! board = game.grid.to_numpy()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// rust-2048: sliding-tile rules engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGrid>()?;
    m.add_class::<PyGame>()?;
    Ok(())
}
