//! # rust-2048
//!
//! Rules engine for the sliding-tile puzzle "2048" on an N×N grid.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Every engine operation takes a grid by reference and returns
//!    a new one. Nothing is mutated in place.
//!
//! 2. **Size-Agnostic**: Any N ≥ 1 works; 4×4 is only the default.
//!
//! 3. **Injected Randomness**: Spawning takes `&mut impl Rng`, so seeded
//!    games (`GameRng`) are fully reproducible.
//!
//! ## Architecture
//!
//! - **One Move Algorithm**: All four directions rotate the grid so the move
//!   points left, slide every row, then rotate back.
//!
//! - **Persistent Data Structures**: O(1) grid cloning via `im-rs`; a spawn
//!   is a single copy-on-write update.
//!
//! ## Modules
//!
//! - `core`: Tiles, directions, configuration, RNG
//! - `grid`: Grid value, rotation, construction and spawning
//! - `rules`: Row slide-and-merge, directional moves, win/loss predicates
//! - `session`: Playing / Won / GameOver state machine
//!
//! ## Example
//!
//! ```
//! use rust_2048::{apply_move, can_move, is_win, new_game, spawn_random_tile};
//! use rust_2048::{Direction, GameRng, DEFAULT_TARGET};
//!
//! let mut rng = GameRng::new(42);
//! let grid = new_game(4, &mut rng);
//!
//! let result = apply_move(&grid, Direction::Left);
//! let grid = if result.moved {
//!     spawn_random_tile(&result.grid, &mut rng)
//! } else {
//!     grid
//! };
//!
//! assert!(!is_win(&grid, DEFAULT_TARGET));
//! assert!(can_move(&grid));
//! ```

pub mod core;
pub mod grid;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, Direction, GameConfig, GameRng, GameRngState, ParseDirectionError, Tile,
    DEFAULT_SIZE, DEFAULT_TARGET,
};

pub use crate::grid::{
    empty_grid, new_game, rotate_clockwise, rotate_clockwise_times, spawn_random_tile,
    Grid, GridError, Rows,
};

pub use crate::rules::{
    apply_move, can_move, is_win, legal_moves, slide_row_left,
    MoveResult, RowSlide,
};

pub use crate::session::{Game, GameError, GameStatus, Turn};
