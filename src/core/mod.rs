//! Core engine types: tiles, directions, configuration, RNG.
//!
//! These are the building blocks shared by the grid, the rules and the
//! session layer.

pub mod tile;
pub mod direction;
pub mod config;
pub mod rng;

pub use tile::{Cell, Tile};
pub use direction::{Direction, ParseDirectionError};
pub use config::{GameConfig, DEFAULT_SIZE, DEFAULT_TARGET};
pub use rng::{GameRng, GameRngState};
