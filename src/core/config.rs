//! Game configuration.
//!
//! A game is configured once at startup with its grid size and winning
//! tile. Sessions are reconfigured by `Game::resize`, which restarts.

use serde::{Deserialize, Serialize};

use super::Tile;

/// Grid size used when none is given.
pub const DEFAULT_SIZE: usize = 4;

/// Winning tile used when none is given.
pub const DEFAULT_TARGET: u64 = 2048;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid dimension N (the grid is N×N).
    pub size: usize,

    /// Tile value that wins the game.
    pub target: u64,
}

impl GameConfig {
    /// Create a configuration for an N×N grid with the default target.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");

        Self {
            size,
            target: DEFAULT_TARGET,
        }
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_target(mut self, target: u64) -> Self {
        assert!(
            Tile::new(target).is_some(),
            "Target must be a power of two >= 2"
        );
        self.target = target;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
