//! A single game session.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::{Direction, GameConfig, GameRng, GameRngState};
use crate::grid::{new_game, spawn_random_tile, Grid};
use crate::rules::{apply_move, can_move, is_win};

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    Playing,
    /// The target tile was reached.
    Won,
    /// No move can change the grid.
    GameOver,
}

impl GameStatus {
    /// Won and GameOver accept no further moves.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Evaluate a grid: a win takes precedence over being stuck.
    #[must_use]
    pub fn evaluate(grid: &Grid, target: u64) -> Self {
        if is_win(grid, target) {
            GameStatus::Won
        } else if !can_move(grid) {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Session errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is finished ({0}); restart to keep playing")]
    Finished(GameStatus),

    #[error("grid size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("grid is {actual}x{actual} but the game is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Outcome of one accepted move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Whether the grid changed (and a tile was spawned).
    pub moved: bool,

    /// Points earned by this move.
    pub score_delta: u64,

    /// Status after the move.
    pub status: GameStatus,
}

/// A game in progress: current grid, score, status and RNG.
///
/// ```
/// use rust_2048::core::{Direction, GameConfig};
/// use rust_2048::session::{Game, GameStatus};
///
/// let mut game = Game::new(GameConfig::new(4), 42);
/// assert_eq!(game.grid().occupied_count(), 2);
///
/// let turn = game.apply_move(Direction::Left).unwrap();
/// assert_eq!(turn.status, GameStatus::Playing);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    score: u64,
    moves: u32,
    status: GameStatus,
    rng: GameRng,
}

impl Game {
    /// Start a new game with a seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let grid = new_game(config.size, &mut rng);
        let status = GameStatus::evaluate(&grid, config.target);
        debug!(size = config.size, target = config.target, seed, "new game");

        Self {
            config,
            grid,
            score: 0,
            moves: 0,
            status,
            rng,
        }
    }

    /// Continue from an existing grid.
    pub fn from_grid(config: GameConfig, grid: Grid, seed: u64) -> Result<Self, GameError> {
        if grid.size() != config.size {
            return Err(GameError::SizeMismatch {
                expected: config.size,
                actual: grid.size(),
            });
        }

        let status = GameStatus::evaluate(&grid, config.target);
        Ok(Self {
            config,
            grid,
            score: 0,
            moves: 0,
            status,
            rng: GameRng::new(seed),
        })
    }

    /// Current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the grid.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// RNG position, for reproducing the remaining spawns.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Play one move.
    ///
    /// A move that changes nothing leaves the session untouched (no spawn,
    /// no move counted). Finished games reject moves.
    pub fn apply_move(&mut self, direction: Direction) -> Result<Turn, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Finished(self.status));
        }

        let result = apply_move(&self.grid, direction);
        if !result.moved {
            trace!(%direction, "move changed nothing");
            return Ok(Turn {
                moved: false,
                score_delta: 0,
                status: self.status,
            });
        }

        self.grid = spawn_random_tile(&result.grid, &mut self.rng);
        self.score = self.score.saturating_add(result.score_delta);
        self.moves += 1;
        self.status = GameStatus::evaluate(&self.grid, self.config.target);
        trace!(%direction, score_delta = result.score_delta, score = self.score, "move applied");

        if self.status.is_terminal() {
            debug!(status = %self.status, score = self.score, moves = self.moves, "game finished");
        }

        Ok(Turn {
            moved: true,
            score_delta: result.score_delta,
            status: self.status,
        })
    }

    /// Start over at the current size. The RNG stream continues.
    pub fn restart(&mut self) {
        self.grid = new_game(self.config.size, &mut self.rng);
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::evaluate(&self.grid, self.config.target);
        debug!(size = self.config.size, "game restarted");
    }

    /// Change the grid size and restart.
    pub fn resize(&mut self, size: usize) -> Result<(), GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize(size));
        }

        self.config.size = size;
        debug!(size, "game resized");
        self.restart();
        Ok(())
    }
}
