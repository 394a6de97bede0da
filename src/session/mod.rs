//! Game sessions: the Playing / Won / GameOver state machine.
//!
//! A `Game` owns the current grid, the score and a seeded RNG, and drives
//! the engine one move at a time:
//!
//! 1. Finished games reject moves.
//! 2. A move that changes nothing is ignored (no spawn).
//! 3. Otherwise a tile is spawned, the score updated and the status
//!    re-evaluated: reaching the target wins, being stuck ends the game.

mod game;

pub use game::{Game, GameError, GameStatus, Turn};
