//! Grid construction and random tile spawning.
//!
//! Randomness is always supplied by the caller, so a seeded `GameRng`
//! (or any other `Rng`) makes spawns reproducible.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use super::Grid;
use crate::core::Tile;

/// Probability that a spawned tile is a 2 (otherwise it is a 4).
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Create an N×N grid with every cell empty. Panics if `size` is 0.
#[must_use]
pub fn empty_grid(size: usize) -> Grid {
    Grid::empty(size)
}

/// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
///
/// Returns the input unchanged when the grid is full; callers detect the end
/// of the game with [`can_move`](crate::rules::can_move), not with this.
///
/// ```
/// use rust_2048::core::GameRng;
/// use rust_2048::grid::{spawn_random_tile, Grid};
///
/// let mut rng = GameRng::new(3);
/// let grid = Grid::empty(4);
/// let spawned = spawn_random_tile(&grid, &mut rng);
/// assert_eq!(grid.occupied_count(), 0);
/// assert_eq!(spawned.occupied_count(), 1);
/// ```
#[must_use]
pub fn spawn_random_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    let empties = grid.empty_positions();
    let Some(&(row, col)) = empties.choose(rng) else {
        trace!(size = grid.size(), "grid is full, nothing spawned");
        return grid.clone();
    };

    let tile = if rng.gen_bool(SPAWN_TWO_PROBABILITY) {
        Tile::TWO
    } else {
        Tile::FOUR
    };
    grid.with_cell(row, col, Some(tile))
}

/// Create the opening grid: empty, then two spawns.
///
/// The second spawn draws from the cells left empty by the first, so the two
/// starting tiles never share a cell.
#[must_use]
pub fn new_game<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    let grid = empty_grid(size);
    let grid = spawn_random_tile(&grid, rng);
    spawn_random_tile(&grid, rng)
}
