//! Directional moves.
//!
//! Every direction is reduced to a left move: rotate so the direction points
//! left, slide every row, rotate back.

use im::Vector;
use smallvec::SmallVec;

use super::slide::slide_row_left;
use crate::core::{Cell, Direction};
use crate::grid::{rotate_clockwise_times, Grid};

/// Result of a directional move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// The grid after the move (before any spawn).
    pub grid: Grid,

    /// Sum of the tiles created by merges.
    pub score_delta: u64,

    /// Whether any tile moved or merged.
    ///
    /// When false, `grid` equals the input and the caller must not spawn.
    pub moved: bool,
}

/// Apply a move in `direction`. The input grid is never modified.
///
/// ```
/// use rust_2048::core::Direction;
/// use rust_2048::grid::Grid;
/// use rust_2048::rules::apply_move;
///
/// let grid = Grid::from_values(&[[2, 2], [0, 0]]).unwrap();
/// let result = apply_move(&grid, Direction::Up);
/// assert_eq!(result.grid, Grid::from_values(&[[0, 0], [2, 2]]).unwrap());
/// assert_eq!(result.score_delta, 0);
/// assert!(result.moved);
/// ```
#[must_use]
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let working = rotate_clockwise_times(grid, direction.clockwise_turns());
    let size = working.size();

    let mut cells: Vector<Cell> = Vector::new();
    let mut score_delta = 0u64;
    let mut moved = false;

    for r in 0..size {
        let row: SmallVec<[Cell; 8]> = working.row(r).collect();
        let slid = slide_row_left(&row);
        score_delta = score_delta.saturating_add(slid.score);
        moved |= slid.moved;
        cells.extend(slid.row);
    }

    if !moved {
        return MoveResult {
            grid: grid.clone(),
            score_delta: 0,
            moved: false,
        };
    }

    let slid = Grid::from_cells(size, cells);
    MoveResult {
        grid: rotate_clockwise_times(&slid, direction.restoring_turns()),
        score_delta,
        moved,
    }
}

/// Directions whose move would change the grid, in `Direction::ALL` order.
#[must_use]
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| apply_move(grid, dir).moved)
        .collect()
}
