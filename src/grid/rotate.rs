//! Quarter-turn rotation.
//!
//! Input cell (r, c) lands on output cell (c, N-1-r).

use im::Vector;

use super::Grid;
use crate::core::Cell;

/// Rotate a grid 90° clockwise.
///
/// ```
/// use rust_2048::grid::{rotate_clockwise, Grid};
///
/// let grid = Grid::from_values(&[[2, 4], [8, 16]]).unwrap();
/// let expected = Grid::from_values(&[[8, 2], [16, 4]]).unwrap();
/// assert_eq!(rotate_clockwise(&grid), expected);
/// ```
#[must_use]
pub fn rotate_clockwise(grid: &Grid) -> Grid {
    let n = grid.size();
    // Output (r, c) reads input (n-1-c, r).
    let cells: Vector<Cell> = (0..n * n)
        .map(|i| {
            let (r, c) = (i / n, i % n);
            grid.get(n - 1 - c, r)
        })
        .collect();
    Grid::from_cells(n, cells)
}

/// Rotate a grid clockwise `turns` times (taken modulo 4).
#[must_use]
pub fn rotate_clockwise_times(grid: &Grid, turns: usize) -> Grid {
    let mut out = grid.clone();
    for _ in 0..turns % 4 {
        out = rotate_clockwise(&out);
    }
    out
}

impl Grid {
    /// Method form of [`rotate_clockwise`].
    #[must_use]
    pub fn rotate_clockwise(&self) -> Grid {
        rotate_clockwise(self)
    }
}
