//! Terminal-state predicates.

use crate::core::Cell;
use crate::grid::Grid;

/// True if any cell holds exactly `target`.
#[must_use]
pub fn is_win(grid: &Grid, target: u64) -> bool {
    grid.cells().flatten().any(|tile| tile.value() == target)
}

/// True if at least one move can change the grid: an empty cell exists, or
/// two horizontally or vertically adjacent tiles can merge.
#[must_use]
pub fn can_move(grid: &Grid) -> bool {
    if grid.cells().any(|cell| cell.is_none()) {
        return true;
    }

    let n = grid.size();
    let horizontal = (0..n).any(|r| (1..n).any(|c| mergeable(grid.get(r, c - 1), grid.get(r, c))));
    let vertical = (0..n).any(|c| (1..n).any(|r| mergeable(grid.get(r - 1, c), grid.get(r, c))));
    horizontal || vertical
}

fn mergeable(a: Cell, b: Cell) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.merges_with(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_TARGET;

    fn grid<const N: usize>(rows: &[[u64; N]]) -> Grid {
        Grid::from_values(rows).unwrap()
    }

    #[test]
    fn test_is_win() {
        let g = grid(&[[2, 2048], [0, 4]]);
        assert!(is_win(&g, DEFAULT_TARGET));
        assert!(is_win(&g, 4));
        assert!(!is_win(&g, 8));
    }

    #[test]
    fn test_is_win_needs_exact_target() {
        // Overshooting the target does not count.
        let g = grid(&[[4096, 0], [0, 0]]);
        assert!(!is_win(&g, DEFAULT_TARGET));
    }

    #[test]
    fn test_can_move_with_empty_cell() {
        assert!(can_move(&grid(&[[2, 4], [8, 0]])));
        assert!(can_move(&Grid::empty(3)));
    }

    #[test]
    fn test_can_move_horizontal_pair() {
        assert!(can_move(&grid(&[[2, 4, 8], [16, 32, 32], [2, 4, 8]])));
    }

    #[test]
    fn test_can_move_vertical_pair() {
        assert!(can_move(&grid(&[[2, 4, 8], [16, 32, 64], [2, 32, 8]])));
    }

    #[test]
    fn test_cannot_move() {
        assert!(!can_move(&grid(&[[2, 4], [4, 2]])));
        assert!(!can_move(&grid(&[
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2]
        ])));
    }

    #[test]
    fn test_max_tiles_are_stuck() {
        let max = 1u64 << 63;
        assert!(!can_move(&grid(&[[max, max], [2, 4]])));
        assert!(can_move(&grid(&[[max, 2], [4, 4]])));
    }

    #[test]
    fn test_single_cell() {
        assert!(can_move(&Grid::empty(1)));
        assert!(!can_move(&grid(&[[2]])));
    }
}
