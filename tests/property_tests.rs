//! Property tests for the board engine.

use proptest::prelude::*;
use rust_2048::{
    apply_move, can_move, rotate_clockwise, rotate_clockwise_times, slide_row_left,
    spawn_random_tile, Cell, Direction, GameRng, Grid, Rows, Tile,
};

// =============================================================================
// Strategies
// =============================================================================

fn arb_cell() -> impl Strategy<Value = Option<u64>> {
    prop::option::of((1u64..=11).prop_map(|exp| 1u64 << exp))
}

/// Grids of size 1–6 with roughly half the cells occupied.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..=6).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(arb_cell(), n), n)
            .prop_map(|rows: Rows| Grid::try_from(rows).unwrap())
    })
}

/// Full grids with few distinct values, so stuck grids show up often.
fn arb_full_grid() -> impl Strategy<Value = Grid> {
    (2usize..=4).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec((1u64..=4).prop_map(|e| Some(1u64 << e)), n), n)
            .prop_map(|rows: Rows| Grid::try_from(rows).unwrap())
    })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn arb_row() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(arb_cell().prop_map(|v| v.and_then(Tile::new)), 1..=8)
}

// =============================================================================
// Move Properties
// =============================================================================

proptest! {
    /// An unmoved result is the input grid, cell for cell.
    #[test]
    fn prop_unmoved_means_unchanged(g in arb_grid(), dir in arb_direction()) {
        let result = apply_move(&g, dir);
        if !result.moved {
            prop_assert_eq!(&result.grid, &g);
            prop_assert_eq!(result.score_delta, 0);
        } else {
            prop_assert_ne!(&result.grid, &g);
        }
    }

    /// A stuck grid reports no movement in any direction.
    #[test]
    fn prop_stuck_grid_never_moves(g in arb_full_grid()) {
        if !can_move(&g) {
            for dir in Direction::ALL {
                prop_assert!(!apply_move(&g, dir).moved);
            }
        }
    }

    /// With at least one tile, `can_move` agrees with trying every direction.
    #[test]
    fn prop_can_move_matches_moves(g in prop_oneof![arb_grid(), arb_full_grid()]) {
        prop_assume!(g.occupied_count() > 0);
        let any_moved = Direction::ALL.into_iter().any(|d| apply_move(&g, d).moved);
        prop_assert_eq!(can_move(&g), any_moved);
    }

    /// Moves conserve total value; the score is the value of merged tiles.
    #[test]
    fn prop_move_conserves_value(g in arb_grid(), dir in arb_direction()) {
        let result = apply_move(&g, dir);
        prop_assert_eq!(result.grid.total_value(), g.total_value());

        // Each merge removes one tile and scores the new tile's value.
        let merges = g.occupied_count() - result.grid.occupied_count();
        prop_assert_eq!(merges == 0, result.score_delta == 0);
        prop_assert!(result.score_delta <= g.total_value());
    }

    /// The move never changes the grid size or mutates its input.
    #[test]
    fn prop_move_keeps_shape(g in arb_grid(), dir in arb_direction()) {
        let copy = g.clone();
        let result = apply_move(&g, dir);
        prop_assert_eq!(result.grid.size(), g.size());
        prop_assert_eq!(g, copy);
    }
}

// =============================================================================
// Rotation Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_four_rotations_identity(g in arb_grid()) {
        let mut out = g.clone();
        for _ in 0..4 {
            out = rotate_clockwise(&out);
        }
        prop_assert_eq!(&out, &g);
        prop_assert_eq!(rotate_clockwise_times(&g, 4), g);
    }

    #[test]
    fn prop_rotation_maps_cells(g in arb_grid()) {
        let rotated = rotate_clockwise(&g);
        let n = g.size();
        for r in 0..n {
            for c in 0..n {
                prop_assert_eq!(rotated.get(c, n - 1 - r), g.get(r, c));
            }
        }
    }
}

// =============================================================================
// Row Properties
// =============================================================================

proptest! {
    /// After one slide the row is packed: a second slide can only change it
    /// by merging.
    #[test]
    fn prop_second_slide_only_merges(row in arb_row()) {
        let first = slide_row_left(&row);
        let second = slide_row_left(&first.row);
        prop_assert_eq!(second.moved, second.score > 0);
        if second.score == 0 {
            prop_assert_eq!(second.row, first.row);
        }
    }

    /// A row without equal neighbours after sliding is a fixed point.
    #[test]
    fn prop_slide_fixed_point(row in arb_row()) {
        let first = slide_row_left(&row);
        let packed: Vec<Tile> = first.row.iter().flatten().copied().collect();
        if packed.windows(2).all(|w| w[0] != w[1]) {
            let second = slide_row_left(&first.row);
            prop_assert!(!second.moved);
            prop_assert_eq!(second.row, first.row);
        }
    }

    /// Slides keep length, keep the row packed and conserve value.
    #[test]
    fn prop_slide_packs_left(row in arb_row()) {
        let slid = slide_row_left(&row);
        prop_assert_eq!(slid.row.len(), row.len());

        let occupied = slid.row.iter().filter(|c| c.is_some()).count();
        prop_assert!(slid.row[..occupied].iter().all(Option::is_some));

        let sum = |cells: &[Cell]| cells.iter().flatten().map(|t| t.value()).sum::<u64>();
        prop_assert_eq!(sum(&slid.row), sum(&row));
    }
}

// =============================================================================
// Spawn Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_spawn_adds_one_tile(g in arb_grid(), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let spawned = spawn_random_tile(&g, &mut rng);
        let n = g.size();

        if g.empty_positions().is_empty() {
            prop_assert_eq!(&spawned, &g);
        } else {
            prop_assert_eq!(spawned.occupied_count(), g.occupied_count() + 1);
        }

        for r in 0..n {
            for c in 0..n {
                if g.get(r, c).is_some() {
                    prop_assert_eq!(spawned.get(r, c), g.get(r, c));
                }
            }
        }
    }
}
