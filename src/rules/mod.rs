//! Game rules: row slide-and-merge, directional moves, terminal predicates.
//!
//! All functions are pure: they take grids by reference and return new
//! values.

pub mod slide;
pub mod moves;
pub mod predicates;

pub use slide::{slide_row_left, RowSlide};
pub use moves::{apply_move, legal_moves, MoveResult};
pub use predicates::{can_move, is_win};
