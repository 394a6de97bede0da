//! Row slide-and-merge toward the left end.
//!
//! 1. Compact: drop empty cells, keep order.
//! 2. Merge: one left-to-right pass; two equal neighbours become one tile of
//!    double value, scoring that value. A merged tile does not merge again in
//!    the same pass, and two `Tile::MAX` tiles never merge.
//! 3. Pad with empty cells back to the row length.

use smallvec::SmallVec;

use crate::core::{Cell, Tile};

/// Outcome of sliding one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSlide {
    /// The row after sliding, same length as the input.
    pub row: Vec<Cell>,

    /// Sum of the tiles created by merges.
    pub score: u64,

    /// Whether anything changed.
    pub moved: bool,
}

/// Slide and merge one row toward index 0.
///
/// ```
/// use rust_2048::core::Tile;
/// use rust_2048::rules::slide_row_left;
///
/// let two = Tile::new(2);
/// let slid = slide_row_left(&[two, two, None, None]);
/// assert_eq!(slid.row, vec![Tile::new(4), None, None, None]);
/// assert_eq!(slid.score, 4);
/// assert!(slid.moved);
/// ```
#[must_use]
pub fn slide_row_left(row: &[Cell]) -> RowSlide {
    let compact: SmallVec<[Tile; 8]> = row.iter().flatten().copied().collect();

    let mut out: Vec<Cell> = Vec::with_capacity(row.len());
    let mut score = 0u64;
    let mut merged = false;

    let mut i = 0;
    while i < compact.len() {
        let tile = compact[i];
        match (compact.get(i + 1), tile.doubled()) {
            (Some(&next), Some(sum)) if next == tile => {
                score = score.saturating_add(sum.value());
                out.push(Some(sum));
                merged = true;
                i += 2;
            }
            _ => {
                out.push(Some(tile));
                i += 1;
            }
        }
    }
    out.resize(row.len(), None);

    // Without a merge the output is the compacted row, so it can only differ
    // from the input inside the occupied prefix.
    let moved = merged
        || out
            .iter()
            .zip(row)
            .take(compact.len())
            .any(|(after, before)| after != before);

    RowSlide {
        row: out,
        score,
        moved,
    }
}
