//! Move directions.
//!
//! Every move is resolved as a left slide on a rotated grid. A direction
//! knows how many clockwise quarter turns bring it to "left" and how many
//! turns restore the original orientation afterwards.
//!
//! The turn table is fixed: left 0, up 1, right 2, down 3. With the
//! clockwise rotation used by the grid this slides `Up` tiles toward row
//! N−1 and `Down` tiles toward row 0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A move direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Clockwise quarter turns that make this direction point left.
    ///
    /// One clockwise turn sends row `r` to column `N-1-r`, so a left slide
    /// after one turn packs tiles toward row N−1.
    #[must_use]
    pub const fn clockwise_turns(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Clockwise quarter turns that undo `clockwise_turns`.
    #[must_use]
    pub const fn restoring_turns(self) -> usize {
        (4 - self.clockwise_turns()) % 4
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a direction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction {0:?} (expected left, right, up or down)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
