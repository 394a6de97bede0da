//! Tile values and grid cells.
//!
//! A `Tile` is always a power of two ≥ 2, up to `Tile::MAX`. A `Cell` is
//! either empty (`None`) or holds a tile.
//!
//! Two `Tile::MAX` tiles cannot merge: their sum does not fit the value
//! type, so they behave like unequal neighbours.

use serde::{Deserialize, Serialize};

/// A tile value: a power of two, at least 2.
///
/// ```
/// use rust_2048::core::Tile;
///
/// assert_eq!(Tile::new(8).map(Tile::value), Some(8));
/// assert!(Tile::new(6).is_none());
/// assert!(Tile::new(1).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Tile(u64);

/// One grid position: empty or a tile.
pub type Cell = Option<Tile>;

impl Tile {
    /// The common spawn value.
    pub const TWO: Tile = Tile(2);

    /// The rare spawn value.
    pub const FOUR: Tile = Tile(4);

    /// Largest representable tile, 2^63.
    pub const MAX: Tile = Tile(1 << 63);

    /// Create a tile, rejecting anything that is not a power of two ≥ 2.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        if value >= 2 && value.is_power_of_two() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the tile's numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The tile produced by merging two tiles of this value, or `None` for
    /// `Tile::MAX`.
    #[must_use]
    pub const fn doubled(self) -> Option<Self> {
        match self.0.checked_mul(2) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Whether a tile of this value next to `other` merges on a slide.
    #[must_use]
    pub const fn merges_with(self, other: Tile) -> bool {
        self.0 == other.0 && self.doubled().is_some()
    }
}

impl TryFrom<u64> for Tile {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Tile::new(value).ok_or_else(|| format!("{value} is not a power of two >= 2"))
    }
}

impl From<Tile> for u64 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tiles() {
        for exp in 1..=63 {
            let value = 1u64 << exp;
            let tile = Tile::new(value).unwrap();
            assert_eq!(tile.value(), value);
        }
        assert_eq!(Tile::new(1 << 63), Some(Tile::MAX));
    }

    #[test]
    fn test_invalid_tiles() {
        assert!(Tile::new(0).is_none());
        assert!(Tile::new(1).is_none());
        assert!(Tile::new(3).is_none());
        assert!(Tile::new(12).is_none());
    }

    #[test]
    fn test_doubled() {
        assert_eq!(Tile::TWO.doubled(), Some(Tile::FOUR));
        assert_eq!(Tile::new(1024).unwrap().doubled(), Tile::new(2048));
        assert_eq!(Tile::new(1 << 62).unwrap().doubled(), Some(Tile::MAX));
        assert_eq!(Tile::MAX.doubled(), None);
    }

    #[test]
    fn test_merges_with() {
        assert!(Tile::TWO.merges_with(Tile::TWO));
        assert!(!Tile::TWO.merges_with(Tile::FOUR));
        assert!(!Tile::MAX.merges_with(Tile::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Tile::new(64).unwrap()), "64");
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let tile: Tile = serde_json::from_str("16").unwrap();
        assert_eq!(tile.value(), 16);
        assert!(serde_json::from_str::<Tile>("10").is_err());
    }
}
