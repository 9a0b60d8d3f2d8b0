//! Geometric primitives for the tile grid.
//!
//! Provides the integer tile coordinate type shared by the rasterizers and
//! the connectivity tracker.

/// A single grid tile addressed by integer coordinates.
///
/// Tiles carry no implicit bounds; validity relative to a `W`x`H` grid is
/// `0 <= x < W && 0 <= y < H` and is checked by the grid operations that
/// take tiles as arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Tile {
    /// Origin tile (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new tile.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the tile displaced by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev (chessboard) distance to another tile.
    ///
    /// Two distinct tiles are 8-adjacent exactly when this is 1.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(i32, i32)> for Tile {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
