//! Error types for tilegrid operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tilegrid operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid dimensions for a grid.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Tile coordinates outside the grid.
    #[error("Tile ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// X coordinate of the offending tile.
        x: i32,
        /// Y coordinate of the offending tile.
        y: i32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// Negative index passed to a disjoint-set operation.
    #[error("Disjoint-set index {index} is negative")]
    OutOfRange {
        /// The offending index.
        index: i32,
    },
}
