//! # Tilegrid
//!
//! Grid rasterization and connected-region tracking for 2D tile maps.
//!
//! The crate discretizes continuous geometry onto a finite integer tile
//! grid and tracks which grid regions stay mutually reachable as obstacle
//! tiles are toggled. It is the algorithmic core of a tile-map editor or
//! debug overlay: the host owns input handling and rendering and feeds
//! tile coordinates in; this crate hands tile sequences and region ids
//! back.
//!
//! ## Features
//!
//! - **Line rasterization**: four selectable algorithms (Bresenham, Lerp,
//!   WalkGrid, Supercover) with distinct connectivity guarantees
//! - **Circle rasterization**: three outline and two filled-disk
//!   algorithms over a continuous radius
//! - **Connectivity tracking**: obstacle toggling with eager
//!   connected-component relabeling backed by a union-find
//!
//! ## Quick Start
//!
//! ```
//! use tilegrid::prelude::*;
//!
//! # fn main() -> tilegrid::Result<()> {
//! // Rasterize a line segment into tiles.
//! let tiles = LineAlgorithm::Bresenham.rasterize(Tile::new(0, 0), Tile::new(4, 2));
//! assert_eq!(tiles.first(), Some(&Tile::new(0, 0)));
//!
//! // Track connectivity while editing obstacles.
//! let mut grid = ConnectivityGrid::new(5, 5)?;
//! grid.set_obstacle(Tile::new(2, 2), true)?;
//! assert!(grid.are_connected(Tile::new(0, 0), Tile::new(4, 4))?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the public value types
//!   (`Tile`, `Cell`, algorithm selectors)
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." IBM Systems Journal.
//! - Patel, A. "Line drawing on a grid" and "Circle fill on a grid."
//!   Red Blob Games.
//! - Tarjan, R. E. (1975). "Efficiency of a Good But Not Linear Set Union
//!   Algorithm." JACM.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in grid/rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (tiles).
pub mod geometry;

/// Disjoint-set (union-find) forest.
pub mod disjoint_set;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Line and circle rasterization.
pub mod raster;

/// Obstacle grid with connected-region labeling.
pub mod grid;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for tilegrid operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```
/// use tilegrid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::disjoint_set::DisjointSet;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Tile;
    pub use crate::grid::{Cell, ConnectivityGrid};
    pub use crate::raster::{
        circle_bresenham_float, circle_bresenham_int, circle_simple, fill_bounding_box,
        fill_bounding_circle, line_bresenham, line_lerp, line_supercover, line_walk_grid,
        radius_in_tiles, FillAlgorithm, LineAlgorithm, OutlineAlgorithm,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_exposes_the_toolkit() {
        let line = LineAlgorithm::default().rasterize(Tile::ORIGIN, Tile::new(3, 0));
        assert_eq!(line.len(), 3);

        let outline = OutlineAlgorithm::default().rasterize(Tile::ORIGIN, 0.2, 0.1);
        assert!(!outline.is_empty());

        let mut grid = ConnectivityGrid::new(2, 2).expect("non-zero dimensions");
        assert!(grid
            .are_connected(Tile::ORIGIN, Tile::new(1, 1))
            .expect("tiles in bounds"));
    }
}
