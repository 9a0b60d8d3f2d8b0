//! Obstacle grid with connected-region labeling.
//!
//! [`ConnectivityGrid`] owns a dense `W`x`H` cell array and a
//! [`DisjointSet`]. Obstacle changes trigger a full relabeling pass rather
//! than an incremental update: one raster scan assigns provisional region
//! labels and records label merges in the disjoint set, and every region
//! query resolves a stored label to its current root. Region ids are
//! rebuilt from scratch on every pass and are not stable across obstacle
//! changes.

use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use crate::geometry::Tile;
use std::collections::BTreeSet;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Impassable; never receives a region label.
    Obstacle,
    /// Passable but not yet visited by the current labeling pass.
    Unlabeled,
    /// Passable, carrying the provisional label assigned by the current
    /// labeling pass. Resolve through the disjoint set before comparing.
    Region(i32),
}

/// Dense obstacle grid that tracks which tiles are mutually reachable.
///
/// Connectivity is 4-way: tiles sharing only a corner are not neighbors.
/// All queries resolve labels through a path-compressing disjoint set, so
/// they take `&mut self`; the underlying partition is never changed by a
/// query.
#[derive(Debug, Clone)]
pub struct ConnectivityGrid {
    /// Width in tiles.
    width: u32,
    /// Height in tiles.
    height: u32,
    /// Cell states in row-major order.
    cells: Vec<Cell>,
    /// Label partition for the current pass.
    sets: DisjointSet,
}

impl ConnectivityGrid {
    /// Create a grid with every tile passable.
    ///
    /// The fresh grid is fully labeled before this returns, so the whole
    /// board reads as a single region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let tile_count = (width as usize) * (height as usize);
        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::Unlabeled; tile_count],
            // Labels are 1-based and at most one per tile; sizing the set
            // up front means a relabel never grows it.
            sets: DisjointSet::new(tile_count + 1),
        };
        grid.recompute()?;
        Ok(grid)
    }

    /// Grid width in tiles.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in tiles.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether `tile` lies inside the grid.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        tile.x >= 0
            && tile.x < self.width as i32
            && tile.y >= 0
            && tile.y < self.height as i32
    }

    /// The state of a tile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `tile` lies outside the grid.
    pub fn cell(&self, tile: Tile) -> Result<Cell> {
        self.check(tile)?;
        Ok(self.cells[self.index(tile)])
    }

    /// Whether a tile currently carries the obstacle flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `tile` lies outside the grid.
    pub fn is_obstacle(&self, tile: Tile) -> Result<bool> {
        Ok(matches!(self.cell(tile)?, Cell::Obstacle))
    }

    /// Set or clear the obstacle flag on a tile.
    ///
    /// Idempotent: when the flag already matches, nothing changes and no
    /// relabeling runs. Returns whether the flag actually changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `tile` lies outside the grid.
    pub fn set_obstacle(&mut self, tile: Tile, on: bool) -> Result<bool> {
        self.check(tile)?;
        let index = self.index(tile);
        let was = matches!(self.cells[index], Cell::Obstacle);
        if was == on {
            return Ok(false);
        }

        self.cells[index] = if on { Cell::Obstacle } else { Cell::Unlabeled };
        self.recompute()?;
        Ok(true)
    }

    /// Flip the obstacle flag on a tile and relabel.
    ///
    /// Returns the new state of the flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `tile` lies outside the grid.
    pub fn toggle_obstacle(&mut self, tile: Tile) -> Result<bool> {
        let on = !self.is_obstacle(tile)?;
        self.set_obstacle(tile, on)?;
        Ok(on)
    }

    /// Rebuild region labels from scratch.
    ///
    /// One raster scan, x outer / y inner, both ascending. Each passable
    /// tile looks at its already-visited left and down neighbors:
    /// neither labeled gets a fresh ascending label, one labeled inherits
    /// it, and both labeled inherits the left label and merges left with
    /// down in the disjoint set. Out-of-bounds and obstacle neighbors
    /// count as unlabeled.
    pub fn recompute(&mut self) -> Result<()> {
        self.sets.clear();

        let mut next_label = 1;
        for x in 0..self.width as i32 {
            for y in 0..self.height as i32 {
                let tile = Tile::new(x, y);
                let index = self.index(tile);
                if matches!(self.cells[index], Cell::Obstacle) {
                    continue;
                }

                let left = self.label_at(x - 1, y);
                let down = self.label_at(x, y - 1);
                let label = match (left, down) {
                    (None, None) => {
                        let fresh = next_label;
                        next_label += 1;
                        fresh
                    }
                    (None, Some(down)) => down,
                    (Some(left), None) => left,
                    (Some(left), Some(down)) => {
                        self.sets.union(left, down)?;
                        left
                    }
                };
                self.cells[index] = Cell::Region(label);
            }
        }
        Ok(())
    }

    /// The region id of a passable tile, `None` for obstacles.
    ///
    /// Ids are only meaningful until the next obstacle change; a region
    /// may come back under a different id even if its tiles are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `tile` lies outside the grid.
    pub fn region_of(&mut self, tile: Tile) -> Result<Option<i32>> {
        self.check(tile)?;
        match self.cells[self.index(tile)] {
            Cell::Region(label) => Ok(Some(self.sets.find(label)?)),
            Cell::Obstacle | Cell::Unlabeled => Ok(None),
        }
    }

    /// Whether two passable tiles belong to the same region.
    ///
    /// An obstacle tile is connected to nothing, including itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either tile lies outside the grid.
    pub fn are_connected(&mut self, a: Tile, b: Tile) -> Result<bool> {
        let region_a = self.region_of(a)?;
        let region_b = self.region_of(b)?;
        Ok(matches!((region_a, region_b), (Some(ra), Some(rb)) if ra == rb))
    }

    /// Number of distinct regions on the board.
    ///
    /// Zero when every tile is an obstacle.
    pub fn region_count(&mut self) -> Result<usize> {
        let mut roots = BTreeSet::new();
        for index in 0..self.cells.len() {
            if let Cell::Region(label) = self.cells[index] {
                roots.insert(self.sets.find(label)?);
            }
        }
        Ok(roots.len())
    }

    fn index(&self, tile: Tile) -> usize {
        (tile.y as usize) * (self.width as usize) + (tile.x as usize)
    }

    fn check(&self, tile: Tile) -> Result<()> {
        if self.contains(tile) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x: tile.x,
                y: tile.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Label of an in-bounds, already-visited passable neighbor.
    fn label_at(&self, x: i32, y: i32) -> Option<i32> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        match self.cells[(y as usize) * (self.width as usize) + (x as usize)] {
            Cell::Region(label) => Some(label),
            Cell::Obstacle | Cell::Unlabeled => None,
        }
    }
}
