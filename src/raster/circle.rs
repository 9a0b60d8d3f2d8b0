//! Circle rasterization: outlines and filled disks.
//!
//! Outline algorithms take an integer radius in tiles; [`radius_in_tiles`]
//! derives one from a continuous radius and tile size. Fill algorithms take
//! the continuous radius directly so the membership test can honor the true
//! circle boundary rather than its tile-rounded approximation.
//!
//! # References
//!
//! - Midpoint circle algorithm (Bresenham, 1977 variant).
//! - Patel, A. "Circle fill on a grid."
//!   <https://www.redblobgames.com/grids/circle-drawing/>

use crate::geometry::Tile;

/// Circle outline algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutlineAlgorithm {
    /// Octant sweep solving `y = round(sqrt(r^2 - x^2))` per column.
    #[default]
    Simple,
    /// Midpoint recurrence with a floating-point decision variable.
    BresenhamFloat,
    /// Midpoint recurrence in integer arithmetic only.
    BresenhamInt,
}

impl OutlineAlgorithm {
    /// Rasterize the outline of a circle of continuous `radius` centered on
    /// `center`, with the radius first converted to whole tiles via
    /// [`radius_in_tiles`].
    #[must_use]
    pub fn rasterize(self, center: Tile, radius: f32, tile_size: f32) -> Vec<Tile> {
        let r = radius_in_tiles(radius, tile_size);
        match self {
            Self::Simple => circle_simple(center, r),
            Self::BresenhamFloat => circle_bresenham_float(center, r),
            Self::BresenhamInt => circle_bresenham_int(center, r),
        }
    }
}

/// Filled-disk algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillAlgorithm {
    /// Per-cell distance test over the bounding box.
    #[default]
    BoundingBox,
    /// Per-row half-width spans; no per-cell distance test.
    BoundingCircle,
}

impl FillAlgorithm {
    /// Rasterize the filled disk of continuous `radius` centered on
    /// `center`.
    #[must_use]
    pub fn rasterize(self, center: Tile, radius: f32, tile_size: f32) -> Vec<Tile> {
        match self {
            Self::BoundingBox => fill_bounding_box(center, radius, tile_size),
            Self::BoundingCircle => fill_bounding_circle(center, radius, tile_size),
        }
    }
}

/// Convert a continuous radius to whole tiles, rounding up.
///
/// Non-positive radius or tile size maps to 0, which every rasterizer below
/// treats as an empty result.
#[must_use]
pub fn radius_in_tiles(radius: f32, tile_size: f32) -> i32 {
    if radius <= 0.0 || tile_size <= 0.0 {
        return 0;
    }
    (radius / tile_size).ceil() as i32
}

/// Outline via per-column solving of the circle equation.
///
/// Emits the four axis tiles, then sweeps `x` upward from 1 while `x <= y`
/// with `y = round(sqrt(r^2 - x^2))`, reflecting each `(x, y)` pair into all
/// eight octants. Reflections coincide on the axes and the 45-degree
/// diagonal, so the sequence may repeat tiles there.
#[must_use]
pub fn circle_simple(center: Tile, radius: i32) -> Vec<Tile> {
    if radius <= 0 {
        return Vec::new();
    }

    let mut tiles = vec![
        Tile::new(center.x, center.y + radius),
        Tile::new(center.x, center.y - radius),
        Tile::new(center.x + radius, center.y),
        Tile::new(center.x - radius, center.y),
    ];

    let rr = radius * radius;
    let mut x = 1;
    loop {
        let y = ((rr - x * x) as f32).sqrt().round() as i32;
        if x > y {
            break;
        }
        push_octants(&mut tiles, center, x, y);
        x += 1;
    }
    tiles
}

/// Outline via the midpoint recurrence with an `f32` decision variable
/// starting at `1.25 - r`.
///
/// Produces the same tile set as [`circle_bresenham_int`] for every integer
/// radius: the two decision variables differ by the constant 0.25 and every
/// update is integral, so the sign test can never disagree.
#[must_use]
pub fn circle_bresenham_float(center: Tile, radius: i32) -> Vec<Tile> {
    if radius <= 0 {
        return Vec::new();
    }

    let mut tiles = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut d = 1.25 - radius as f32;
    while x < y {
        push_octants(&mut tiles, center, x, y);
        if d < 0.0 {
            d += (2 * x + 3) as f32;
        } else {
            d += (2 * (x - y) + 5) as f32;
            y -= 1;
        }
        x += 1;
    }
    tiles
}

/// Outline via the midpoint recurrence in integer arithmetic, decision
/// variable starting at `1 - r`.
#[must_use]
pub fn circle_bresenham_int(center: Tile, radius: i32) -> Vec<Tile> {
    if radius <= 0 {
        return Vec::new();
    }

    let mut tiles = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;
    while x < y {
        push_octants(&mut tiles, center, x, y);
        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
    tiles
}

/// Filled disk via a bounding-box sweep with a per-cell distance test.
///
/// A tile offset `(dx, dy)` is covered when its continuous displacement
/// `(dx * tile_size, dy * tile_size)` lies within `radius` of the center.
/// O(rc^2) in the tile radius `rc`.
#[must_use]
pub fn fill_bounding_box(center: Tile, radius: f32, tile_size: f32) -> Vec<Tile> {
    let rc = radius_in_tiles(radius, tile_size);
    if rc == 0 {
        return Vec::new();
    }

    let rr = radius * radius;
    let mut tiles = Vec::new();
    for dx in -rc..=rc {
        for dy in -rc..=rc {
            let px = dx as f32 * tile_size;
            let py = dy as f32 * tile_size;
            if px * px + py * py <= rr {
                tiles.push(center.offset(dx, dy));
            }
        }
    }
    tiles
}

/// Filled disk via per-row spans.
///
/// For each row the half-width is `floor(sqrt(rc^2 - dy^2))` tiles, and the
/// whole horizontal span is covered without testing individual cells. Same
/// asymptotic cost as [`fill_bounding_box`] with a smaller constant factor.
#[must_use]
pub fn fill_bounding_circle(center: Tile, radius: f32, tile_size: f32) -> Vec<Tile> {
    let rc = radius_in_tiles(radius, tile_size);
    if rc == 0 {
        return Vec::new();
    }

    let sqr = rc * rc;
    let mut tiles = Vec::new();
    for y in (center.y - rc)..=(center.y + rc) {
        let dy = y - center.y;
        let dx = ((sqr - dy * dy) as f32).sqrt().floor() as i32;
        for x in (center.x - dx)..=(center.x + dx) {
            tiles.push(Tile::new(x, y));
        }
    }
    tiles
}

/// Reflect `(x, y)` into all eight octants around `center`.
#[inline]
fn push_octants(tiles: &mut Vec<Tile>, center: Tile, x: i32, y: i32) {
    tiles.push(Tile::new(center.x + x, center.y + y));
    tiles.push(Tile::new(center.x - x, center.y + y));
    tiles.push(Tile::new(center.x + x, center.y - y));
    tiles.push(Tile::new(center.x - x, center.y - y));
    tiles.push(Tile::new(center.x + y, center.y + x));
    tiles.push(Tile::new(center.x - y, center.y + x));
    tiles.push(Tile::new(center.x + y, center.y - x));
    tiles.push(Tile::new(center.x - y, center.y - x));
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
