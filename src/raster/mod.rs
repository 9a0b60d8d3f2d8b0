//! Rasterization algorithms mapping continuous geometry to tile sets.
//!
//! All functions here are pure: they allocate a fresh output, touch no
//! shared state, and are safe to call from any number of threads.

mod circle;
mod line;

pub use circle::{
    circle_bresenham_float, circle_bresenham_int, circle_simple, fill_bounding_box,
    fill_bounding_circle, radius_in_tiles, FillAlgorithm, OutlineAlgorithm,
};
pub use line::{line_bresenham, line_lerp, line_supercover, line_walk_grid, LineAlgorithm};
