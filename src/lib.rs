//! **prim_mazes** generates perfect mazes on a grid of wall and open cells with a randomized
//! Prim's algorithm, and carries the round state, text and image views for playing them.

pub mod cells;
pub mod errors;
pub mod game;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod renderers;
pub mod units;

pub use crate::generators::{generate, generate_with_rng};
pub use crate::grid::MazeGrid;
