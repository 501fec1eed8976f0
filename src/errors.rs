//! Error types for grid construction and cell access.
//!
//! `error_chain!` creates the `Error`, `ErrorKind`, `ResultExt` and `Result` types.
//! Other modules `use crate::errors::*;` to get access to everything.

use error_chain::*;

error_chain! {
    errors {
        OutOfBounds(row: usize, col: usize, height: usize, width: usize) {
            description("grid coordinate out of bounds")
            display("coordinate (row {}, column {}) is outside the {}x{} grid", row, col, height, width)
        }
        InvalidDimensions(height: usize, width: usize) {
            description("invalid grid dimensions")
            display("cannot build a {}x{} grid, both dimensions must be positive", height, width)
        }
        ImageTooLarge(height: usize, width: usize, cell_pixels: u32) {
            description("maze image too large")
            display("a {}x{} grid at {} pixels per cell does not fit in an image", height, width, cell_pixels)
        }
        InvalidStart(row: usize, col: usize) {
            description("invalid generation start cell")
            display("start cell (row {}, column {}) is not inside the grid", row, col)
        }
    }
}
