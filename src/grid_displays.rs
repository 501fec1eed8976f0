use itertools::Itertools;
use std::fmt;

use crate::cells::{CellState, GridCoordinate};
use crate::game::MazeRound;
use crate::grid::MazeGrid;

const WALL_BODY: &str = "██";
const OPEN_BODY: &str = "  ";

pub trait GridDisplay {
    /// Render the contents of an open grid cell as text.
    /// The String should be 2 glyphs wide, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from(OPEN_BODY)
    }
}

/// Text view of a grid: one line per row, walls as solid blocks, open cells drawn by an
/// optional overlay.
pub struct GridText<'a> {
    grid: &'a MazeGrid,
    overlay: Option<&'a dyn GridDisplay>,
}

impl<'a> GridText<'a> {
    pub fn new(grid: &'a MazeGrid, overlay: Option<&'a dyn GridDisplay>) -> GridText<'a> {
        GridText {
            grid: grid,
            overlay: overlay,
        }
    }

    fn render_cell(&self, coord: GridCoordinate) -> String {
        match self.grid.state_at(coord) {
            Some(CellState::Open) => {
                self.overlay
                    .map(|overlay| overlay.render_cell_body(coord))
                    .unwrap_or_else(|| String::from(OPEN_BODY))
            }
            _ => String::from(WALL_BODY),
        }
    }
}

impl<'a> fmt::Display for GridText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.grid
            .iter_row()
            .map(|row| row.into_iter().map(|coord| self.render_cell(coord)).join(""))
            .join("\n");
        writeln!(f, "{}", text)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&GridText::new(self, None), f)
    }
}

/// Marks the cursor and the finish cell of a round.
#[derive(Debug)]
pub struct RoundDisplay {
    cursor: GridCoordinate,
    finish: GridCoordinate,
}

impl RoundDisplay {
    pub fn new(round: &MazeRound) -> RoundDisplay {
        RoundDisplay {
            cursor: round.cursor(),
            finish: round.finish(),
        }
    }
}

impl GridDisplay for RoundDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.cursor {
            String::from("()")
        } else if coord == self.finish {
            String::from("[]")
        } else {
            String::from(OPEN_BODY)
        }
    }
}

impl fmt::Display for MazeRound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let overlay = RoundDisplay::new(self);
        fmt::Display::fmt(&GridText::new(self.maze(), Some(&overlay)), f)
    }
}
