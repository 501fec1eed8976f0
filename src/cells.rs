use smallvec::SmallVec;
use std::convert::From;
use std::fmt;

use crate::grid_dimensions::MazeDimensions;
use crate::units::{ColumnIndex, RowIndex};

/// A (row, column) position on a maze grid. Both indices are 0 based.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row: row, col: col }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, dimensions: &MazeDimensions) -> GridCoordinate {
        let width = dimensions.width().0;
        GridCoordinate::new(index / width, index % width)
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> Self {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, col_index);
        GridCoordinate::new(row, col)
    }

    /// The coordinate one cell away in the given direction.
    ///
    /// Returns None if stepping off the top or left edge, which is not representable.
    /// Stepping off the bottom or right edge gives a coordinate the grid will reject.
    pub fn offset(&self, dir: CompassPrimary) -> Option<GridCoordinate> {
        let (row, col) = (self.row, self.col);
        match dir {
            CompassPrimary::North => row.checked_sub(1).map(|r| GridCoordinate::new(r, col)),
            CompassPrimary::South => row.checked_add(1).map(|r| GridCoordinate::new(r, col)),
            CompassPrimary::East => col.checked_add(1).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::West => col.checked_sub(1).map(|c| GridCoordinate::new(row, c)),
        }
    }

    /// Reflect `self` through `host`: `host + (self - host) * 2`.
    ///
    /// This is the cell on the far side of a wall, in line with the host that proposed
    /// the wall. None when the reflection would have a negative index.
    pub fn reflect_through(&self, host: GridCoordinate) -> Option<GridCoordinate> {
        let row = self.row.checked_mul(2)?.checked_sub(host.row)?;
        let col = self.col.checked_mul(2)?.checked_sub(host.col)?;
        Some(GridCoordinate::new(row, col))
    }

    /// The four axis aligned neighbours that have non negative indices.
    pub fn neighbours(&self) -> SmallVec<[GridCoordinate; 4]> {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.offset(*dir))
            .collect()
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_col_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];
}

/// Every grid cell is either a wall or carved open. Carving only goes `Wall -> Open`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Wall,
    Open,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Wall
    }
}
