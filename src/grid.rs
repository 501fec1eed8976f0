use std::fmt;

use crate::cells::{CellState, GridCoordinate};
use crate::errors::*;
use crate::grid_dimensions::MazeDimensions;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{CarvesCount, Height, Width};


/// A rectangular grid of wall and open cells.
///
/// Built all walls; the generators carve it open and afterwards it is only read, apart from
/// callers forcing individual cells open with `set_open`.
#[derive(Clone, Eq, PartialEq)]
pub struct MazeGrid {
    cells: Vec<CellState>,
    dimensions: MazeDimensions,
    carves: CarvesCount,
}

impl fmt::Debug for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MazeGrid :: height: {:?}, width: {:?}, open: {:?}, carves: {:?}",
               self.height(), self.width(), self.open_cells_count(), self.carves)
    }
}

impl MazeGrid {
    /// Allocate a `height` x `width` grid of walls. Even dimensions are bumped to the next odd value.
    pub fn new(height: Height, width: Width) -> Result<MazeGrid> {
        let dimensions = MazeDimensions::new(height, width)?;
        Ok(MazeGrid::with_dimensions(dimensions))
    }

    pub fn with_dimensions(dimensions: MazeDimensions) -> MazeGrid {
        MazeGrid {
            cells: vec![CellState::Wall; dimensions.size()],
            dimensions: dimensions,
            carves: CarvesCount::default(),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size()
    }

    #[inline]
    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        self.dimensions.contains(row, col)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.is_in_bounds(coord.row, coord.col)
    }

    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState> {
        let index = self.index_of(row, col)?;
        Ok(self.cells[index])
    }

    pub fn is_wall(&self, row: usize, col: usize) -> Result<bool> {
        self.cell_state(row, col).map(|state| state == CellState::Wall)
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.cell_state(row, col).map(|state| state == CellState::Open)
    }

    /// Carve a single cell open. Opening an open cell does nothing.
    pub fn set_open(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.index_of(row, col)?;
        self.cells[index] = CellState::Open;
        Ok(())
    }

    /// Coordinate flavoured state lookup, None when out of bounds.
    #[inline]
    pub fn state_at(&self, coord: GridCoordinate) -> Option<CellState> {
        self.dimensions
            .row_major_index(coord.row, coord.col)
            .map(|index| self.cells[index])
    }

    #[inline]
    pub fn is_open_at(&self, coord: GridCoordinate) -> bool {
        self.state_at(coord) == Some(CellState::Open)
    }

    #[inline]
    pub fn is_wall_at(&self, coord: GridCoordinate) -> bool {
        self.state_at(coord) == Some(CellState::Wall)
    }

    /// Number of wall removal steps the generator performed on this grid.
    #[inline]
    pub fn carves_count(&self) -> CarvesCount {
        self.carves
    }

    pub fn open_cells_count(&self) -> usize {
        self.cells.iter().filter(|&&state| state == CellState::Open).count()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.dimensions)
    }

    /// In bounds neighbours of a coordinate that are still walls.
    pub fn wall_neighbours(&self, coord: GridCoordinate) -> impl Iterator<Item = GridCoordinate> + '_ {
        coord.neighbours()
             .into_iter()
             .filter(move |neighbour| self.is_wall_at(*neighbour))
    }

    /// Put every cell back to a wall and forget previous carving.
    pub(crate) fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = CellState::Wall;
        }
        self.carves = CarvesCount::default();
    }

    /// Open a cell the generator has already bounds checked.
    pub(crate) fn carve(&mut self, coord: GridCoordinate) {
        if let Some(index) = self.dimensions.row_major_index(coord.row, coord.col) {
            self.cells[index] = CellState::Open;
        }
    }

    pub(crate) fn record_carve(&mut self) {
        self.carves.0 += 1;
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        self.dimensions
            .row_major_index(row, col)
            .ok_or_else(|| ErrorKind::OutOfBounds(row, col, self.height().0, self.width().0).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(h: usize, w: usize) -> MazeGrid {
        MazeGrid::new(Height(h), Width(w)).expect("valid dimensions")
    }

    fn is_out_of_bounds<T: fmt::Debug>(result: Result<T>) -> bool {
        match result {
            Err(e) => matches!(e.kind(), ErrorKind::OutOfBounds(..)),
            Ok(_) => false,
        }
    }

    #[test]
    fn new_grid_is_all_walls() {
        let g = grid(5, 5);
        assert_eq!(g.size(), 25);
        assert_eq!(g.open_cells_count(), 0);
        assert!(g.iter().all(|c| g.is_wall(c.row, c.col).unwrap()));
        assert_eq!(g.carves_count(), CarvesCount(0));
    }

    #[test]
    fn even_dimensions_are_normalised() {
        let g = grid(4, 6);
        assert_eq!(g.height(), Height(5));
        assert_eq!(g.width(), Width(7));
    }

    #[test]
    fn invalid_dimensions() {
        assert!(MazeGrid::new(Height(0), Width(3)).is_err());
    }

    #[test]
    fn bounds() {
        let g = grid(3, 5);
        assert!(g.is_in_bounds(0, 0));
        assert!(g.is_in_bounds(2, 4));
        assert!(!g.is_in_bounds(3, 0));
        assert!(!g.is_in_bounds(0, 5));
        assert!(!g.is_in_bounds(usize::MAX, usize::MAX));
    }

    #[test]
    fn out_of_bounds_queries_are_errors() {
        let mut g = grid(3, 3);
        assert!(is_out_of_bounds(g.is_wall(3, 0)));
        assert!(is_out_of_bounds(g.is_open(0, 3)));
        assert!(is_out_of_bounds(g.cell_state(10, 10)));
        assert!(is_out_of_bounds(g.set_open(3, 3)));
        assert_eq!(g.open_cells_count(), 0);
        assert_eq!(g.state_at(GridCoordinate::new(3, 3)), None);
    }

    #[test]
    fn set_open_only_touches_one_cell() {
        let mut g = grid(3, 3);
        g.set_open(2, 2).unwrap();
        assert!(g.is_open(2, 2).unwrap());
        assert!(!g.is_wall(2, 2).unwrap());
        assert_eq!(g.open_cells_count(), 1);

        // idempotent
        g.set_open(2, 2).unwrap();
        assert_eq!(g.open_cells_count(), 1);
    }

    #[test]
    fn wall_neighbours_skip_open_and_off_grid_cells() {
        let mut g = grid(3, 3);
        g.set_open(0, 1).unwrap();
        let walls = g.wall_neighbours(GridCoordinate::new(0, 0)).collect::<Vec<_>>();
        assert_eq!(walls, vec![GridCoordinate::new(1, 0)]);

        let corner = g.wall_neighbours(GridCoordinate::new(2, 2)).count();
        assert_eq!(corner, 2);
    }

    #[test]
    fn reset_restores_walls() {
        let mut g = grid(3, 3);
        g.carve(GridCoordinate::new(1, 1));
        g.record_carve();
        g.reset();
        assert_eq!(g.open_cells_count(), 0);
        assert_eq!(g.carves_count(), CarvesCount(0));
    }
}
