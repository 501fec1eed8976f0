use std::fmt;

use crate::cells::GridCoordinate;
use crate::grid_dimensions::MazeDimensions;
use crate::units::{ColumnIndex, RowIndex};

/// Visits every coordinate of a grid in row major order.
#[derive(Clone)]
pub struct CellIter {
    dimensions: MazeDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(dimensions: MazeDimensions) -> CellIter {
        CellIter {
            dimensions: dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size(),
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             &self.dimensions);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Yields one `Vec` of coordinates per grid row, top to bottom.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    rows_count: usize,
    row_length: usize,
}

impl RowIter {
    pub fn new(dimensions: MazeDimensions) -> RowIter {
        RowIter {
            current_row: 0,
            rows_count: dimensions.height().0,
            row_length: dimensions.width().0,
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.rows_count {
            let row = self.current_row;
            let coords = (0..self.row_length)
                .map(|i: usize| GridCoordinate::from_row_column_indices(RowIndex(row), ColumnIndex(i)))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows_count - self.current_row;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Height, Width};

    fn dims(h: usize, w: usize) -> MazeDimensions {
        MazeDimensions::new(Height(h), Width(w)).unwrap()
    }

    #[test]
    fn cell_iter_is_row_major() {
        let gc = |r, c| GridCoordinate::new(r, c);
        let coords = CellIter::new(dims(1, 3)).collect::<Vec<_>>();
        assert_eq!(coords, &[gc(0, 0), gc(0, 1), gc(0, 2)]);

        let mut iter = CellIter::new(dims(3, 3));
        assert_eq!(iter.len(), 9);
        let _ = iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.last(), Some(gc(2, 2)));
    }

    #[test]
    fn row_iter() {
        let gc = |r, c| GridCoordinate::new(r, c);
        let rows = RowIter::new(dims(3, 1)).collect::<Vec<_>>();
        assert_eq!(rows, vec![vec![gc(0, 0)], vec![gc(1, 0)], vec![gc(2, 0)]]);
        assert_eq!(RowIter::new(dims(5, 7)).len(), 5);
        assert!(RowIter::new(dims(5, 7)).all(|row| row.len() == 7));
    }
}
