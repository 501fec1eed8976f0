use error_chain::bail;

use crate::errors::*;
use crate::units::{Height, Width};


/// Height and width of a maze grid, always odd.
///
/// Carving only reaches every boundary row and column when both dimensions are odd, so even
/// requests are bumped up by one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeDimensions {
    height: Height,
    width: Width,
}

impl MazeDimensions {
    pub fn new(height: Height, width: Width) -> Result<MazeDimensions> {
        let (Height(h), Width(w)) = (height, width);
        if h == 0 || w == 0 {
            bail!(ErrorKind::InvalidDimensions(h, w));
        }

        let odd_h = make_odd(h).ok_or_else(|| ErrorKind::InvalidDimensions(h, w))?;
        let odd_w = make_odd(w).ok_or_else(|| ErrorKind::InvalidDimensions(h, w))?;
        if odd_h.checked_mul(odd_w).is_none() {
            bail!(ErrorKind::InvalidDimensions(h, w));
        }

        Ok(MazeDimensions {
            height: Height(odd_h),
            width: Width(odd_w),
        })
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    /// Total number of cells.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.height.0 * self.width.0
    }

    #[inline(always)]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height.0 && col < self.width.0
    }

    /// Row major index of an in bounds cell.
    #[inline]
    pub fn row_major_index(&self, row: usize, col: usize) -> Option<usize> {
        if self.contains(row, col) {
            Some(row * self.width.0 + col)
        } else {
            None
        }
    }

    /// Upper bound on the number of "room" cells: the ones at even offsets from an even start.
    pub fn rooms_count(&self) -> usize {
        (self.height.0 / 2 + 1) * (self.width.0 / 2 + 1)
    }
}

#[inline]
fn make_odd(n: usize) -> Option<usize> {
    if n % 2 == 0 {
        n.checked_add(1)
    } else {
        Some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn odd_dimensions_are_kept() {
        let d = MazeDimensions::new(Height(5), Width(7)).unwrap();
        assert_eq!(d.height(), Height(5));
        assert_eq!(d.width(), Width(7));
        assert_eq!(d.size(), 35);
    }

    #[test]
    fn even_dimensions_are_bumped() {
        let d = MazeDimensions::new(Height(4), Width(4)).unwrap();
        assert_eq!(d.height(), Height(5));
        assert_eq!(d.width(), Width(5));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for &(h, w) in &[(0, 5), (5, 0), (0, 0)] {
            let err = MazeDimensions::new(Height(h), Width(w)).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::InvalidDimensions(eh, ew) if *eh == h && *ew == w));
        }
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(MazeDimensions::new(Height(usize::MAX - 1), Width(3)).is_err());
        assert!(MazeDimensions::new(Height(usize::MAX / 2), Width(usize::MAX / 2)).is_err());
    }

    #[test]
    fn row_major_indices() {
        let d = MazeDimensions::new(Height(3), Width(3)).unwrap();
        let indices = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .map(|(r, c)| d.row_major_index(r, c))
            .collect::<Vec<_>>();
        assert_eq!(indices, (0..9).map(Some).collect::<Vec<_>>());
        assert_eq!(d.row_major_index(3, 0), None);
        assert_eq!(d.row_major_index(0, 3), None);
    }

    #[test]
    fn rooms_on_the_even_sublattice() {
        let d = MazeDimensions::new(Height(5), Width(7)).unwrap();
        assert_eq!(d.rooms_count(), 3 * 4);
    }

    #[test]
    fn normalisation_property() {
        fn prop(h: u8, w: u8) -> TestResult {
            if h == 0 || w == 0 {
                return TestResult::discard();
            }
            let (h, w) = (h as usize, w as usize);
            let d = MazeDimensions::new(Height(h), Width(w)).unwrap();
            let expected = |n: usize| if n % 2 == 0 { n + 1 } else { n };
            TestResult::from_bool(d.height().0 == expected(h) && d.width().0 == expected(w) &&
                                  d.height().0 % 2 == 1 && d.width().0 % 2 == 1)
        }
        quickcheck(prop as fn(u8, u8) -> TestResult);
    }
}
