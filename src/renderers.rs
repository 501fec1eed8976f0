use error_chain::bail;
use image::{Rgb, RgbImage};
use log::info;
use std::convert::TryFrom;
use std::path::Path;

use crate::cells::{CellState, GridCoordinate};
use crate::errors::*;
use crate::game::MazeRound;
use crate::units::{CellPixels, Height, Width};

pub const REQUESTED_CELL_PIXELS: u32 = 30;
pub const MIN_CELL_PIXELS: u32 = 10;
pub const MAX_CELL_PIXELS: u32 = 100;

const WALL_COLOUR: Rgb<u8> = Rgb([40, 40, 48]);
const OPEN_COLOUR: Rgb<u8> = Rgb([236, 236, 228]);
const FINISH_COLOUR: Rgb<u8> = Rgb([64, 176, 72]);
const CURSOR_COLOUR: Rgb<u8> = Rgb([210, 60, 50]);

/// How much drawable space there is, in pixels, and how thick the frame around the maze is.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub border: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, border: u32) -> Viewport {
        Viewport {
            width: width,
            height: height,
            border: border,
        }
    }

    #[inline]
    fn inner(&self) -> (u32, u32) {
        (self.width.saturating_sub(2 * self.border),
         self.height.saturating_sub(2 * self.border))
    }

    /// Grid dimensions that fit the viewport with 30 pixel cells, at least 1x1.
    ///
    /// These are requested dimensions; the grid itself may round them up to odd numbers.
    pub fn desired_grid_size(&self) -> (Height, Width) {
        let (inner_w, inner_h) = self.inner();
        let rows = (inner_h / REQUESTED_CELL_PIXELS).max(1);
        let cols = (inner_w / REQUESTED_CELL_PIXELS).max(1);
        (Height(rows as usize), Width(cols as usize))
    }

    /// Largest whole cell size that fits `rows` x `cols` cells, clamped to 10..=100 pixels.
    pub fn cell_size(&self, rows: Height, cols: Width) -> CellPixels {
        let (inner_w, inner_h) = self.inner();
        let fit_h = inner_h as f64 / rows.0.max(1) as f64;
        let fit_w = inner_w as f64 / cols.0.max(1) as f64;
        let fitted = fit_h.min(fit_w)
            .min(MAX_CELL_PIXELS as f64)
            .max(MIN_CELL_PIXELS as f64);
        CellPixels(fitted.floor() as u32)
    }
}

/// Draw a round: one `cell_pixels` square per grid cell, the finish highlighted and the cursor
/// as an inset square.
///
/// Fails with `ImageTooLarge` when either image side does not fit in a `u32`.
pub fn render_round(round: &MazeRound, cell_pixels: CellPixels) -> Result<RgbImage> {
    let maze = round.maze();
    let side = cell_pixels.0.max(1);
    let (Height(rows), Width(cols)) = (maze.height(), maze.width());
    let image_side = |cells: usize| u32::try_from(cells).ok().and_then(|n| n.checked_mul(side));
    let (img_w, img_h) = match (image_side(cols), image_side(rows)) {
        (Some(w), Some(h)) => (w, h),
        _ => bail!(ErrorKind::ImageTooLarge(rows, cols, cell_pixels.0)),
    };
    let inset = side / 4;
    let finish = round.finish();
    let cursor = round.cursor();

    Ok(RgbImage::from_fn(img_w, img_h, |x, y| {
        let coord = GridCoordinate::new((y / side) as usize, (x / side) as usize);
        let (dx, dy) = (x % side, y % side);
        let in_token = dx >= inset && dx < side - inset && dy >= inset && dy < side - inset;

        if coord == cursor && in_token {
            CURSOR_COLOUR
        } else if coord == finish {
            FINISH_COLOUR
        } else {
            match maze.state_at(coord) {
                Some(CellState::Open) => OPEN_COLOUR,
                _ => WALL_COLOUR,
            }
        }
    }))
}

/// Render a round and write it as a PNG file.
pub fn save_round_png(round: &MazeRound, cell_pixels: CellPixels, path: &Path) -> Result<()> {
    let img = render_round(round, cell_pixels)?;
    img.save(path)
        .chain_err(|| format!("Failed to write maze image to {}", path.display()))?;
    info!("maze image written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MazeGrid;
    use image::GenericImageView;
    use rand::SeedableRng;

    fn round() -> MazeRound {
        let mut g = MazeGrid::new(Height(3), Width(3)).unwrap();
        g.set_open(0, 0).unwrap();
        g.set_open(0, 1).unwrap();
        MazeRound::new(g, GridCoordinate::new(0, 0)).unwrap()
    }

    #[test]
    fn desired_size_uses_thirty_pixel_cells() {
        let viewport = Viewport::new(640, 480, 10);
        assert_eq!(viewport.desired_grid_size(), (Height(15), Width(20)));
    }

    #[test]
    fn tiny_viewport_still_gets_a_cell() {
        let viewport = Viewport::new(12, 12, 10);
        assert_eq!(viewport.desired_grid_size(), (Height(1), Width(1)));
    }

    #[test]
    fn cell_size_fits_the_tighter_axis() {
        let viewport = Viewport::new(640, 480, 10);
        // 460 / 15 = 30.6, 620 / 21 = 29.5
        assert_eq!(viewport.cell_size(Height(15), Width(21)), CellPixels(29));
    }

    #[test]
    fn cell_size_is_clamped() {
        let viewport = Viewport::new(2000, 2000, 0);
        assert_eq!(viewport.cell_size(Height(3), Width(3)), CellPixels(MAX_CELL_PIXELS));
        let viewport = Viewport::new(100, 100, 0);
        assert_eq!(viewport.cell_size(Height(99), Width(99)), CellPixels(MIN_CELL_PIXELS));
    }

    #[test]
    fn rendered_pixels() {
        let img = render_round(&round(), CellPixels(8)).unwrap();
        assert_eq!(img.dimensions(), (24, 24));
        // cursor centre, cursor corner (open), wall, finish
        assert_eq!(*img.get_pixel(4, 4), CURSOR_COLOUR);
        assert_eq!(*img.get_pixel(0, 0), OPEN_COLOUR);
        assert_eq!(*img.get_pixel(12, 12), WALL_COLOUR);
        assert_eq!(*img.get_pixel(12, 4), OPEN_COLOUR);
        assert_eq!(*img.get_pixel(20, 20), FINISH_COLOUR);
    }

    #[test]
    fn oversized_cells_are_an_error() {
        let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(21);
        let big = MazeRound::generate(Height(21), Width(21), GridCoordinate::new(0, 0), &mut rng).unwrap();
        let err = render_round(&big, CellPixels(u32::MAX / 10)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ImageTooLarge(21, 21, px) if *px == u32::MAX / 10));

        let path = std::env::temp_dir().join(format!("prim_mazes_oversized_{}.png", std::process::id()));
        let err = save_round_png(&big, CellPixels(u32::MAX), &path).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ImageTooLarge(..)));
        assert!(!path.exists());
    }

    #[test]
    fn image_side_overflow_reports_grid_size() {
        let err = render_round(&round(), CellPixels(u32::MAX / 2)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ImageTooLarge(3, 3, _)));
    }

    #[test]
    fn saves_png() {
        let path = std::env::temp_dir().join(format!("prim_mazes_render_{}.png", std::process::id()));
        save_round_png(&round(), CellPixels(4), &path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.dimensions(), (12, 12));
        let _ = std::fs::remove_file(&path);
    }
}
