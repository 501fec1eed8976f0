use error_chain::bail;
use log::{debug, trace};
use rand::Rng;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::units::{Height, Width};


/// A wall cell that may be carved, tagged with the open cell that proposed it.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct FrontierWall {
    pub wall: GridCoordinate,
    pub host: GridCoordinate,
}

impl FrontierWall {
    /// The cell on the far side of the wall, in line with the host.
    #[inline]
    pub fn opposite(&self) -> Option<GridCoordinate> {
        self.wall.reflect_through(self.host)
    }
}

/// Unordered bag of candidate walls.
///
/// The same wall can be proposed by two hosts and appears twice; both entries stay and are
/// resolved when drawn, which weights the wall's selection accordingly.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    walls: Vec<FrontierWall>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier { walls: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    #[inline]
    pub fn push(&mut self, wall: FrontierWall) {
        self.walls.push(wall);
    }

    /// Remove an entry chosen uniformly from the current contents, duplicates included.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<FrontierWall> {
        if self.walls.is_empty() {
            None
        } else {
            let index = rng.gen_range(0..self.walls.len());
            Some(self.walls.swap_remove(index))
        }
    }

    /// Add every in bounds wall neighbour of `host` as a candidate.
    pub fn add_walls_around(&mut self, grid: &MazeGrid, host: GridCoordinate) {
        for wall in grid.wall_neighbours(host) {
            self.walls.push(FrontierWall { wall: wall, host: host });
        }
    }
}

/// Counters describing one generation run.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct GenerationStats {
    pub carves: usize,
    pub discarded: usize,
    pub peak_frontier: usize,
}

/// Randomized Prim's maze generation over the wall/open grid.
///
/// Starting from `start`, repeatedly draw a random frontier wall. If the cell on the far side
/// of the wall (reflected through its host) is in the grid and still a wall, carve both the
/// wall and the far cell open and add the far cell's walls to the frontier. Otherwise the
/// wall would either breach the boundary or join two connected regions, so it is dropped.
///
/// Every open cell ends up reachable from `start` by exactly one path.
pub fn prims<R>(grid: &mut MazeGrid, start: GridCoordinate, rng: &mut R) -> Result<GenerationStats>
    where R: Rng + ?Sized
{
    if !grid.is_valid_coordinate(start) {
        bail!(ErrorKind::InvalidStart(start.row, start.col));
    }

    debug!("prims generation on {}x{} grid from {}", grid.height().0, grid.width().0, start);

    grid.reset();
    let mut stats = GenerationStats::default();
    let mut frontier = Frontier::new();

    grid.carve(start);
    frontier.add_walls_around(grid, start);
    stats.peak_frontier = frontier.len();

    while let Some(candidate) = frontier.take_random(rng) {
        let opposite = match candidate.opposite() {
            Some(coord) if grid.is_valid_coordinate(coord) => coord,
            _ => {
                stats.discarded += 1;
                continue;
            }
        };

        if grid.is_open_at(opposite) {
            stats.discarded += 1;
            continue;
        }

        trace!("carving {} through to {}", candidate.wall, opposite);

        // The wall is only a connector, it does not grow the frontier.
        grid.carve(candidate.wall);
        grid.carve(opposite);
        grid.record_carve();
        stats.carves += 1;

        frontier.add_walls_around(grid, opposite);
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    debug!("prims generation done: {:?}", stats);
    Ok(stats)
}

/// Build and carve a new maze with the thread local random number generator.
pub fn generate(height: Height, width: Width, start: Option<GridCoordinate>) -> Result<MazeGrid> {
    generate_with_rng(height, width, start, &mut rand::thread_rng())
}

/// Build and carve a new maze with the given random source. `start` defaults to the top left cell.
pub fn generate_with_rng<R>(height: Height,
                            width: Width,
                            start: Option<GridCoordinate>,
                            rng: &mut R)
                            -> Result<MazeGrid>
    where R: Rng + ?Sized
{
    let mut grid = MazeGrid::new(height, width)?;
    let start = start.unwrap_or_else(|| GridCoordinate::new(0, 0));
    prims(&mut grid, start, rng)?;
    Ok(grid)
}
