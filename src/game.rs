//! Round state for playing a generated maze: a cursor that walks open cells from the start
//! towards the bottom right finish cell.

use error_chain::bail;
use log::{debug, info};
use rand::Rng;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::generators;
use crate::grid::MazeGrid;
use crate::units::{Height, Width};


/// Which way the cursor token points.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Facing {
    Right,
    Down,
    Left,
    Up,
}

impl Facing {
    /// Clockwise screen rotation for the facing, in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Facing::Right => 0,
            Facing::Down => 90,
            Facing::Left => 180,
            Facing::Up => 270,
        }
    }

    pub fn from_direction(dir: CompassPrimary) -> Facing {
        match dir {
            CompassPrimary::North => Facing::Up,
            CompassPrimary::South => Facing::Down,
            CompassPrimary::East => Facing::Right,
            CompassPrimary::West => Facing::Left,
        }
    }
}

/// A movement key. Arrow keys in an interactive front end, letters in scripted play.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// `U D L R` in either case. Anything else is not a movement key.
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_lowercase() {
            'u' => Some(Key::Up),
            'd' => Some(Key::Down),
            'l' => Some(Key::Left),
            'r' => Some(Key::Right),
            _ => None,
        }
    }

    pub fn direction(self) -> CompassPrimary {
        match self {
            Key::Up => CompassPrimary::North,
            Key::Down => CompassPrimary::South,
            Key::Left => CompassPrimary::West,
            Key::Right => CompassPrimary::East,
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveOutcome {
    /// The target is off the grid. Nothing changes.
    OutOfBounds,
    /// The target is a wall. The cursor turns to face it but stays put.
    Blocked,
    Moved(GridCoordinate),
    /// Moved onto the finish cell.
    Finished(GridCoordinate),
}

/// One play through of a maze.
#[derive(Debug, Clone)]
pub struct MazeRound {
    maze: MazeGrid,
    start: GridCoordinate,
    cursor: GridCoordinate,
    finish: GridCoordinate,
    facing: Facing,
    rotation: i32,
}

impl MazeRound {
    /// Start a round on `maze` with the cursor at `start`.
    ///
    /// The finish is the bottom right cell and is forced open so it can always be entered from
    /// an open neighbour.
    pub fn new(mut maze: MazeGrid, start: GridCoordinate) -> Result<MazeRound> {
        if !maze.is_valid_coordinate(start) {
            bail!(ErrorKind::InvalidStart(start.row, start.col));
        }
        let finish = GridCoordinate::new(maze.height().0 - 1, maze.width().0 - 1);
        maze.set_open(finish.row, finish.col)?;

        Ok(MazeRound {
            maze: maze,
            start: start,
            cursor: start,
            finish: finish,
            facing: Facing::Right,
            rotation: Facing::Right.degrees(),
        })
    }

    /// Generate a fresh maze and start a round on it.
    pub fn generate<R>(height: Height, width: Width, start: GridCoordinate, rng: &mut R) -> Result<MazeRound>
        where R: Rng + ?Sized
    {
        let maze = generators::generate_with_rng(height, width, Some(start), rng)?;
        MazeRound::new(maze, start)
    }

    #[inline]
    pub fn maze(&self) -> &MazeGrid {
        &self.maze
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    #[inline]
    pub fn cursor(&self) -> GridCoordinate {
        self.cursor
    }

    #[inline]
    pub fn finish(&self) -> GridCoordinate {
        self.finish
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Accumulated rotation of the cursor token in degrees. Can go negative.
    #[inline]
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.finish
    }

    /// Try to move the cursor one cell.
    ///
    /// The position is committed first, then the finish is checked against the new position.
    pub fn step(&mut self, dir: CompassPrimary) -> MoveOutcome {
        let target = match self.cursor.offset(dir) {
            Some(coord) if self.maze.is_valid_coordinate(coord) => coord,
            _ => return MoveOutcome::OutOfBounds,
        };

        self.turn_towards(Facing::from_direction(dir));

        if !self.maze.is_open_at(target) {
            return MoveOutcome::Blocked;
        }

        self.cursor = target;
        if self.is_complete() {
            info!("finish {} reached", target);
            MoveOutcome::Finished(target)
        } else {
            MoveOutcome::Moved(target)
        }
    }

    pub fn press(&mut self, key: Key) -> MoveOutcome {
        self.step(key.direction())
    }

    /// Play a string of key characters, skipping anything that is not a movement key.
    pub fn replay(&mut self, keys: &str) -> Vec<MoveOutcome> {
        keys.chars()
            .filter_map(Key::from_char)
            .map(|key| self.press(key))
            .collect()
    }

    // Turning past 180 degrees goes the other way round instead.
    fn turn_towards(&mut self, facing: Facing) {
        let mut rotation = facing.degrees();
        if rotation == self.rotation {
            return;
        }
        if rotation - self.rotation > 180 {
            rotation -= 360;
        }
        debug!("turning from {} to {} degrees", self.rotation, rotation);
        self.facing = facing;
        self.rotation = rotation;
    }
}
