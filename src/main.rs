use docopt::Docopt;
use log::info;
use prim_mazes::{
    cells::GridCoordinate,
    game::{MazeRound, MoveOutcome},
    renderers::{self, Viewport},
    units::{CellPixels, Height, Width},
};
use rand::{SeedableRng, thread_rng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io::prelude::*,
    path::Path,
};

const USAGE: &str = "Prim's mazes

Usage:
    maze_driver -h | --help
    maze_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--start-row=<r> --start-col=<c>] [--seed=<s>]
    maze_driver text [--text-out=<path>] [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--start-row=<r> --start-col=<c>] [--seed=<s>]
    maze_driver image --image-out=<path> [--cell-pixels=<n> | --viewport-width=<vw> --viewport-height=<vh>] [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--start-row=<r> --start-col=<c>] [--seed=<s>]
    maze_driver play --moves=<keys> [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--start-row=<r> --start-col=<c>] [--seed=<s>]

Options:
    -h --help                 Show this screen.
    --grid-size=<n>           The grid size is n * n.
    --grid-width=<w>          The grid width in a w*h grid, even values are bumped to odd [default: 21].
    --grid-height=<h>         The grid height in a w*h grid, even values are bumped to odd [default: 21].
    --start-row=<r>           Row of the cell generation starts from and the player starts on [default: 0].
    --start-col=<c>           Column of the cell generation starts from and the player starts on [default: 0].
    --seed=<s>                Seed for a reproducible maze. Random when not given.
    --text-out=<path>         Output file path for a textual rendering of the maze.
    --image-out=<path>        Output file path for an image rendering of the maze. Always PNG format.
    --cell-pixels=<n>         Pixel count for one grid cell in the image [default: 20].
    --viewport-width=<vw>     Size the grid and its cells to fit a viewport this many pixels wide.
    --viewport-height=<vh>    Size the grid and its cells to fit a viewport this many pixels high.
    --moves=<keys>            Keys to play from the start, any of U D L R. Other characters are ignored.
";

/// Frame around the maze when sizing it to a viewport.
const VIEWPORT_BORDER_PIXELS: u32 = 10;

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_start_row: usize,
    flag_start_col: usize,
    flag_seed: Option<u64>,
    cmd_text: bool,
    flag_text_out: String,
    cmd_image: bool,
    flag_image_out: String,
    flag_cell_pixels: u32,
    flag_viewport_width: Option<u32>,
    flag_viewport_height: Option<u32>,
    cmd_play: bool,
    flag_moves: String,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::prim_mazes::errors::Error, ::prim_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    let viewport = args.viewport();
    let round = build_round(&args)?;
    info!("generated {:?}", round.maze());

    if args.cmd_image {
        let cell_pixels = match viewport {
            Some(vp) => vp.cell_size(round.maze().height(), round.maze().width()),
            None => CellPixels(args.flag_cell_pixels),
        };
        renderers::save_round_png(&round, cell_pixels, Path::new(&args.flag_image_out))?;
    } else if args.cmd_play {
        play(round, &args.flag_moves);
    } else if args.cmd_text && !args.flag_text_out.is_empty() {
        write_text_to_file(&round.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("maze text written to {}", args.flag_text_out);
    } else {
        println!("{}", round);
    }

    Ok(())
}

impl MazeArgs {
    fn viewport(&self) -> Option<Viewport> {
        match (self.flag_viewport_width, self.flag_viewport_height) {
            (Some(w), Some(h)) => Some(Viewport::new(w, h, VIEWPORT_BORDER_PIXELS)),
            _ => None,
        }
    }

    /// Requested grid size. An explicit square size wins over a viewport fit.
    fn grid_size(&self) -> (Height, Width) {
        if let Some(square_grid_size) = self.flag_grid_size {
            (Height(square_grid_size), Width(square_grid_size))
        } else if let Some(vp) = self.viewport() {
            vp.desired_grid_size()
        } else {
            (Height(self.flag_grid_height), Width(self.flag_grid_width))
        }
    }

    fn start(&self) -> GridCoordinate {
        GridCoordinate::new(self.flag_start_row, self.flag_start_col)
    }
}

fn build_round(args: &MazeArgs) -> Result<MazeRound> {
    let (height, width) = args.grid_size();
    let start = args.start();
    let round = match args.flag_seed {
        Some(seed) => MazeRound::generate(height, width, start, &mut XorShiftRng::seed_from_u64(seed))?,
        None => MazeRound::generate(height, width, start, &mut thread_rng())?,
    };
    Ok(round)
}

fn play(mut round: MazeRound, moves: &str) {
    let outcomes = round.replay(moves);
    let blocked = outcomes.iter()
        .filter(|outcome| matches!(outcome, MoveOutcome::Blocked | MoveOutcome::OutOfBounds))
        .count();

    println!("{}", round);
    println!("{} moves, {} blocked, cursor at {}", outcomes.len(), blocked, round.cursor());
    if round.is_complete() {
        println!("Maze complete!");
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> std::io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
