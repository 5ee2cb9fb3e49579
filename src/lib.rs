use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub mod builder;
pub mod grid;
pub mod logging;
pub mod raw;
pub mod render;
pub mod session;
pub mod solver;
pub mod validate;

pub use builder::build_maze;
pub use grid::{Cell, CellKind, Direction, Grid, Position, Visit};
pub use raw::{read_raw_grid, RawGrid, RawSymbol};
pub use session::{solve_maze, MazeSession, SolveReport};
pub use solver::{PathReport, StepEvent, StepObserver};
pub use validate::validate;

pub const MAZE_SIZE_MIN: usize = 5;
pub const MAZE_SIZE_MAX: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeOutOfRange { width: usize, height: usize },
    StartOutOfBounds(Position),
    StartBlocked(Position),
    StartIsDestination(Position),
    BuildFailed(String),
    NoSolution(Position),
    ReconstructionFailed(Position),
    NoDimensionLine,
    InvalidDimensionLine(String),
    InvalidCharForMaze(char),
    InconsistentRow(usize, usize, usize), // (row index, expected symbol count, given symbol count)
    TooManyRows(usize),
    TooFewRows(usize, usize), // (expected row count, given row count)
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SizeOutOfRange { width, height } => write!(
                f,
                "The dimension [{} | {}] is out of range, expect both sides between {} and {}.",
                width, height, MAZE_SIZE_MIN, MAZE_SIZE_MAX
            ),
            Error::StartOutOfBounds(pos) => {
                write!(f, "Start position {} is outside of the maze.", pos)
            }
            Error::StartBlocked(pos) => {
                write!(f, "Start position {} can not be inside a wall.", pos)
            }
            Error::StartIsDestination(pos) => {
                write!(f, "Start position {} can not be the maze destination.", pos)
            }
            Error::BuildFailed(reason) => {
                write!(f, "Failed to build the maze content: {}.", reason)
            }
            Error::NoSolution(pos) => write!(f, "Maze has no solution, got stuck at {}.", pos),
            Error::ReconstructionFailed(pos) => write!(
                f,
                "Failed to calculate the way back to the start, got stuck at {}.",
                pos
            ),
            Error::NoDimensionLine => write!(f, "No dimension line at the top of the maze."),
            Error::InvalidDimensionLine(line) => write!(
                f,
                "Invalid dimension line({}), expect two integers like \"10 12\".",
                line
            ),
            Error::InvalidCharForMaze(c) => write!(f, "Invalid character({}) for maze.", c),
            Error::InconsistentRow(row, expect_n, given_n) => write!(
                f,
                "Expect {} symbol(s) in row {}, given {}.",
                expect_n, row, given_n
            ),
            Error::TooManyRows(expect_n) => {
                write!(f, "Expect only {} row(s) in maze, given more.", expect_n)
            }
            Error::TooFewRows(expect_n, given_n) => write!(
                f,
                "Expect {} row(s) in maze, given {}.",
                expect_n, given_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
#[command(about = "Solve a grid maze with Trémaux's algorithm and walk the shortest way back")]
pub struct CLIArgs {
    /// Maze file, dimension line first and then rows of 0 (corridor), 1 (wall) and X (destination).
    #[arg(default_value = "spielfeldtest.txt")]
    pub input_path: PathBuf,
    #[arg(long, default_value_t = 1)]
    pub start_x: usize,
    #[arg(long, default_value_t = 1)]
    pub start_y: usize,
    /// Delay between two animated steps, in milliseconds.
    #[arg(long, default_value_t = 50)]
    pub speed: u64,
    /// Draw every step in the terminal instead of printing the result only.
    #[arg(long)]
    pub animate: bool,
}

impl CLIArgs {
    pub fn start_position(&self) -> Position {
        Position::new(self.start_x, self.start_y)
    }
}
