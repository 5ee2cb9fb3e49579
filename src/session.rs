use log::info;

use crate::{
    build_maze,
    solver::{reconstruct, solve_forward, PathReport, StepEvent, StepObserver},
    validate, Error, Grid, Position, RawGrid,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub forward: PathReport,
    pub backward: PathReport,
}

/// One solve of one maze. The session owns its grid, so marks never leak into another run.
#[derive(Debug)]
pub struct MazeSession {
    grid: Grid,
    start: Position,
    destination: Position,
}

impl MazeSession {
    pub fn new(raw: &RawGrid, start: Position) -> Result<Self, Error> {
        validate(raw, &start)?;
        let grid = build_maze(raw)?;
        let destination = grid
            .destination()
            .ok_or_else(|| Error::BuildFailed("no destination in maze".to_string()))?;

        Ok(Self {
            grid,
            start,
            destination,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn destination(&self) -> &Position {
        &self.destination
    }

    pub fn solve(&mut self, observer: &mut dyn StepObserver) -> Result<SolveReport, Error> {
        info!("Solving from {} towards {}.", self.start, self.destination);
        let forward = solve_forward(&mut self.grid, &self.start, observer)?;
        let backward = reconstruct(&self.grid, &self.start, &self.destination, observer)?;

        Ok(SolveReport { forward, backward })
    }
}

/// Validates, builds and solves `raw` without watching the steps.
pub fn solve_maze(raw: &RawGrid, start: Position) -> Result<SolveReport, Error> {
    MazeSession::new(raw, start)?.solve(&mut |_: &Position, _: StepEvent| {})
}
