use std::collections::HashSet;

use log::{info, trace, warn};

use crate::{CellKind, Direction, Error, Grid, Position};

use super::{PathReport, StepEvent, StepObserver};

/// Next step from `current` towards `start` over the marks left by the forward walk.
///
/// Junctions entered exactly once lie on the way back and are preferred, plain corridors come
/// second. `previous` is never taken.
pub fn next_step_back(
    grid: &Grid,
    current: Position,
    previous: Option<Position>,
    start: &Position,
) -> Result<Position, Error> {
    let candidates = Direction::priority()
        .iter()
        .filter_map(|dir| current.neighbor(*dir))
        .filter(|pos| Some(*pos) != previous)
        .collect::<Vec<_>>();

    let marked_once = candidates
        .iter()
        .find(|pos| grid.cell(pos).is_some_and(|cell| cell.is_marked_once()));
    let corridor = || {
        candidates
            .iter()
            .find(|pos| *pos == start || grid.kind(pos) == CellKind::Corridor)
    };

    marked_once
        .or_else(corridor)
        .copied()
        .ok_or(Error::ReconstructionFailed(current))
}

/// Walks from `destination` back to `start`, the length of the walk is the shortest way found.
pub fn reconstruct(
    grid: &Grid,
    start: &Position,
    destination: &Position,
    observer: &mut dyn StepObserver,
) -> Result<PathReport, Error> {
    let mut path = vec![*destination];
    let mut current = *destination;
    let mut previous = None;
    let mut walked = HashSet::new();
    while current != *start {
        if !walked.insert((current, previous)) {
            warn!("Way back circles around {}.", current);
            return Err(Error::ReconstructionFailed(current));
        }

        let next_pos = next_step_back(grid, current, previous, start).inspect_err(|_| {
            warn!("Way back got stuck at {}.", current);
        })?;
        trace!("Step back {} -> {}.", current, next_pos);
        observer.on_step(&next_pos, StepEvent::Reconstruction);
        previous = Some(current);
        current = next_pos;
        path.push(current);
    }

    let report = PathReport::from_path(path);
    info!("Shortest way back to the start takes {} steps.", report.length);

    Ok(report)
}
