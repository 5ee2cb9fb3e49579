use std::collections::HashSet;

use log::{debug, info, trace, warn};

use crate::{grid::Visit, CellKind, Direction, Error, Grid, Position};

use super::{PathReport, StepEvent, StepObserver};

/// Next move of Trémaux's walk from `current`, having just come from `previous`.
///
/// Rule 1 takes the first open neighbor in Down, Right, Up, Left order that isn't where the
/// walker came from, as long as it isn't a junction. If that neighbor is a junction, rule 2
/// decides among all neighboring junctions. A dead end turns the walker around.
pub fn next_position(
    grid: &Grid,
    current: Position,
    previous: Option<Position>,
) -> Result<Position, Error> {
    for dir in Direction::priority() {
        let Some(next_pos) = current.neighbor(*dir) else {
            continue;
        };

        match grid.kind(&next_pos) {
            CellKind::Wall => continue,
            _ if Some(next_pos) == previous => continue,
            CellKind::Junction => return junction_rule(grid, current),
            CellKind::Corridor | CellKind::Destination => return Ok(next_pos),
        }
    }

    match previous {
        Some(back_pos) if grid.kind(&back_pos) == CellKind::Junction => {
            junction_rule(grid, current)
        }
        Some(back_pos) => Ok(back_pos),
        None => Err(Error::NoSolution(current)),
    }
}

/// Whether every neighbor of `current` is a wall or the cell the walker came from.
pub fn is_dead_end(grid: &Grid, current: Position, previous: Option<Position>) -> bool {
    Direction::priority()
        .iter()
        .filter_map(|dir| current.neighbor(*dir))
        .all(|pos| grid.kind(&pos) == CellKind::Wall || Some(pos) == previous)
}

// Rule 2: a fresh junction wins at once, otherwise the least used one that isn't exhausted.
fn junction_rule(grid: &Grid, current: Position) -> Result<Position, Error> {
    let mut least_used: Option<(usize, Position)> = None;
    for dir in Direction::priority() {
        let Some(pos) = current.neighbor(*dir) else {
            continue;
        };
        let Some(cell) = grid.cell(&pos).filter(|cell| cell.is_junction()) else {
            continue;
        };

        let count = cell.visit_count();
        if count == 0 {
            debug!("Junction {} next to {} is unvisited, take it.", pos, current);
            return Ok(pos);
        }

        if !cell.is_exhausted() && least_used.map_or(true, |(least, _)| count < least) {
            least_used = Some((count, pos));
        }
    }

    if let Some((count, pos)) = least_used {
        debug!(
            "Junction {} next to {} has the fewest visits({}), take it.",
            pos, current, count
        );
    }

    least_used
        .map(|(_, pos)| pos)
        .ok_or(Error::NoSolution(current))
}

/// Walks from `start` until the destination, marking every junction entered on the way.
pub fn solve_forward(
    grid: &mut Grid,
    start: &Position,
    observer: &mut dyn StepObserver,
) -> Result<PathReport, Error> {
    let mut path = vec![*start];
    let mut current = *start;
    let mut previous = None;
    // (position, came from) pairs seen since the last mark changed.
    let mut walked = HashSet::new();
    if grid.visit(start).is_some() {
        debug!("Start {} is a junction, marked it once.", start);
    }

    while grid.kind(&current) != CellKind::Destination {
        if !walked.insert((current, previous)) {
            warn!("Walker circles around {} without new marks.", current);
            return Err(Error::NoSolution(current));
        }

        // Turning around at a dead end takes a tick on the spot, which leaves another mark.
        if previous.is_some() && is_dead_end(grid, current, previous) {
            if let Some(visit) = grid.visit(&current) {
                debug!("Turn around at dead end junction {} ({:?}).", current, visit);
                walked.clear();
            }
        }

        let next_pos = next_position(grid, current, previous).inspect_err(|_| {
            warn!("No way out of {}.", current);
        })?;
        let event = match grid.visit(&next_pos) {
            Some(Visit::First) => StepEvent::JunctionFirstVisit,
            Some(Visit::Second) => StepEvent::JunctionSecondVisit,
            None if grid.kind(&next_pos) == CellKind::Destination => StepEvent::Destination,
            None => StepEvent::Corridor,
        };
        if matches!(
            event,
            StepEvent::JunctionFirstVisit | StepEvent::JunctionSecondVisit
        ) {
            walked.clear();
        }

        trace!("Step {} -> {} ({:?}).", current, next_pos, event);
        observer.on_step(&next_pos, event);
        previous = Some(current);
        current = next_pos;
        path.push(current);
    }

    let report = PathReport::from_path(path);
    info!(
        "Found one way to the destination {} in {} steps.",
        current, report.length
    );

    Ok(report)
}
