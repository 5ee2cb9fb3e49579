use crate::Position;

pub mod backward;
pub mod forward;

pub use backward::{next_step_back, reconstruct};
pub use forward::{is_dead_end, next_position, solve_forward};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepEvent {
    Corridor,
    JunctionFirstVisit,
    JunctionSecondVisit,
    Destination,
    Reconstruction,
}

/// Receives every move of both phases. Observers can't change the walk.
pub trait StepObserver {
    fn on_step(&mut self, pos: &Position, event: StepEvent);
}

impl<F> StepObserver for F
where
    F: FnMut(&Position, StepEvent),
{
    fn on_step(&mut self, pos: &Position, event: StepEvent) {
        self(pos, event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    pub path: Vec<Position>,
    pub length: usize,
}

impl PathReport {
    fn from_path(path: Vec<Position>) -> Self {
        let length = path.len().saturating_sub(1);
        Self { path, length }
    }
}
