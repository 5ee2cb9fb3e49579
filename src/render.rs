use std::{
    io::{self, Stdout, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};
use log::warn;

use crate::{CellKind, Grid, Position, StepEvent, StepObserver};

const WALKER: &str = "R";
const ROUTE: &str = "X";
const WALL: &str = "█";

fn cell_cursor(pos: &Position) -> cursor::MoveTo {
    let to_u16 = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
    cursor::MoveTo(to_u16(pos.x()), to_u16(pos.y()))
}

fn background_of(kind: CellKind) -> Color {
    match kind {
        CellKind::Wall => Color::Black,
        CellKind::Corridor | CellKind::Junction => Color::White,
        CellKind::Destination => Color::Blue,
    }
}

/// Draws the maze once, then every step of both phases in place, sleeping between steps.
///
/// First visited junctions turn yellow, second visited ones red, the way back green.
pub struct TerminalRenderer {
    term: Stdout,
    height: u16,
    delay: Duration,
    // Walker's position and the color its cell gets back once the walker moves on.
    walker: Option<(Position, Color)>,
    error: Option<io::Error>,
}

impl TerminalRenderer {
    pub fn new(grid: &Grid, delay: Duration) -> io::Result<Self> {
        let (term_col_n, term_row_n) = terminal::size()?;
        let (col_n, row_n) = (grid.width(), grid.height());
        if usize::from(term_col_n) < col_n || usize::from(term_row_n) <= row_n {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!(
                    "Terminal({} x {}) hasn't enough space to render, expect {} rows x {} columns",
                    term_row_n,
                    term_col_n,
                    row_n + 1,
                    col_n
                ),
            ));
        }

        let mut renderer = Self {
            term: io::stdout(),
            height: u16::try_from(row_n).unwrap_or(u16::MAX),
            delay,
            walker: None,
            error: None,
        };
        renderer.draw_maze(grid)?;

        Ok(renderer)
    }

    /// Parks the cursor below the maze and hands back the first drawing error, if any.
    pub fn finish(mut self) -> io::Result<()> {
        queue!(
            self.term,
            style::ResetColor,
            cursor::MoveTo(0, self.height),
            cursor::Show
        )?;
        self.term.flush()?;
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn draw_maze(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(
            self.term,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        for pos in grid.positions() {
            let kind = grid.kind(&pos);
            let content = if kind == CellKind::Wall { WALL } else { " " };
            queue!(
                self.term,
                cell_cursor(&pos),
                style::PrintStyledContent(content.black().on(background_of(kind)))
            )?;
        }

        self.term.flush()
    }

    fn paint(&mut self, pos: &Position, content: &str, background: Color) -> io::Result<()> {
        queue!(
            self.term,
            cell_cursor(pos),
            style::PrintStyledContent(content.black().on(background))
        )
    }

    fn draw_step(&mut self, pos: &Position, event: StepEvent) -> io::Result<()> {
        if let Some((last_pos, color)) = self.walker.take() {
            self.paint(&last_pos, " ", color)?;
        }

        match event {
            StepEvent::Reconstruction => self.paint(pos, ROUTE, Color::Green)?,
            _ => {
                let color = match event {
                    StepEvent::JunctionFirstVisit => Color::Yellow,
                    StepEvent::JunctionSecondVisit => Color::Red,
                    StepEvent::Destination => Color::Blue,
                    _ => Color::White,
                };
                self.paint(pos, WALKER, Color::White)?;
                self.walker = Some((*pos, color));
            }
        }

        self.term.flush()
    }
}

impl StepObserver for TerminalRenderer {
    fn on_step(&mut self, pos: &Position, event: StepEvent) {
        if self.error.is_some() {
            return;
        }

        if let Err(e) = self.draw_step(pos, event) {
            warn!("Stop drawing steps, terminal failed: {}", e);
            self.error = Some(e);
            return;
        }

        thread::sleep(self.delay);
    }
}
