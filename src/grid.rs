use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Down => Some(Self::new(self.x, self.y + 1)),
            Direction::Right => Some(Self::new(self.x + 1, self.y)),
            Direction::Up if self.y > 0 => Some(Self::new(self.x, self.y - 1)),
            Direction::Left if self.x > 0 => Some(Self::new(self.x - 1, self.y)),
            _ => None,
        }
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// Directions in the order every rule scans them.
    pub fn priority() -> &'static [Direction] {
        static PRIORITY: [Direction; 4] = [
            Direction::Down,
            Direction::Right,
            Direction::Up,
            Direction::Left,
        ];

        &PRIORITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Corridor,
    Destination,
    Junction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    mark_a: bool,
    mark_b: bool,
}

impl Cell {
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            mark_a: false,
            mark_b: false,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_junction(&self) -> bool {
        self.kind == CellKind::Junction
    }

    pub fn visit_count(&self) -> usize {
        usize::from(self.mark_a) + usize::from(self.mark_b)
    }

    pub fn is_exhausted(&self) -> bool {
        self.mark_a && self.mark_b
    }

    /// Junction entered exactly once during the forward pass.
    pub fn is_marked_once(&self) -> bool {
        self.is_junction() && self.mark_a && !self.mark_b
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    fn mark(&mut self) -> Option<Visit> {
        if !self.is_junction() {
            return None;
        }

        if !self.mark_a {
            self.mark_a = true;
            Some(Visit::First)
        } else if !self.mark_b {
            self.mark_b = true;
            Some(Visit::Second)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub(crate) fn from_cells(cells: Vec<Cell>, width: usize, height: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn cell(&self, pos: &Position) -> Option<&Cell> {
        if self.contains(pos) {
            self.cells.get(self.cell_ind(pos))
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, pos: &Position) -> Option<&mut Cell> {
        if self.contains(pos) {
            let ind = self.cell_ind(pos);
            self.cells.get_mut(ind)
        } else {
            None
        }
    }

    /// Kind at `pos`, anything outside the grid counts as wall.
    pub fn kind(&self, pos: &Position) -> CellKind {
        self.cell(pos).map(Cell::kind).unwrap_or(CellKind::Wall)
    }

    /// Sets the next free visitation flag of the junction at `pos`.
    ///
    /// Returns `None` for cells that aren't junctions and for exhausted junctions.
    pub fn visit(&mut self, pos: &Position) -> Option<Visit> {
        self.cell_mut(pos).and_then(Cell::mark)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    pub fn destination(&self) -> Option<Position> {
        self.positions().find(|pos| self.kind(pos) == CellKind::Destination)
    }

    pub fn junction_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_junction()).count()
    }

    fn cell_ind(&self, pos: &Position) -> usize {
        pos.y * self.width + pos.x
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line = row
                .iter()
                .map(|cell| match cell.kind {
                    CellKind::Wall => '#',
                    CellKind::Corridor => '.',
                    CellKind::Destination => 'X',
                    CellKind::Junction => match cell.visit_count() {
                        0 => '+',
                        1 => '1',
                        _ => '2',
                    },
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
