use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use anyhow::{Context, Result};

use crate::{Error, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawSymbol {
    Wall,
    Corridor,
    Destination,
}

impl RawSymbol {
    pub fn is_open(&self) -> bool {
        *self != RawSymbol::Wall
    }
}

impl TryFrom<char> for RawSymbol {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1' => Ok(RawSymbol::Wall),
            '0' => Ok(RawSymbol::Corridor),
            'X' => Ok(RawSymbol::Destination),
            other => Err(Error::InvalidCharForMaze(other)),
        }
    }
}

/// Maze as handed over by a grid source, before any junction is known.
///
/// Nothing checks that `symbols` fits the dimensions here, the maze builder does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGrid {
    symbols: Vec<RawSymbol>,
    width: usize,
    height: usize,
}

impl RawGrid {
    pub fn new(width: usize, height: usize, symbols: Vec<RawSymbol>) -> Self {
        Self {
            symbols,
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

    pub fn symbols(&self) -> &[RawSymbol] {
        &self.symbols
    }

    pub fn symbol(&self, pos: &Position) -> Option<RawSymbol> {
        if pos.x() < self.width && pos.y() < self.height {
            self.symbols.get(pos.y() * self.width + pos.x()).copied()
        } else {
            None
        }
    }

    /// Whether `pos` holds a corridor or the destination, outside counts as wall.
    pub fn is_open(&self, pos: &Position) -> bool {
        self.symbol(pos).is_some_and(|symbol| symbol.is_open())
    }
}

impl FromStr for RawGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = RawGridBuilder::new();
        for line in s.lines() {
            builder.add_line(line)?;
        }

        builder.build()
    }
}

#[derive(Debug)]
struct RawGridBuilder {
    symbols: Vec<RawSymbol>,
    dimension: Option<(usize, usize)>,
    row_n: usize,
    pending_blank_n: usize,
}

impl RawGridBuilder {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            dimension: None,
            row_n: 0,
            pending_blank_n: 0,
        }
    }

    pub fn add_line(&mut self, text: &str) -> Result<(), Error> {
        let text = text.trim_end_matches('\r');
        let Some((width, height)) = self.dimension else {
            if text.trim().is_empty() {
                return Ok(());
            }

            self.dimension = Some(Self::parse_dimension(text)?);
            return Ok(());
        };

        let row = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(RawSymbol::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        if row.is_empty() {
            self.pending_blank_n += 1;
            return Ok(());
        }

        if self.pending_blank_n > 0 {
            // A blank line is only allowed after the last row.
            return Err(Error::InconsistentRow(self.row_n, width, 0));
        }

        if self.row_n >= height {
            return Err(Error::TooManyRows(height));
        }

        if row.len() != width {
            return Err(Error::InconsistentRow(self.row_n, width, row.len()));
        }

        self.symbols.extend(row);
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<RawGrid, Error> {
        let Some((width, height)) = self.dimension else {
            return Err(Error::NoDimensionLine);
        };

        if self.row_n != height {
            return Err(Error::TooFewRows(height, self.row_n));
        }

        Ok(RawGrid::new(width, height, self.symbols))
    }

    fn parse_dimension(text: &str) -> Result<(usize, usize), Error> {
        let invalid = || Error::InvalidDimensionLine(text.to_string());
        let mut numbers = text.split_whitespace().map(|s| s.parse::<usize>());
        let width = numbers.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        let height = numbers.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
        if numbers.next().is_some() {
            return Err(invalid());
        }

        Ok((width, height))
    }
}

pub fn read_raw_grid<P: AsRef<Path>>(path: P) -> Result<RawGrid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = RawGridBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder
            .add_line(line.as_str())
            .with_context(|| format!("Invalid content in line {}.", ind + 1))?;
    }

    Ok(builder.build()?)
}
