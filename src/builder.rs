use log::{debug, info};

use crate::{Cell, CellKind, Direction, Error, Grid, Position, RawGrid, RawSymbol};

/// Turns a raw maze into the annotated grid the solvers walk on.
///
/// Cells are swept top to bottom, left to right. Whenever a cell off the border has more than
/// two open neighbors, every open neighbor except the destination becomes a junction, even the
/// ones swept already. A cell tagged this way is never evaluated as a center itself.
pub fn build_maze(raw: &RawGrid) -> Result<Grid, Error> {
    let (width, height) = (raw.width(), raw.height());
    if width == 0 || height == 0 {
        return Err(Error::BuildFailed(format!(
            "maze has an empty dimension [{} | {}]",
            width, height
        )));
    }

    let symbols = raw.symbols();
    if symbols.len() != width * height {
        return Err(Error::BuildFailed(format!(
            "expect {} cells for [{} | {}], given {}",
            width * height,
            width,
            height,
            symbols.len()
        )));
    }

    let destination_n = symbols
        .iter()
        .filter(|symbol| **symbol == RawSymbol::Destination)
        .count();
    if destination_n != 1 {
        return Err(Error::BuildFailed(format!(
            "expect exactly one destination, given {}",
            destination_n
        )));
    }

    let cells = symbols
        .iter()
        .map(|symbol| {
            Cell::new(match symbol {
                RawSymbol::Wall => CellKind::Wall,
                RawSymbol::Corridor => CellKind::Corridor,
                RawSymbol::Destination => CellKind::Destination,
            })
        })
        .collect();
    let mut grid = Grid::from_cells(cells, width, height);

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let center = Position::new(x, y);
            if !raw.is_open(&center) || grid.kind(&center) == CellKind::Junction {
                continue;
            }

            let open_neighbors = Direction::priority()
                .iter()
                .filter_map(|dir| center.neighbor(*dir))
                .filter(|pos| raw.is_open(pos))
                .collect::<Vec<_>>();
            if open_neighbors.len() <= 2 {
                continue;
            }

            debug!(
                "Found {} branches around {}, tagging its neighbors as junctions.",
                open_neighbors.len(),
                center
            );
            for pos in open_neighbors {
                if raw.symbol(&pos) == Some(RawSymbol::Destination) {
                    continue;
                }

                if let Some(cell) = grid.cell_mut(&pos) {
                    cell.set_kind(CellKind::Junction);
                }
            }
        }
    }

    info!(
        "Built maze [{} | {}] with {} junction(s).",
        width,
        height,
        grid.junction_count()
    );

    Ok(grid)
}
