use maze_runner::{build_maze, read_raw_grid, CellKind, Error, Grid, Position, RawGrid, RawSymbol};

fn build(text: &str) -> Grid {
    build_maze(&text.parse::<RawGrid>().unwrap()).unwrap()
}

fn junctions(grid: &Grid) -> Vec<Position> {
    grid.positions()
        .filter(|pos| grid.kind(pos) == CellKind::Junction)
        .collect()
}

#[test]
fn tag_neighbors_of_crossing() {
    let grid = build_maze(&read_raw_grid("mazes/junction.txt").unwrap()).unwrap();

    assert_eq!(
        junctions(&grid),
        vec![
            Position::new(4, 3),
            Position::new(3, 4),
            Position::new(5, 4),
            Position::new(4, 5),
        ]
    );
    assert_eq!(grid.kind(&Position::new(4, 4)), CellKind::Corridor);
    assert_eq!(grid.kind(&Position::new(6, 4)), CellKind::Destination);
    assert_eq!(grid.destination(), Some(Position::new(6, 4)));
    assert!(grid
        .positions()
        .all(|pos| grid.cell(&pos).unwrap().visit_count() == 0));
}

#[test]
fn ring_has_no_junction() {
    let grid = build_maze(&read_raw_grid("mazes/ring.txt").unwrap()).unwrap();
    assert_eq!(grid.junction_count(), 0);
    assert_eq!(
        grid.to_string(),
        "#####\n#...#\n#.#.#\n#..X#\n#####\n"
    );
}

#[test]
fn retag_cells_swept_before() {
    let grid = build("5 5\n11111\n10001\n11011\n11X11\n11111\n");

    // (1, 1) was swept before its right neighbor found three branches.
    assert_eq!(
        junctions(&grid),
        vec![
            Position::new(1, 1),
            Position::new(3, 1),
            Position::new(2, 2),
        ]
    );
    assert_eq!(grid.kind(&Position::new(2, 1)), CellKind::Corridor);
}

#[test]
fn destination_counts_as_branch_but_stays_destination() {
    let grid = build("5 5\n11111\n10001\n11X11\n11011\n11111\n");

    assert_eq!(
        junctions(&grid),
        vec![Position::new(1, 1), Position::new(3, 1)]
    );
    assert_eq!(grid.kind(&Position::new(2, 2)), CellKind::Destination);
}

#[test]
fn border_cells_are_never_centers() {
    let grid = build("5 5\n10001\n11011\n11011\n11X11\n11111\n");
    assert_eq!(grid.junction_count(), 0);
    assert_eq!(grid.kind(&Position::new(2, 0)), CellKind::Corridor);
}

#[test]
fn build_is_deterministic() {
    let raw = read_raw_grid("mazes/spielfeld.txt").unwrap();
    let first = build_maze(&raw).unwrap();
    let second = build_maze(&raw).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.junction_count(), 12);
}

#[test]
fn reject_broken_structure() {
    let short = RawGrid::new(5, 5, vec![RawSymbol::Corridor; 24]);
    assert!(matches!(build_maze(&short), Err(Error::BuildFailed(_))));

    let empty = RawGrid::new(0, 5, Vec::new());
    assert!(matches!(build_maze(&empty), Err(Error::BuildFailed(_))));

    let no_destination = "5 5\n11111\n10001\n10101\n10001\n11111\n"
        .parse::<RawGrid>()
        .unwrap();
    assert!(matches!(
        build_maze(&no_destination),
        Err(Error::BuildFailed(_))
    ));

    let two_destinations = "5 5\n11111\n1X001\n10101\n1000X\n11111\n"
        .parse::<RawGrid>()
        .unwrap();
    assert!(matches!(
        build_maze(&two_destinations),
        Err(Error::BuildFailed(_))
    ));
}
