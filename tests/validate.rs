use maze_runner::{validate, validate::validate_dimension, Error, Position, RawGrid, RawSymbol};

// Walled square with open inside and the destination in the bottom right corner of the inside.
fn walled_square(width: usize, height: usize) -> RawGrid {
    let mut symbols = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            symbols.push(if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                RawSymbol::Wall
            } else if x == width - 2 && y == height - 2 {
                RawSymbol::Destination
            } else {
                RawSymbol::Corridor
            });
        }
    }

    RawGrid::new(width, height, symbols)
}

#[test]
fn accept_size_limits() {
    let start = Position::new(1, 1);
    assert_eq!(validate(&walled_square(5, 5), &start), Ok(()));
    assert_eq!(validate(&walled_square(50, 50), &start), Ok(()));
    assert_eq!(validate(&walled_square(5, 50), &start), Ok(()));
}

#[test]
fn reject_size_out_of_range() {
    let start = Position::new(1, 1);
    assert_eq!(
        validate(&walled_square(4, 5), &start),
        Err(Error::SizeOutOfRange {
            width: 4,
            height: 5
        })
    );
    assert_eq!(
        validate(&walled_square(51, 50), &start),
        Err(Error::SizeOutOfRange {
            width: 51,
            height: 50
        })
    );
    assert!(validate_dimension(50, 51).is_err());
    assert!(validate_dimension(0, 0).is_err());
}

#[test]
fn reject_bad_start() {
    let raw = walled_square(6, 6);
    assert_eq!(
        validate(&raw, &Position::new(0, 2)),
        Err(Error::StartBlocked(Position::new(0, 2)))
    );
    assert_eq!(
        validate(&raw, &Position::new(4, 4)),
        Err(Error::StartIsDestination(Position::new(4, 4)))
    );
    assert_eq!(
        validate(&raw, &Position::new(6, 1)),
        Err(Error::StartOutOfBounds(Position::new(6, 1)))
    );
}
