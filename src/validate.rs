use crate::{Error, Position, RawGrid, RawSymbol, MAZE_SIZE_MAX, MAZE_SIZE_MIN};

pub fn validate_dimension(width: usize, height: usize) -> Result<(), Error> {
    let range = MAZE_SIZE_MIN..=MAZE_SIZE_MAX;
    if !range.contains(&width) || !range.contains(&height) {
        return Err(Error::SizeOutOfRange { width, height });
    }

    Ok(())
}

/// Precondition checks on a raw maze and the chosen start position.
pub fn validate(raw: &RawGrid, start: &Position) -> Result<(), Error> {
    validate_dimension(raw.width(), raw.height())?;

    match raw.symbol(start) {
        None => Err(Error::StartOutOfBounds(*start)),
        Some(RawSymbol::Wall) => Err(Error::StartBlocked(*start)),
        Some(RawSymbol::Destination) => Err(Error::StartIsDestination(*start)),
        Some(RawSymbol::Corridor) => Ok(()),
    }
}
