//! Common types for Battleship: coordinates, shot outcomes and board errors.

use core::fmt;

/// A grid position: `x` is the row, `y` the column, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot struck a ship segment that was still afloat.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot struck the last intact segment of a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Ship and Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the `[0, size)` range on some axis.
    InvalidCoordinate { x: usize, y: usize },
    /// Placement would cover a cell that is not empty.
    CellOccupied { x: usize, y: usize },
    /// Placement coordinate count does not match the ship's length.
    WrongLength { expected: usize, got: usize },
    /// Coordinates were already bound to this ship.
    ShipAlreadyPlaced,
    /// Cell was already resolved by an earlier shot.
    AlreadyFired { x: usize, y: usize },
    /// Random placement gave up after the configured number of samples.
    PlacementExhausted { ship: &'static str, attempts: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCoordinate { x, y } => {
                write!(f, "Coordinate ({}, {}) is off the board", x, y)
            }
            BoardError::CellOccupied { x, y } => {
                write!(f, "Cell ({}, {}) is already occupied", x, y)
            }
            BoardError::WrongLength { expected, got } => write!(
                f,
                "Ship needs {} coordinates but {} were given",
                expected, got
            ),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::AlreadyFired { x, y } => {
                write!(f, "A shot was already fired at ({}, {})", x, y)
            }
            BoardError::PlacementExhausted { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                ship, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
