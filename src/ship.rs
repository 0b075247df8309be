//! Ship definitions, placement layout and hit tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the x axis (down the rows) from the origin.
    Horizontal,
    /// Extends along the y axis (across the columns) from the origin.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// Expand an origin and orientation into `len` consecutive coordinates.
///
/// Returns `None` if any segment would fall outside a `board_size` square.
pub fn layout(
    origin: Coord,
    orientation: Orientation,
    len: usize,
    board_size: usize,
) -> Option<Vec<Coord>> {
    let end = match orientation {
        Orientation::Horizontal => origin.x.checked_add(len)?,
        Orientation::Vertical => origin.y.checked_add(len)?,
    };
    if len == 0 || end > board_size || origin.x >= board_size || origin.y >= board_size {
        return None;
    }
    let cells = (0..len)
        .map(|i| match orientation {
            Orientation::Horizontal => Coord::new(origin.x + i, origin.y),
            Orientation::Vertical => Coord::new(origin.x, origin.y + i),
        })
        .collect();
    Some(cells)
}

/// A ship with its occupied cells and per-segment hit marks.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<Coord>,
    hits: Vec<bool>,
}

impl Ship {
    /// An unplaced ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            cells: Vec::new(),
            hits: Vec::new(),
        }
    }

    /// Bind the cells this ship occupies. Allowed once, with exactly
    /// `size()` coordinates.
    pub fn place_ship(&mut self, coords: &[Coord]) -> Result<(), BoardError> {
        if self.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if coords.len() != self.size() {
            return Err(BoardError::WrongLength {
                expected: self.size(),
                got: coords.len(),
            });
        }
        self.cells = coords.to_vec();
        self.hits = vec![false; coords.len()];
        Ok(())
    }

    /// Register a shot at (`x`, `y`). Returns `true` if it lands on this ship.
    /// A segment counts as hit once no matter how often it is struck.
    pub fn check_hit(&mut self, x: usize, y: usize) -> bool {
        match self.cells.iter().position(|c| c.x == x && c.y == y) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hit_count() >= self.size()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Occupied cells in placement order; empty until placed.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }
}

/// Returns `true` when every ship in `fleet` is sunk.
pub fn fleet_sunk(fleet: &[Ship]) -> bool {
    fleet.iter().all(Ship::is_sunk)
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", cells: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.cells,
            self.hit_count(),
            self.size(),
        )
    }
}
