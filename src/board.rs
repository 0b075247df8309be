//! Game board state: cell grid, placed ships and shot resolution.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::ship::{fleet_sunk, layout, Orientation, Ship, ShipType};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Character used when rendering the grid.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Ship => 'S',
            Cell::Hit => 'H',
            Cell::Miss => 'M',
        }
    }

    /// `true` once a shot has resolved this cell.
    pub fn is_fired(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Internal grid square. Ship squares carry the index of their ship, so a
/// shot updates the cell and the ship's hit marks in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Square {
    Water,
    Ship(usize),
    Hit(usize),
    Miss,
}

impl Square {
    fn cell(self) -> Cell {
        match self {
            Square::Water => Cell::Empty,
            Square::Ship(_) => Cell::Ship,
            Square::Hit(_) => Cell::Hit,
            Square::Miss => Cell::Miss,
        }
    }

    fn owner(self) -> Option<usize> {
        match self {
            Square::Ship(i) | Square::Hit(i) => Some(i),
            Square::Water | Square::Miss => None,
        }
    }
}

/// A square grid owning the ships placed on it. `x` selects the row and `y`
/// the column.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(size: usize) -> Self {
        Board {
            size,
            squares: vec![Square::Water; size * size],
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when a fleet is present and every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && fleet_sunk(&self.ships)
    }

    /// Cell at (`x`, `y`), or `None` when off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.squares[i].cell())
    }

    /// Ship covering (`x`, `y`), if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        let idx = self.index(x, y)?;
        self.squares[idx].owner().map(|s| &self.ships[s])
    }

    /// Place `ship` over `coords`. Either every cell is claimed or the board
    /// is left untouched. Returns the index of the stored ship.
    pub fn place_ship(&mut self, mut ship: Ship, coords: &[Coord]) -> Result<usize, BoardError> {
        if coords.len() != ship.size() {
            return Err(BoardError::WrongLength {
                expected: ship.size(),
                got: coords.len(),
            });
        }
        let mut indices = Vec::with_capacity(coords.len());
        for c in coords {
            let idx = self
                .index(c.x, c.y)
                .ok_or(BoardError::InvalidCoordinate { x: c.x, y: c.y })?;
            if self.squares[idx] != Square::Water || indices.contains(&idx) {
                return Err(BoardError::CellOccupied { x: c.x, y: c.y });
            }
            indices.push(idx);
        }
        ship.place_ship(coords)?;

        let ship_index = self.ships.len();
        for idx in indices {
            self.squares[idx] = Square::Ship(ship_index);
        }
        log::debug!("placed {} at {:?}", ship.name(), coords);
        self.ships.push(ship);
        Ok(ship_index)
    }

    /// Sample origin and orientation until `ship_type` fits on open water.
    ///
    /// Samples that run off the board are discarded without consulting the
    /// grid. Every sample counts toward `max_attempts`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
        max_attempts: u32,
    ) -> Result<Vec<Coord>, BoardError> {
        let exhausted = BoardError::PlacementExhausted {
            ship: ship_type.name(),
            attempts: max_attempts,
        };
        if self.size == 0 {
            return Err(exhausted);
        }
        for _ in 0..max_attempts {
            let origin = Coord::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let Some(coords) = layout(origin, orientation, ship_type.length(), self.size) else {
                continue;
            };
            if coords
                .iter()
                .all(|c| self.cell(c.x, c.y) == Some(Cell::Empty))
            {
                return Ok(coords);
            }
        }
        Err(exhausted)
    }

    /// Resolve a shot at (`x`, `y`), marking the cell and the struck ship.
    pub fn check_hit(&mut self, x: usize, y: usize) -> Result<ShotOutcome, BoardError> {
        let idx = self
            .index(x, y)
            .ok_or(BoardError::InvalidCoordinate { x, y })?;
        match self.squares[idx] {
            Square::Hit(_) | Square::Miss => Err(BoardError::AlreadyFired { x, y }),
            Square::Water => {
                self.squares[idx] = Square::Miss;
                Ok(ShotOutcome::Miss)
            }
            Square::Ship(owner) => {
                self.squares[idx] = Square::Hit(owner);
                let ship = &mut self.ships[owner];
                ship.check_hit(x, y);
                if ship.is_sunk() {
                    Ok(ShotOutcome::Sunk(ship.name()))
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
        }
    }

    /// Read-only view that hides ship cells not yet hit.
    pub fn opponent_view(&self) -> MaskedBoard<'_> {
        MaskedBoard { board: self }
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(x * self.size + y)
        } else {
            None
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, reveal: bool) -> fmt::Result {
        for row in self.squares.chunks(self.size.max(1)) {
            for (i, square) in row.iter().enumerate() {
                let cell = match square.cell() {
                    Cell::Ship if !reveal => Cell::Empty,
                    other => other,
                };
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A board as seen by the opponent: only fired cells are revealed.
#[derive(Clone, Copy)]
pub struct MaskedBoard<'a> {
    board: &'a Board,
}

impl MaskedBoard<'_> {
    pub fn size(&self) -> usize {
        self.board.size
    }

    /// Cell at (`x`, `y`) with unfired ship cells reported as `Empty`.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.board.cell(x, y).map(|c| match c {
            Cell::Ship => Cell::Empty,
            other => other,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, true)
    }
}

impl fmt::Display for MaskedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.render(f, false)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, ships: {:?} }}", self.size, self.ships)?;
        self.render(f, true)
    }
}
