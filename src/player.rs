use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::{Board, MaskedBoard},
    common::{BoardError, Coord, ShotOutcome},
    ship::{Ship, ShipType},
};

/// One side of the game: a name, the board holding its own fleet, and a log
/// of the shots it has fired at the opponent.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    shots: Vec<(Coord, ShotOutcome)>,
}

impl Player {
    pub fn new(name: impl Into<String>, board_size: usize) -> Self {
        Self {
            name: name.into(),
            board: Board::new(board_size),
            shots: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's own board, ships revealed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the own board, e.g. for manual placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Randomly place every ship of `fleet` onto the own board, in order.
    pub fn place_ships<R: Rng>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipType],
        max_attempts: u32,
    ) -> Result<(), BoardError> {
        for &ship_type in fleet {
            let coords = self.board.random_placement(rng, ship_type, max_attempts)?;
            self.board.place_ship(Ship::new(ship_type), &coords)?;
        }
        log::info!("{} placed {} ships", self.name, fleet.len());
        Ok(())
    }

    /// Fire at (`x`, `y`) on the opponent's own board.
    pub fn take_shot(
        &self,
        opponent: &mut Player,
        x: usize,
        y: usize,
    ) -> Result<ShotOutcome, BoardError> {
        opponent.board.check_hit(x, y)
    }

    /// `true` once a fleet has been placed and every ship of it is sunk.
    pub fn has_lost(&self) -> bool {
        self.board.all_sunk()
    }

    /// Record the outcome of a shot this player fired.
    pub fn mark_opponent_board(&mut self, coord: Coord, outcome: ShotOutcome) {
        self.shots.push((coord, outcome));
    }

    /// What this player knows of `opponent`'s board.
    pub fn tracking_view<'a>(&self, opponent: &'a Player) -> MaskedBoard<'a> {
        opponent.board.opponent_view()
    }

    /// Shots fired so far, oldest first.
    pub fn shots(&self) -> &[(Coord, ShotOutcome)] {
        &self.shots
    }

    pub fn shots_fired(&self) -> usize {
        self.shots.len()
    }

    pub fn hits_scored(&self) -> usize {
        self.shots.iter().filter(|(_, o)| o.is_hit()).count()
    }

    /// Own board followed by the tracking view of `opponent`.
    pub fn render_boards(&self, opponent: &Player) -> String {
        format!(
            "{name}'s Board:\n{own}{name}'s View of Opponent's Board:\n{view}",
            name = self.name,
            own = self.board,
            view = self.tracking_view(opponent),
        )
    }
}
