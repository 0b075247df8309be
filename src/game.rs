use core::fmt;
use rand::Rng;

use crate::{
    common::{BoardError, Coord, ShotOutcome},
    config::{GameConfig, FLEET},
    player::Player,
};

/// Which player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// Turn progression of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Fleets not yet placed.
    Setup,
    /// Waiting for `Side` to fire.
    Turn(Side),
    /// Terminal: `winner` sank the whole opposing fleet.
    GameOver { winner: Side },
}

/// Errors returned by [`Game`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation is not allowed in the current turn state.
    InvalidState(TurnState),
    /// Underlying board error (placement or shot).
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidState(state) => {
                write!(f, "Operation not allowed in state {:?}", state)
            }
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// What happened on a single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// State after the shot was applied.
    pub next: TurnState,
}

/// Two players and the turn state machine between them. Holds no I/O, so any
/// front-end can drive it.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    config: GameConfig,
    state: TurnState,
}

impl Game {
    pub fn new(name1: &str, name2: &str, config: GameConfig) -> Self {
        Self {
            players: [
                Player::new(name1, config.board_size),
                Player::new(name2, config.board_size),
            ],
            config,
            state: TurnState::Setup,
        }
    }

    /// Place both fleets (player one first) and hand the first turn to player one.
    pub fn setup<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.state != TurnState::Setup {
            return Err(GameError::InvalidState(self.state));
        }
        for player in self.players.iter_mut() {
            player.place_ships(rng, &FLEET, self.config.max_placement_attempts)?;
        }
        self.state = TurnState::Turn(Side::One);
        log::info!(
            "fleets placed for {} and {}",
            self.players[0].name(),
            self.players[1].name()
        );
        Ok(())
    }

    /// Current player fires at (`x`, `y`) on the opponent's board.
    ///
    /// Errors leave the state untouched, so the same player may try again.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<ShotReport, GameError> {
        let shooter = match self.state {
            TurnState::Turn(side) => side,
            other => return Err(GameError::InvalidState(other)),
        };
        let [p1, p2] = &mut self.players;
        let (attacker, defender) = match shooter {
            Side::One => (p1, p2),
            Side::Two => (p2, p1),
        };

        let outcome = attacker.take_shot(defender, x, y)?;
        let target = Coord::new(x, y);
        attacker.mark_opponent_board(target, outcome);
        log::debug!("{} fired at {} -> {:?}", attacker.name(), target, outcome);

        self.state = if defender.has_lost() {
            log::info!("{} wins after {} shots", attacker.name(), attacker.shots_fired());
            TurnState::GameOver { winner: shooter }
        } else {
            TurnState::Turn(shooter.other())
        };

        Ok(ShotReport {
            shooter,
            target,
            outcome,
            next: self.state,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn opponent_of(&self, side: Side) -> &Player {
        self.player(side.other())
    }

    /// Side whose turn it is, if the game is running.
    pub fn current_side(&self) -> Option<Side> {
        match self.state {
            TurnState::Turn(side) => Some(side),
            _ => None,
        }
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_side().map(|side| self.player(side))
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}
