use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 10;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Random origin/orientation samples allowed per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Pause after each shot so the result can be read before the screen clears.
pub const SHOT_PAUSE_MS: u64 = 2000;

/// Per-game settings. The fleet itself is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub max_placement_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}
