use battleship::{
    layout, BoardError, Cell, Coord, Orientation, Player, Ship, ShotOutcome, BOARD_SIZE, FLEET,
    MAX_PLACEMENT_ATTEMPTS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Fleet laid out one ship per row, left aligned.
fn player_with_rows(name: &str) -> Player {
    let mut player = Player::new(name, BOARD_SIZE);
    for (row, def) in FLEET.iter().enumerate() {
        let coords = layout(
            Coord::new(row, 0),
            Orientation::Vertical,
            def.length(),
            BOARD_SIZE,
        )
        .unwrap();
        player
            .board_mut()
            .place_ship(Ship::new(*def), &coords)
            .unwrap();
    }
    player
}

#[test]
fn test_place_ships_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let mut a = Player::new("a", BOARD_SIZE);
    let mut b = Player::new("b", BOARD_SIZE);
    a.place_ships(&mut rng1, &FLEET, MAX_PLACEMENT_ATTEMPTS).unwrap();
    b.place_ships(&mut rng2, &FLEET, MAX_PLACEMENT_ATTEMPTS).unwrap();

    assert_eq!(a.board().ships().len(), FLEET.len());
    for (sa, sb) in a.board().ships().iter().zip(b.board().ships()) {
        assert_eq!(sa.cells(), sb.cells());
    }
    for (ship, def) in a.board().ships().iter().zip(FLEET.iter()) {
        assert_eq!(ship.name(), def.name());
        assert_eq!(ship.cells().len(), def.length());
    }
}

#[test]
fn test_place_ships_fails_when_board_too_small() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = Player::new("tiny", 4);
    let err = player.place_ships(&mut rng, &FLEET, 100).unwrap_err();
    assert_eq!(
        err,
        BoardError::PlacementExhausted {
            ship: "Carrier",
            attempts: 100
        }
    );
}

#[test]
fn test_has_lost_needs_a_fleet() {
    let empty = Player::new("nobody", BOARD_SIZE);
    assert!(!empty.has_lost());
    assert!(!player_with_rows("Bob").has_lost());
}

#[test]
fn test_take_shot_mutates_opponent_board() {
    let shooter = Player::new("Alice", BOARD_SIZE);
    let mut target = player_with_rows("Bob");

    assert_eq!(shooter.take_shot(&mut target, 0, 0).unwrap(), ShotOutcome::Hit);
    assert_eq!(target.board().cell(0, 0), Some(Cell::Hit));
    assert_eq!(shooter.take_shot(&mut target, 9, 9).unwrap(), ShotOutcome::Miss);
    assert_eq!(target.board().cell(9, 9), Some(Cell::Miss));
    assert_eq!(shooter.board().cell(0, 0), Some(Cell::Empty));
}

#[test]
fn test_fleet_sunk_one_by_one() {
    let shooter = Player::new("Alice", BOARD_SIZE);
    let mut target = player_with_rows("Bob");

    for (row, def) in FLEET.iter().enumerate() {
        for x in 0..def.length() {
            assert!(!target.has_lost());
            let outcome = shooter.take_shot(&mut target, row, x).unwrap();
            if x + 1 == def.length() {
                assert_eq!(outcome, ShotOutcome::Sunk(def.name()));
            } else {
                assert_eq!(outcome, ShotOutcome::Hit);
            }
        }
        assert!(target.board().ships()[row].is_sunk());
    }
    assert!(target.has_lost());
}

#[test]
fn test_tracking_view_and_shot_log() {
    let mut shooter = Player::new("Alice", BOARD_SIZE);
    let mut target = player_with_rows("Bob");

    let hit = shooter.take_shot(&mut target, 0, 1).unwrap();
    shooter.mark_opponent_board(Coord::new(0, 1), hit);
    let miss = shooter.take_shot(&mut target, 7, 7).unwrap();
    shooter.mark_opponent_board(Coord::new(7, 7), miss);

    let view = shooter.tracking_view(&target);
    assert_eq!(view.cell(0, 1), Some(Cell::Hit));
    assert_eq!(view.cell(7, 7), Some(Cell::Miss));
    // unfired ship cells stay hidden
    assert_eq!(view.cell(0, 0), Some(Cell::Empty));

    assert_eq!(shooter.shots_fired(), 2);
    assert_eq!(shooter.hits_scored(), 1);
    assert_eq!(
        shooter.shots(),
        &[(Coord::new(0, 1), ShotOutcome::Hit), (Coord::new(7, 7), ShotOutcome::Miss)]
    );
}

#[test]
fn test_render_boards() {
    let mut shooter = player_with_rows("Alice");
    let mut target = player_with_rows("Bob");
    let outcome = shooter.take_shot(&mut target, 0, 9).unwrap();
    shooter.mark_opponent_board(Coord::new(0, 9), outcome);

    let screen = shooter.render_boards(&target);
    let lines: Vec<&str> = screen.lines().collect();
    assert_eq!(lines[0], "Alice's Board:");
    assert_eq!(lines[1], "S S S S S ~ ~ ~ ~ ~");
    assert_eq!(lines[11], "Alice's View of Opponent's Board:");
    assert_eq!(lines[12], "~ ~ ~ ~ ~ ~ ~ ~ ~ M");
    assert_eq!(lines.len(), 22);
}
