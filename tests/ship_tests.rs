use battleship::{fleet_sunk, layout, BoardError, Coord, Orientation, Ship, ShipType};

fn placed(len: usize, origin: (usize, usize), orientation: Orientation) -> Ship {
    let def = ShipType::new("Test", len);
    let coords = layout(origin.into(), orientation, len, 10).unwrap();
    let mut ship = Ship::new(def);
    ship.place_ship(&coords).unwrap();
    ship
}

#[test]
fn test_layout_directions() {
    let h = layout(Coord::new(2, 3), Orientation::Horizontal, 3, 10).unwrap();
    assert_eq!(h, vec![Coord::new(2, 3), Coord::new(3, 3), Coord::new(4, 3)]);
    let v = layout(Coord::new(2, 3), Orientation::Vertical, 3, 10).unwrap();
    assert_eq!(v, vec![Coord::new(2, 3), Coord::new(2, 4), Coord::new(2, 5)]);
}

#[test]
fn test_layout_rejects_overhang() {
    // 8 + 5 > 10
    assert!(layout(Coord::new(8, 0), Orientation::Horizontal, 5, 10).is_none());
    assert!(layout(Coord::new(0, 6), Orientation::Vertical, 5, 10).is_none());
    // huge origins are rejected, not overflowed
    assert!(layout(Coord::new(usize::MAX, 0), Orientation::Horizontal, 2, 10).is_none());
    assert!(layout(Coord::new(0, usize::MAX), Orientation::Vertical, 2, 10).is_none());
    // touching the edge is fine
    assert!(layout(Coord::new(5, 0), Orientation::Horizontal, 5, 10).is_some());
}

#[test]
fn test_place_requires_exact_length() {
    let mut ship = Ship::new(ShipType::new("Test", 3));
    let err = ship
        .place_ship(&[Coord::new(0, 0), Coord::new(1, 0)])
        .unwrap_err();
    assert_eq!(err, BoardError::WrongLength { expected: 3, got: 2 });
    assert!(!ship.is_placed());
}

#[test]
fn test_place_only_once() {
    let mut ship = placed(2, (0, 0), Orientation::Horizontal);
    let err = ship
        .place_ship(&[Coord::new(5, 5), Coord::new(6, 5)])
        .unwrap_err();
    assert_eq!(err, BoardError::ShipAlreadyPlaced);
    assert_eq!(ship.cells(), &[Coord::new(0, 0), Coord::new(1, 0)]);
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = placed(2, (1, 1), Orientation::Horizontal);
    assert!(!ship.is_sunk());
    assert!(ship.check_hit(1, 1));
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());
    // miss has no side effect
    assert!(!ship.check_hit(0, 0));
    assert_eq!(ship.hit_count(), 1);
    assert!(ship.check_hit(2, 1));
    assert!(ship.is_sunk());
}

#[test]
fn test_repeated_hit_counts_once() {
    let mut ship = placed(3, (0, 0), Orientation::Vertical);
    for _ in 0..5 {
        assert!(ship.check_hit(0, 1));
    }
    assert_eq!(ship.hit_count(), 1);
    assert!(ship.hit_count() <= ship.size());
    assert!(!ship.is_sunk());
}

#[test]
fn test_fleet_sunk() {
    let mut a = placed(1, (0, 0), Orientation::Horizontal);
    let mut b = placed(2, (0, 2), Orientation::Horizontal);
    assert!(!fleet_sunk(&[a.clone(), b.clone()]));
    a.check_hit(0, 0);
    assert!(!fleet_sunk(&[a.clone(), b.clone()]));
    b.check_hit(0, 2);
    b.check_hit(1, 2);
    assert!(fleet_sunk(&[a, b]));
}
