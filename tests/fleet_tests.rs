use trireme::{
    parse_label, ship_kind_named, Board, Fleet, Orientation, ShipKind, FLEET, NUM_SHIPS,
};

#[test]
fn test_new_fleet() {
    let fleet = Fleet::new();
    assert_eq!(fleet.ships().count(), NUM_SHIPS);
    assert_eq!(fleet.placed_count(), 0);
    assert_eq!(fleet.sunk_count(), 0);
    assert!(!fleet.all_sunk());
    assert!(!fleet.all_placed());
    assert_eq!(fleet.first_unplaced(), Some(ShipKind::Carrier));
    for kind in FLEET {
        assert_eq!(fleet.status_of(kind).kind(), kind);
    }
}

#[test]
fn test_placement_progress_through_board() {
    let mut board = Board::new();
    board
        .place(ShipKind::Carrier, parse_label("A1").unwrap(), Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.fleet().placed_count(), 1);
    assert_eq!(board.fleet().first_unplaced(), Some(ShipKind::Battleship));
    assert!(!board.all_placed());
}

#[test]
fn test_all_sunk_needs_every_ship() {
    let mut board = Board::new();
    board
        .place(ShipKind::Patrol, parse_label("A1").unwrap(), Orientation::Horizontal)
        .unwrap();
    board.receive_fire(parse_label("A1").unwrap()).unwrap();
    board.receive_fire(parse_label("B1").unwrap()).unwrap();
    assert_eq!(board.fleet().sunk_count(), 1);
    assert!(!board.fleet().all_sunk());
}

#[test]
fn test_ship_names_ignore_case() {
    assert_eq!(ship_kind_named("carrier"), Some(ShipKind::Carrier));
    assert_eq!(ship_kind_named("Patrol"), Some(ShipKind::Patrol));
    assert_eq!(ship_kind_named("SUBMARINE"), Some(ShipKind::Submarine));
    assert_eq!(ship_kind_named("frigate"), None);
    assert_eq!(ship_kind_named(" carrier"), None);
}
