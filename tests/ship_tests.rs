use trireme::{parse_label, BoardError, Orientation, Ship, ShipKind, FLEET, TOTAL_SHIP_CELLS};

#[test]
fn test_catalogue() {
    let sizes: Vec<_> = FLEET.iter().map(ShipKind::size).collect();
    assert_eq!(sizes, vec![5, 4, 3, 3, 2]);
    assert_eq!(sizes.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
    assert_eq!(ShipKind::Carrier.display_name(), "Quinquereme");
    assert_eq!(ShipKind::Patrol.display_name(), "Bireme");
}

#[test]
fn test_new_ship_is_whole_and_unplaced() {
    let ship = Ship::new(ShipKind::Destroyer);
    assert_eq!(ship.current_health(), 3);
    assert_eq!(ship.max_health(), 3);
    assert!(!ship.is_sunk());
    assert!(!ship.is_placed());
    assert!(ship.occupied_cells().is_empty());
}

#[test]
fn test_hits_until_sunk() {
    let mut ship = Ship::new(ShipKind::Patrol);
    let first = ship.apply_hit();
    assert!(first.applied && !first.sunk_now);
    assert_eq!(ship.current_health(), 1);

    let second = ship.apply_hit();
    assert!(second.applied && second.sunk_now);
    assert!(ship.is_sunk());
    assert_eq!(ship.current_health(), 0);

    // sunk ships ignore further damage
    let third = ship.apply_hit();
    assert!(!third.applied);
    assert_eq!(ship.current_health(), 0);
}

#[test]
fn test_placement_lifecycle() -> Result<(), BoardError> {
    let mut ship = Ship::new(ShipKind::Patrol);
    let cells = vec![parse_label("B2").unwrap(), parse_label("B3").unwrap()];
    ship.set_placement(cells.clone(), Orientation::Vertical)?;
    assert!(ship.is_placed());
    assert!(ship.covers(cells[1]));
    assert_eq!(ship.orientation(), Some(Orientation::Vertical));

    assert_eq!(
        ship.set_placement(cells, Orientation::Vertical),
        Err(BoardError::AlreadyPlaced(ShipKind::Patrol))
    );

    ship.clear_placement()?;
    assert!(!ship.is_placed());
    assert_eq!(
        ship.clear_placement(),
        Err(BoardError::NotPlaced(ShipKind::Patrol))
    );
    Ok(())
}
