use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use trireme::{
    place_fleet_randomly, AttackOutcome, Board, Coordinate, GameError, Orientation, ShipKind,
    BOARD_SIZE, FLEET, TOTAL_SHIP_CELLS,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_fleet_randomly(&mut rng, &mut board).unwrap();
    let shots = rng.random_range(0..BOARD_SIZE as usize * 4);
    for _ in 0..shots {
        let cell = Coordinate::nth(rng.random_range(0..100));
        let _ = board.receive_fire(cell);
    }
    board
}

fn chebyshev(a: Coordinate, b: Coordinate) -> usize {
    a.row().abs_diff(b.row()).max(a.col().abs_diff(b.col()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships: Vec<_> = board.fleet().ships().collect();
        prop_assert_eq!(board.occupancy().count_ones(), TOTAL_SHIP_CELLS);
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                for &ca in a.occupied_cells() {
                    for &cb in b.occupied_cells() {
                        prop_assert!(chebyshev(ca, cb) > 1, "{} touches {}", ca, cb);
                    }
                }
            }
        }
    }

    #[test]
    fn placed_cells_are_contiguous(seed in any::<u64>()) {
        let board = random_board(seed);
        for kind in FLEET {
            let ship = board.ship(kind);
            let cells = ship.occupied_cells();
            prop_assert_eq!(cells.len(), kind.size());
            let (dr, dc) = ship.orientation().unwrap().step();
            for pair in cells.windows(2) {
                prop_assert_eq!(pair[1].row(), pair[0].row() + dr);
                prop_assert_eq!(pair[1].col(), pair[0].col() + dc);
            }
        }
    }

    #[test]
    fn repeat_shot_is_rejected(seed in any::<u64>(), index in 0usize..100) {
        let mut board = random_board(seed);
        let cell = Coordinate::nth(index);
        let _ = board.receive_fire(cell);
        let shots = board.shots();
        let health: Vec<_> = board.fleet().ships().map(|s| s.current_health()).collect();
        prop_assert_eq!(board.receive_fire(cell), Err(GameError::CellAlreadyFired(cell)));
        prop_assert_eq!(board.shots(), shots);
        let after: Vec<_> = board.fleet().ships().map(|s| s.current_health()).collect();
        prop_assert_eq!(health, after);
    }

    #[test]
    fn health_matches_hits(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert!(board.verify_consistency().is_ok());
        for ship in board.fleet().ships() {
            let hits = ship
                .occupied_cells()
                .iter()
                .filter(|c| board.hits().get(c.row(), c.col()).unwrap())
                .count();
            prop_assert_eq!(ship.current_health(), ship.max_health() - hits);
            prop_assert_eq!(ship.is_sunk(), hits == ship.max_health());
        }
    }

    #[test]
    fn rejected_placement_changes_nothing(seed in any::<u64>(), index in 0usize..100, vertical in any::<bool>()) {
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        trireme::place_ship_randomly(&mut rng, &mut board, ShipKind::Carrier).unwrap();
        let before = board.occupancy();
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        if board.place(ShipKind::Battleship, Coordinate::nth(index), orientation).is_err() {
            prop_assert_eq!(board.occupancy(), before);
            prop_assert!(!board.ship(ShipKind::Battleship).is_placed());
        }
    }
}

#[test]
fn sinking_reports_each_ship_once() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    place_fleet_randomly(&mut rng, &mut board).unwrap();
    let mut sunk = Vec::new();
    for cell in Coordinate::all() {
        if let AttackOutcome::Sunk(kind) = board.receive_fire(cell).unwrap() {
            sunk.push(kind);
        }
    }
    assert!(board.fleet().all_sunk());
    sunk.sort();
    assert_eq!(sunk, FLEET.to_vec());
}
