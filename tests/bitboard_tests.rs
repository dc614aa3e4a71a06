use trireme::{BitBoard, BitBoardError};

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert_eq!(
        bb.set(10, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 10, col: 0 })
    );
    assert!(bb.get(0, 10).is_err());
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(0, 1), (3, 3)]).unwrap();
    let cells: Vec<_> = bb.cells().collect();
    assert_eq!(cells, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_halo_in_corner_and_middle() {
    let corner = BitBoard::<u128, 10>::from_cells([(0, 0)]).unwrap();
    let halo = corner.halo();
    assert_eq!(halo.count_ones(), 4);
    assert!(halo.get(1, 1).unwrap());

    let middle = BitBoard::<u128, 10>::from_cells([(5, 5)]).unwrap();
    assert_eq!(middle.halo().count_ones(), 9);
}

#[test]
fn test_halo_of_segment() {
    // a vertical two-cell ship away from the edges touches 4x3 cells
    let ship = BitBoard::<u128, 10>::from_cells([(1, 1), (2, 1)]).unwrap();
    let ring = ship.halo() & !ship;
    assert_eq!(ring.count_ones(), 10);
    assert!(ring.get(2, 2).unwrap());
    assert!(!ring.get(1, 1).unwrap());
}

#[test]
fn test_set_ops() {
    let a = BitBoard::<u16, 4>::from_cells([(0, 0), (1, 1)]).unwrap();
    let b = BitBoard::<u16, 4>::from_cells([(1, 1), (2, 2)]).unwrap();
    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((!a).count_ones(), 14);
}
