//! One side's board: the fleet, its occupancy grid and the shots received.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{AttackOutcome, BoardError, GameError, InvariantViolation};
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::fleet::Fleet;
use crate::ship::{Orientation, Ship, ShipKind};

const GRID: usize = BOARD_SIZE as usize;

/// Cell set covering the 10×10 board.
pub type BB = BitBoard<u128, GRID>;

/// Ships, occupancy and incoming fire for one side.
///
/// The occupancy grid always equals the union of the fleet's cells; every
/// mutation goes through [`Board::place`], [`Board::unplace`] or
/// [`Board::receive_fire`], which keep the two in step.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    fleet: Fleet,
    grid: [[Option<ShipKind>; GRID]; GRID],
    occupied: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// An empty board with an unplaced fleet.
    pub fn new() -> Self {
        Board {
            fleet: Fleet::new(),
            grid: [[None; GRID]; GRID],
            occupied: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ship(&self, kind: ShipKind) -> &Ship {
        self.fleet.status_of(kind)
    }

    /// Which ship, if any, covers `cell`.
    pub fn occupant(&self, cell: Coordinate) -> Option<ShipKind> {
        self.grid[cell.row()][cell.col()]
    }

    /// Mark `cell` as held by `kind` in the occupancy grid only, leaving the
    /// fleet untouched.
    #[cfg(test)]
    pub(crate) fn force_occupant(&mut self, cell: Coordinate, kind: ShipKind) {
        self.grid[cell.row()][cell.col()] = Some(kind);
    }

    /// Mask of all occupied cells.
    pub fn occupancy(&self) -> BB {
        self.occupied
    }

    /// Shots received that struck a ship.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Shots received that found open water.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Every cell the opposing side has fired at.
    pub fn shots(&self) -> BB {
        self.hits | self.misses
    }

    pub fn has_been_fired_at(&self, cell: Coordinate) -> bool {
        self.shots().get(cell.row(), cell.col()).unwrap_or(false)
    }

    pub fn all_placed(&self) -> bool {
        self.fleet.all_placed()
    }

    /// Run the legality check for a ship of `length` anchored at `anchor`
    /// without committing it. Returns the cells it would cover.
    ///
    /// Rules are tested in order: bounds, overlap, then adjacency to any
    /// ship already on the board.
    pub fn check_placement(
        &self,
        anchor: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let (dr, dc) = orientation.step();
        let cells = (0..length)
            .map(|i| Coordinate::new(anchor.row() + dr * i, anchor.col() + dc * i))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| BoardError::OutOfBounds)?;

        let candidate = BB::from_cells(cells.iter().map(Coordinate::indices))?;
        if !(candidate & self.occupied).is_empty() {
            return Err(BoardError::Overlap);
        }
        let buffer = candidate.halo() & !candidate;
        if !(buffer & self.occupied).is_empty() {
            return Err(BoardError::TooClose);
        }
        Ok(cells)
    }

    /// Place `kind` at `anchor`. On error nothing changes.
    pub fn place(
        &mut self,
        kind: ShipKind,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.fleet.status_of(kind).is_placed() {
            return Err(BoardError::AlreadyPlaced(kind));
        }
        let cells = self.check_placement(anchor, kind.size(), orientation)?;
        for cell in cells.iter() {
            self.grid[cell.row()][cell.col()] = Some(kind);
            self.occupied.set(cell.row(), cell.col())?;
        }
        self.fleet.ship_mut(kind).set_placement(cells, orientation)?;
        log::debug!("{} placed at {} {:?}", kind, anchor, orientation);
        Ok(())
    }

    /// Take `kind` off the board so it can be placed again.
    pub fn unplace(&mut self, kind: ShipKind) -> Result<(), BoardError> {
        let cells: Vec<Coordinate> = self.fleet.status_of(kind).occupied_cells().to_vec();
        self.fleet.ship_mut(kind).clear_placement()?;
        for cell in cells {
            self.grid[cell.row()][cell.col()] = None;
            self.occupied.clear(cell.row(), cell.col())?;
        }
        log::debug!("{} removed from the board", kind);
        Ok(())
    }

    /// Resolve an incoming shot. The shot is recorded before the occupant
    /// is looked up; a repeat shot is rejected without touching anything.
    pub fn receive_fire(&mut self, cell: Coordinate) -> Result<AttackOutcome, GameError> {
        if self.has_been_fired_at(cell) {
            return Err(GameError::CellAlreadyFired(cell));
        }
        let (r, c) = cell.indices();
        let Some(kind) = self.grid[r][c] else {
            self.misses.set(r, c)?;
            return Ok(AttackOutcome::Miss);
        };
        self.hits.set(r, c)?;

        let ship = self.fleet.ship_mut(kind);
        if !ship.covers(cell) {
            return Err(InvariantViolation::PhantomHit(cell).into());
        }
        let hit = ship.apply_hit();
        if !hit.applied {
            return Err(InvariantViolation::HitOnSunkShip(kind).into());
        }
        Ok(if hit.sunk_now {
            AttackOutcome::Sunk(kind)
        } else {
            AttackOutcome::Hit(kind)
        })
    }

    /// Check that the occupancy grid and the fleet's cells describe the same
    /// layout, with no cell claimed twice.
    pub fn verify_consistency(&self) -> Result<(), InvariantViolation> {
        let mut claimed = BB::new();
        for ship in self.fleet.ships() {
            for &cell in ship.occupied_cells() {
                let (r, c) = cell.indices();
                if claimed.get(r, c).unwrap_or(true) || self.grid[r][c] != Some(ship.kind()) {
                    return Err(InvariantViolation::GridMismatch(cell));
                }
                let _ = claimed.set(r, c);
            }
        }
        for cell in Coordinate::all() {
            let (r, c) = cell.indices();
            let in_grid = self.grid[r][c].is_some();
            let in_mask = self.occupied.get(r, c).unwrap_or(false);
            let in_fleet = claimed.get(r, c).unwrap_or(false);
            if in_grid != in_fleet || in_mask != in_fleet {
                return Err(InvariantViolation::GridMismatch(cell));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  occupied: {:?},\n  hits: {:?},\n  misses: {:?},\n  fleet: {:?}\n}}",
            self.occupied, self.hits, self.misses, self.fleet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(label: &str) -> Coordinate {
        label.parse().unwrap()
    }

    #[test]
    fn stray_grid_mark_is_a_phantom_hit() {
        let mut board = Board::new();
        board.force_occupant(at("F6"), ShipKind::Patrol);
        assert_eq!(
            board.receive_fire(at("F6")),
            Err(GameError::Internal(InvariantViolation::PhantomHit(at("F6"))))
        );
        assert!(board.verify_consistency().is_err());
    }

    #[test]
    fn shot_on_sunk_ship_is_reported() {
        let mut board = Board::new();
        board
            .place(ShipKind::Patrol, at("A1"), Orientation::Horizontal)
            .unwrap();
        board.receive_fire(at("A1")).unwrap();
        board.receive_fire(at("B1")).unwrap();
        // forget the shot so the same cell can be struck again
        board.hits.clear_all();
        assert_eq!(
            board.receive_fire(at("A1")),
            Err(GameError::Internal(InvariantViolation::HitOnSunkShip(
                ShipKind::Patrol
            )))
        );
    }
}
