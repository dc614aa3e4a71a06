//! Ship kinds and the per-ship damage state machine.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board. Horizontal ships extend towards
/// higher columns, vertical ships towards higher rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row/column step between consecutive segments.
    pub fn step(&self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// The fixed catalogue of vessels, one of each per fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
    Patrol,
}

impl ShipKind {
    /// Number of cells the ship covers.
    pub const fn size(&self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 3,
            ShipKind::Patrol => 2,
        }
    }

    /// Lowercase identifier used by commands and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Submarine => "submarine",
            ShipKind::Patrol => "patrol",
        }
    }

    /// Decorative name shown to players.
    pub const fn display_name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "Quinquereme",
            ShipKind::Battleship => "Quadrireme",
            ShipKind::Destroyer | ShipKind::Submarine => "Trireme",
            ShipKind::Patrol => "Bireme",
        }
    }

    /// Position of this kind in [`FLEET`](crate::config::FLEET).
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Effect of [`Ship::apply_hit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    /// `false` when the ship was already sunk and nothing changed.
    pub applied: bool,
    /// This hit took the last point of health.
    pub sunk_now: bool,
}

/// One vessel: health, sunk flag and, once placed, its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    current_health: usize,
    sunk: bool,
    cells: Vec<Coordinate>,
    orientation: Option<Orientation>,
}

impl Ship {
    /// A fresh, unplaced, undamaged ship.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            current_health: kind.size(),
            sunk: false,
            cells: Vec::new(),
            orientation: None,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn max_health(&self) -> usize {
        self.kind.size()
    }

    pub fn current_health(&self) -> usize {
        self.current_health
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Cells covered, bow first. Empty until placed.
    pub fn occupied_cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn covers(&self, cell: Coordinate) -> bool {
        self.cells.contains(&cell)
    }

    /// Take one point of damage. A sunk ship ignores further hits.
    pub fn apply_hit(&mut self) -> HitResult {
        if self.sunk {
            log::debug!("{} already destroyed, hit ignored", self.kind.display_name());
            return HitResult {
                applied: false,
                sunk_now: false,
            };
        }
        self.current_health -= 1;
        self.sunk = self.current_health == 0;
        log::debug!(
            "{} struck, hull {}/{}",
            self.kind.display_name(),
            self.current_health,
            self.max_health()
        );
        HitResult {
            applied: true,
            sunk_now: self.sunk,
        }
    }

    /// Record where the ship sits. Placement happens once; moving a ship
    /// requires [`Ship::clear_placement`] first.
    pub fn set_placement(
        &mut self,
        cells: Vec<Coordinate>,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.is_placed() {
            return Err(BoardError::AlreadyPlaced(self.kind));
        }
        debug_assert_eq!(cells.len(), self.kind.size());
        self.cells = cells;
        self.orientation = Some(orientation);
        Ok(())
    }

    /// Return to the unplaced state.
    pub fn clear_placement(&mut self) -> Result<(), BoardError> {
        if !self.is_placed() {
            return Err(BoardError::NotPlaced(self.kind));
        }
        self.cells.clear();
        self.orientation = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_indices_follow_declaration_order() {
        assert_eq!(ShipKind::Carrier.index(), 0);
        assert_eq!(ShipKind::Patrol.index(), 4);
    }

    #[test]
    fn submarine_and_destroyer_share_a_display_name() {
        assert_eq!(
            ShipKind::Submarine.display_name(),
            ShipKind::Destroyer.display_name()
        );
    }
}
