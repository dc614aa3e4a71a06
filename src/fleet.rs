use crate::config::{FLEET, NUM_SHIPS};
use crate::ship::{Ship, ShipKind};

/// Exactly one ship of each kind, indexed by [`ShipKind::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
}

impl Fleet {
    pub fn new() -> Self {
        Self {
            ships: core::array::from_fn(|i| Ship::new(FLEET[i])),
        }
    }

    /// Read-only view of one ship.
    pub fn status_of(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.index()]
    }

    pub(crate) fn ship_mut(&mut self, kind: ShipKind) -> &mut Ship {
        &mut self.ships[kind.index()]
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Win-condition primitive: every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Every ship has its cells assigned.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    pub fn placed_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_placed()).count()
    }

    /// First kind, in fleet order, that still needs placing.
    pub fn first_unplaced(&self) -> Option<ShipKind> {
        self.ships.iter().find(|s| !s.is_placed()).map(Ship::kind)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
