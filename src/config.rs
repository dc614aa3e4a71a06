use core::time::Duration;

use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Patrol,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random anchor/orientation samples tried per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
/// Random cells sampled per opponent turn before the turn passes.
pub const MAX_TARGETING_ATTEMPTS: usize = 100;

/// Pause between a resolved player attack and the opponent's reply.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Runtime knobs for a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub settle_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

/// Look up a ship kind by its identifier (`"carrier"`, `"patrol"`, ...),
/// ignoring ASCII case. Returns `None` if the name does not match any kind
/// in the fleet.
pub fn ship_kind_named(name: &str) -> Option<ShipKind> {
    FLEET
        .iter()
        .copied()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
}
