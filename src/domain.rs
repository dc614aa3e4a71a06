//! Values handed to front ends: event notifications, statistics and
//! per-ship status snapshots. Serializable when `std` is enabled.

use alloc::vec::Vec;

use crate::common::{AttackOutcome, BoardError};
use crate::coord::Coordinate;
use crate::game::Side;
use crate::ship::{Orientation, Ship, ShipKind};

/// Final result from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Outcome {
    Win,
    Lose,
}

/// Running counters and derived accuracy for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    /// Opponent ships the player has sunk.
    pub opponent_ships_sunk: usize,
    /// Player ships the opponent has sunk.
    pub player_ships_sunk: usize,
    /// Completed rounds.
    pub turns: u32,
    /// Player hit rate in whole percent.
    pub accuracy: u32,
    pub player_hits: u32,
    pub player_shots: u32,
    pub opponent_hits: u32,
    pub opponent_shots: u32,
}

/// `hits / shots` as a percentage rounded to the nearest integer (halves
/// round up); zero when nothing has been fired.
pub fn accuracy_percent(hits: u32, shots: u32) -> u32 {
    if shots == 0 {
        return 0;
    }
    let (hits, shots) = (hits as u64, shots as u64);
    ((hits * 200 + shots) / (shots * 2)) as u32
}

/// Snapshot of one ship for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipStatus {
    pub kind: ShipKind,
    pub display_name: &'static str,
    pub current_health: usize,
    pub max_health: usize,
    pub sunk: bool,
    pub cells: Vec<Coordinate>,
    pub orientation: Option<Orientation>,
}

impl From<&Ship> for ShipStatus {
    fn from(ship: &Ship) -> Self {
        ShipStatus {
            kind: ship.kind(),
            display_name: ship.kind().display_name(),
            current_health: ship.current_health(),
            max_health: ship.max_health(),
            sunk: ship.is_sunk(),
            cells: ship.occupied_cells().to_vec(),
            orientation: ship.orientation(),
        }
    }
}

/// Notifications queued by the session for front ends to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(tag = "event", rename_all = "snake_case"))]
pub enum GameEvent {
    PlacementAccepted {
        kind: ShipKind,
        anchor: Coordinate,
        orientation: Orientation,
    },
    PlacementRejected {
        kind: ShipKind,
        reason: BoardError,
    },
    ShipRemoved {
        kind: ShipKind,
    },
    PlacementConfirmed,
    BattleStarted,
    AttackResolved {
        attacker: Side,
        target: Coordinate,
        outcome: AttackOutcome,
    },
    TurnChanged {
        turn: Side,
    },
    /// The opponent's reply is due after `delay_ms`.
    OpponentAttackScheduled {
        delay_ms: u64,
    },
    /// The opponent found no untried cell and passed.
    OpponentPassed,
    GameOver {
        outcome: Outcome,
        stats: GameStats,
    },
    Restarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_rounds_half_up() {
        assert_eq!(accuracy_percent(0, 0), 0);
        assert_eq!(accuracy_percent(4, 10), 40);
        assert_eq!(accuracy_percent(1, 3), 33);
        assert_eq!(accuracy_percent(2, 3), 67);
        assert_eq!(accuracy_percent(1, 8), 13);
    }
}
