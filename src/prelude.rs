//! Commonly used types for ease of import.

pub use crate::{
    parse_label, AttackOutcome, Coordinate, GameError, GameEvent, GameSession, Orientation,
    Outcome, Phase, ShipKind, Side,
};

#[cfg(feature = "std")]
pub use crate::driver::SessionDriver;
