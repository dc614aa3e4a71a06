//! Shared result and error types: attack outcomes and the error taxonomy.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coord::Coordinate;
use crate::game::Phase;
use crate::ship::ShipKind;

/// What a single shot did to the defending fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "result", content = "ship", rename_all = "lowercase"))]
pub enum AttackOutcome {
    /// Open water.
    Miss,
    /// Struck a ship that is still afloat.
    Hit(ShipKind),
    /// Struck the last intact segment of a ship.
    Sunk(ShipKind),
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// Errors from coordinate parsing and construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordError {
    /// Text is not a letter followed by a one- or two-digit number.
    InvalidFormat,
    /// Letter or number falls outside `A`..`J` / `1`..`10`.
    OutOfRange,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidFormat => write!(f, "coordinate must look like A1..J10"),
            CoordError::OutOfRange => write!(f, "coordinate is outside columns A-J or rows 1-10"),
        }
    }
}

/// Placement rejections and placement-lifecycle misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// Ship extends outside the grid.
    OutOfBounds,
    /// Ship covers a cell already taken by another ship.
    Overlap,
    /// Ship touches another ship, diagonals included.
    TooClose,
    /// Ship is already on the board; remove it before placing again.
    AlreadyPlaced(ShipKind),
    /// Ship has not been placed.
    NotPlaced(ShipKind),
}

impl From<BitBoardError> for BoardError {
    fn from(_: BitBoardError) -> Self {
        BoardError::OutOfBounds
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "ship extends outside grid boundaries"),
            BoardError::Overlap => write!(f, "ship overlaps with another ship"),
            BoardError::TooClose => write!(f, "ship too close to another vessel"),
            BoardError::AlreadyPlaced(kind) => write!(f, "{} is already placed", kind.name()),
            BoardError::NotPlaced(kind) => write!(f, "{} has not been placed", kind.name()),
        }
    }
}

/// Grid and fleet state disagree, or a bounded retry loop ran dry.
/// Fatal to the session that observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum InvariantViolation {
    /// No legal placement found for this ship within the attempt bound.
    PlacementExhausted(ShipKind),
    /// Occupancy grid marks the cell but no ship of the fleet covers it.
    PhantomHit(Coordinate),
    /// A shot resolved against a ship that was already sunk.
    HitOnSunkShip(ShipKind),
    /// Occupancy grid and fleet cells differ at this cell.
    GridMismatch(Coordinate),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::PlacementExhausted(kind) => {
                write!(f, "no legal placement found for {}", kind.name())
            }
            InvariantViolation::PhantomHit(c) => {
                write!(f, "grid marks {} occupied but no ship covers it", c)
            }
            InvariantViolation::HitOnSunkShip(kind) => {
                write!(f, "shot landed on already sunk {}", kind.name())
            }
            InvariantViolation::GridMismatch(c) => {
                write!(f, "occupancy grid disagrees with fleet at {}", c)
            }
        }
    }
}

/// Top-level error for session commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Coord(CoordError),
    Board(BoardError),
    /// Command is not valid in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// Attacker is not the side whose turn it is.
    WrongTurn,
    /// Another attack is still being applied, or the session is faulted.
    AlreadyLocked,
    /// The attacker has already fired at this cell.
    CellAlreadyFired(Coordinate),
    Internal(InvariantViolation),
}

impl From<CoordError> for GameError {
    fn from(err: CoordError) -> Self {
        GameError::Coord(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::Board(err.into())
    }
}

impl From<InvariantViolation> for GameError {
    fn from(err: InvariantViolation) -> Self {
        GameError::Internal(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Coord(e) => write!(f, "{}", e),
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase { expected, actual } => {
                write!(f, "command needs phase {:?}, game is in {:?}", expected, actual)
            }
            GameError::WrongTurn => write!(f, "not this side's turn"),
            GameError::AlreadyLocked => write!(f, "an attack is already being resolved"),
            GameError::CellAlreadyFired(c) => write!(f, "already fired at {}", c),
            GameError::Internal(e) => write!(f, "internal invariant violated: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for InvariantViolation {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
