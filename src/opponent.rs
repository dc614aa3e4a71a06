//! The scripted opponent: uniform random placement and targeting, each
//! with a bounded number of retries.

use rand::Rng;
use rand::rngs::SmallRng;

use crate::board::{Board, BB};
use crate::common::{GameError, InvariantViolation};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, MAX_TARGETING_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, ShipKind};
use crate::strategy::Strategy;

const GRID: usize = BOARD_SIZE as usize;

fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    Coordinate::nth(rng.random_range(0..GRID * GRID))
}

/// Try random anchors and orientations for `kind` until one is legal.
/// Anchors are drawn from the whole board, so samples that run off the
/// edge count against the attempt bound like any other rejection.
pub fn place_ship_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    kind: ShipKind,
) -> Result<(), GameError> {
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let anchor = random_cell(rng);
        if board.place(kind, anchor, orientation).is_ok() {
            log::trace!("{} placed after {} attempts", kind, attempt);
            return Ok(());
        }
    }
    log::error!("no legal placement for {} in {} attempts", kind, MAX_PLACEMENT_ATTEMPTS);
    Err(InvariantViolation::PlacementExhausted(kind).into())
}

/// Place every unplaced ship of the fleet, largest first.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
) -> Result<(), GameError> {
    for kind in FLEET {
        if !board.ship(kind).is_placed() {
            place_ship_randomly(rng, board, kind)?;
        }
    }
    Ok(())
}

/// Sample cells until one outside `fired` turns up, at most
/// [`MAX_TARGETING_ATTEMPTS`] times.
pub fn select_random_target<R: Rng + ?Sized>(rng: &mut R, fired: &BB) -> Option<Coordinate> {
    (0..MAX_TARGETING_ATTEMPTS)
        .map(|_| random_cell(rng))
        .find(|cell| !fired.get(cell.row(), cell.col()).unwrap_or(true))
}

/// The single opponent strategy: everything uniformly at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        place_fleet_randomly(rng, board)
    }

    fn select_target(&mut self, rng: &mut SmallRng, fired: &BB) -> Option<Coordinate> {
        select_random_target(rng, fired)
    }
}
