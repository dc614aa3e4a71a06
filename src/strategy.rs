use rand::rngs::SmallRng;

use crate::board::{Board, BB};
use crate::common::GameError;
use crate::coord::Coordinate;

/// Decision-making for the scripted side.
///
/// A strategy is responsible for:
/// - Placing the whole fleet on an empty board
/// - Choosing the next cell to fire at
pub trait Strategy {
    /// Place every ship of `board`'s fleet. Must leave the fleet fully and
    /// legally placed or return an error.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError>;

    /// Pick a cell not yet in `fired`. `None` means no target was found and
    /// the turn passes without a shot.
    fn select_target(&mut self, rng: &mut SmallRng, fired: &BB) -> Option<Coordinate>;
}
