#![cfg(feature = "std")]

//! Paces the opponent's reply on a tokio timer.
//!
//! The session itself never waits: after the player's attack it merely
//! marks the opponent's reply as due. The driver sleeps for the configured
//! settle delay and then triggers the reply through the same attack entry
//! point the player uses.

use tokio::time::sleep;

use crate::common::{AttackOutcome, GameError};
use crate::coord::Coordinate;
use crate::game::GameSession;
use crate::opponent::RandomStrategy;
use crate::strategy::Strategy;

/// Outcome of one full exchange started by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub player: AttackOutcome,
    /// `None` when the game ended on the player's shot or the opponent
    /// passed.
    pub opponent: Option<AttackOutcome>,
}

pub struct SessionDriver<S: Strategy = RandomStrategy> {
    session: GameSession<S>,
}

impl<S: Strategy> SessionDriver<S> {
    pub fn new(session: GameSession<S>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession<S> {
        &mut self.session
    }

    pub fn into_inner(self) -> GameSession<S> {
        self.session
    }

    /// Run the opponent's reply if one is due, after the settle delay.
    pub async fn settle(&mut self) -> Result<Option<AttackOutcome>, GameError> {
        if !self.session.opponent_attack_due() {
            return Ok(None);
        }
        sleep(self.session.config().settle_delay).await;
        // a restart or another caller may have acted while we slept
        if !self.session.opponent_attack_due() {
            return Ok(None);
        }
        self.session.run_opponent_turn()
    }

    /// Fire as the player, then let the opponent answer.
    pub async fn fire(&mut self, target: Coordinate) -> Result<Exchange, GameError> {
        let player = self.session.attack(target)?;
        let opponent = self.settle().await?;
        Ok(Exchange { player, opponent })
    }
}
