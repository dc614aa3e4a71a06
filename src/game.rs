//! The game session: placement lifecycle, the turn-taking attack state
//! machine and win detection.
//!
//! A session moves `Placing → Placed → InBattle → Over` and can be sent
//! back to a fresh `Placing` state with [`GameSession::restart`]. All
//! state changes go through the command methods; front ends observe the
//! result through the query methods and the queued [`GameEvent`]s.

use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError, GameError, InvariantViolation};
use crate::config::SessionConfig;
use crate::coord::Coordinate;
use crate::domain::{accuracy_percent, GameEvent, GameStats, Outcome, ShipStatus};
use crate::opponent::{place_fleet_randomly, RandomStrategy};
use crate::ship::{Orientation, ShipKind};
use crate::strategy::Strategy;

/// Lifecycle stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The human is arranging the fleet.
    Placing,
    /// Placement confirmed and locked; waiting for battle to start.
    Placed,
    InBattle,
    Over,
}

/// One of the two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// A single game between the human player and the scripted opponent.
pub struct GameSession<S: Strategy = RandomStrategy> {
    config: SessionConfig,
    rng: SmallRng,
    strategy: S,
    phase: Phase,
    turn: Side,
    turn_locked: bool,
    player: Board,
    opponent: Board,
    player_hits: u32,
    player_shots: u32,
    opponent_hits: u32,
    opponent_shots: u32,
    turns: u32,
    outcome: Option<Outcome>,
    fault: Option<InvariantViolation>,
    events: Vec<GameEvent>,
}

impl GameSession<RandomStrategy> {
    /// Session against the random opponent with default settings.
    pub fn new(rng: SmallRng) -> Self {
        Self::with_strategy(SessionConfig::default(), rng, RandomStrategy::new())
    }

    /// Reproducible session: the same seed and the same commands give the
    /// same game.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Session seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<S: Strategy> GameSession<S> {
    pub fn with_strategy(config: SessionConfig, rng: SmallRng, strategy: S) -> Self {
        Self {
            config,
            rng,
            strategy,
            phase: Phase::Placing,
            turn: Side::Player,
            turn_locked: false,
            player: Board::new(),
            opponent: Board::new(),
            player_hits: 0,
            player_shots: 0,
            opponent_hits: 0,
            opponent_shots: 0,
            turns: 0,
            outcome: None,
            fault: None,
            events: Vec::new(),
        }
    }

    // ---- queries -------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to move. Only meaningful while in battle.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn is_turn_locked(&self) -> bool {
        self.turn_locked
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The human's board: own fleet plus the opponent's shots.
    pub fn player_board(&self) -> &Board {
        &self.player
    }

    /// The opponent's board. Front ends should only reveal its shots and
    /// sunk ships.
    pub fn opponent_board(&self) -> &Board {
        &self.opponent
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn ship_status(&self, side: Side, kind: ShipKind) -> ShipStatus {
        ShipStatus::from(self.board(side).ship(kind))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The invariant violation that stopped this session, if any.
    pub fn fault(&self) -> Option<InvariantViolation> {
        self.fault
    }

    /// True while the opponent's scheduled reply has not yet run.
    pub fn opponent_attack_due(&self) -> bool {
        self.phase == Phase::InBattle && self.turn == Side::Opponent && !self.turn_locked
    }

    /// Player hit rate in whole percent.
    pub fn accuracy(&self) -> u32 {
        accuracy_percent(self.player_hits, self.player_shots)
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            opponent_ships_sunk: self.opponent.fleet().sunk_count(),
            player_ships_sunk: self.player.fleet().sunk_count(),
            turns: self.turns,
            accuracy: self.accuracy(),
            player_hits: self.player_hits,
            player_shots: self.player_shots,
            opponent_hits: self.opponent_hits,
            opponent_shots: self.opponent_shots,
        }
    }

    /// Win detection from the fleets alone; calling it never changes state.
    pub fn check_win_condition(&self) -> Option<Outcome> {
        if self.opponent.all_placed() && self.opponent.fleet().all_sunk() {
            Some(Outcome::Win)
        } else if self.player.all_placed() && self.player.fleet().all_sunk() {
            Some(Outcome::Lose)
        } else {
            None
        }
    }

    /// Events queued since the last drain, oldest first.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    // ---- placement -----------------------------------------------------

    fn require_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Place one of the human's ships.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.require_phase(Phase::Placing)?;
        match self.player.place(kind, anchor, orientation) {
            Ok(()) => {
                self.events.push(GameEvent::PlacementAccepted {
                    kind,
                    anchor,
                    orientation,
                });
                Ok(())
            }
            Err(reason) => {
                log::warn!("placement of {} at {} rejected: {}", kind, anchor, reason);
                self.events
                    .push(GameEvent::PlacementRejected { kind, reason });
                Err(reason.into())
            }
        }
    }

    /// Take one of the human's ships back off the board.
    pub fn unplace_ship(&mut self, kind: ShipKind) -> Result<(), GameError> {
        self.require_phase(Phase::Placing)?;
        self.player.unplace(kind)?;
        self.events.push(GameEvent::ShipRemoved { kind });
        Ok(())
    }

    /// Replace the human's arrangement with a random legal one.
    pub fn randomize_player_fleet(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Placing)?;
        let mut board = Board::new();
        place_fleet_randomly(&mut self.rng, &mut board)?;
        for ship in board.fleet().ships() {
            if let (Some(&anchor), Some(orientation)) =
                (ship.occupied_cells().first(), ship.orientation())
            {
                self.events.push(GameEvent::PlacementAccepted {
                    kind: ship.kind(),
                    anchor,
                    orientation,
                });
            }
        }
        self.player = board;
        Ok(())
    }

    /// Lock the human's arrangement. Every ship must be placed.
    pub fn confirm_placement(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Placing)?;
        if let Some(kind) = self.player.fleet().first_unplaced() {
            return Err(BoardError::NotPlaced(kind).into());
        }
        self.phase = Phase::Placed;
        self.events.push(GameEvent::PlacementConfirmed);
        log::debug!("placement confirmed");
        Ok(())
    }

    // ---- battle --------------------------------------------------------

    fn record_fault(&mut self, violation: InvariantViolation) -> GameError {
        log::error!("session halted: {}", violation);
        self.fault = Some(violation);
        self.turn_locked = true;
        violation.into()
    }

    /// Place the opponent's fleet and hand the first move to the player.
    pub fn start_battle(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Placed)?;
        if let Some(violation) = self.fault {
            return Err(violation.into());
        }
        if let Err(violation) = self.player.verify_consistency() {
            return Err(self.record_fault(violation));
        }

        let mut board = Board::new();
        if let Err(err) = self.strategy.place_fleet(&mut self.rng, &mut board) {
            let violation = match err {
                GameError::Internal(violation) => violation,
                other => {
                    log::warn!("opponent placement failed: {}", other);
                    let kind = board.fleet().first_unplaced().unwrap_or(ShipKind::Carrier);
                    InvariantViolation::PlacementExhausted(kind)
                }
            };
            return Err(self.record_fault(violation));
        }
        if let Some(kind) = board.fleet().first_unplaced() {
            return Err(self.record_fault(InvariantViolation::PlacementExhausted(kind)));
        }
        if let Err(violation) = board.verify_consistency() {
            return Err(self.record_fault(violation));
        }

        self.opponent = board;
        self.phase = Phase::InBattle;
        self.turn = Side::Player;
        self.turn_locked = false;
        self.events.push(GameEvent::BattleStarted);
        self.events.push(GameEvent::TurnChanged { turn: Side::Player });
        log::info!("battle started");
        Ok(())
    }

    /// Fire at the opponent's board as the human player.
    pub fn attack(&mut self, target: Coordinate) -> Result<AttackOutcome, GameError> {
        self.attack_as(target, Side::Player)
    }

    /// Fire at `attacker`'s opponent. Both sides go through here; callers
    /// outside the session reach it only as the player, through
    /// [`GameSession::attack`], or as the opponent's strategy, through
    /// [`GameSession::run_opponent_turn`].
    ///
    /// Rejections leave the session untouched. An accepted attack runs to
    /// completion: the shot is recorded, damage applied, the win condition
    /// checked and either the game ends or the turn passes.
    fn attack_as(
        &mut self,
        target: Coordinate,
        attacker: Side,
    ) -> Result<AttackOutcome, GameError> {
        self.require_phase(Phase::InBattle)?;
        if self.turn != attacker {
            return Err(GameError::WrongTurn);
        }
        if self.turn_locked {
            return Err(GameError::AlreadyLocked);
        }
        let defender = match attacker {
            Side::Player => &mut self.opponent,
            Side::Opponent => &mut self.player,
        };
        if defender.has_been_fired_at(target) {
            return Err(GameError::CellAlreadyFired(target));
        }

        self.turn_locked = true;
        let outcome = match defender.receive_fire(target) {
            Ok(outcome) => outcome,
            Err(GameError::Internal(violation)) => return Err(self.record_fault(violation)),
            Err(other) => {
                self.turn_locked = false;
                return Err(other);
            }
        };

        let hit = outcome.is_hit() as u32;
        match attacker {
            Side::Player => {
                self.player_shots += 1;
                self.player_hits += hit;
            }
            Side::Opponent => {
                self.opponent_shots += 1;
                self.opponent_hits += hit;
            }
        }
        log::debug!("{:?} fired at {}: {:?}", attacker, target, outcome);
        self.events.push(GameEvent::AttackResolved {
            attacker,
            target,
            outcome,
        });

        match self.check_win_condition() {
            Some(result) => self.finish(result),
            None => self.switch_turn(),
        }
        Ok(outcome)
    }

    /// Run the opponent's scheduled reply: the strategy picks the target and
    /// the shot follows the same rules as [`GameSession::attack`]. If no
    /// untried cell turns up within the targeting bound the opponent passes
    /// and `Ok(None)` is returned.
    pub fn run_opponent_turn(&mut self) -> Result<Option<AttackOutcome>, GameError> {
        self.require_phase(Phase::InBattle)?;
        if self.turn != Side::Opponent {
            return Err(GameError::WrongTurn);
        }
        if self.turn_locked {
            return Err(GameError::AlreadyLocked);
        }
        let fired = self.player.shots();
        match self.strategy.select_target(&mut self.rng, &fired) {
            Some(target) => self.attack_as(target, Side::Opponent).map(Some),
            None => {
                log::warn!("opponent found no target; turn passes");
                self.events.push(GameEvent::OpponentPassed);
                self.switch_turn();
                Ok(None)
            }
        }
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.other();
        self.turn_locked = false;
        if self.turn == Side::Player {
            self.turns += 1;
        }
        log::debug!("turn passes to {:?}", self.turn);
        self.events.push(GameEvent::TurnChanged { turn: self.turn });
        if self.turn == Side::Opponent {
            self.events.push(GameEvent::OpponentAttackScheduled {
                delay_ms: self.config.settle_delay.as_millis() as u64,
            });
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Over;
        self.outcome = Some(outcome);
        self.turn_locked = false;
        let stats = self.stats();
        log::info!(
            "game over: {:?} after {} turns, accuracy {}%",
            outcome,
            stats.turns,
            stats.accuracy
        );
        self.events.push(GameEvent::GameOver { outcome, stats });
    }

    /// Throw the current game away and start placing again. Events not yet
    /// drained stay queued ahead of [`GameEvent::Restarted`], so a final
    /// `GameOver` is never lost.
    pub fn restart(&mut self) {
        self.phase = Phase::Placing;
        self.turn = Side::Player;
        self.turn_locked = false;
        self.player = Board::new();
        self.opponent = Board::new();
        self.player_hits = 0;
        self.player_shots = 0;
        self.opponent_hits = 0;
        self.opponent_shots = 0;
        self.turns = 0;
        self.outcome = None;
        self.fault = None;
        self.events.push(GameEvent::Restarted);
        log::info!("session restarted");
    }
}
