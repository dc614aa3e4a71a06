#![cfg(feature = "std")]

//! Plain-text rendering of boards and statistics for the terminal front end.

use std::fmt::Write;

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::common::AttackOutcome;
use crate::domain::{GameEvent, GameStats, Outcome};
use crate::game::Side;

const GRID: usize = BOARD_SIZE as usize;

fn render_grid<F>(out: &mut String, cell_char: F)
where
    F: Fn(Coordinate) -> char,
{
    let _ = writeln!(out, "    ╔═══════════════════════╗");
    let _ = write!(out, "    ║  ");
    for c in 0..GRID {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠═══════════════════════╣");
    for r in 0..GRID {
        let _ = write!(out, "    ║ {:2}", r + 1);
        for c in 0..GRID {
            let cell = Coordinate::nth(r * GRID + c);
            let _ = write!(out, " {}", cell_char(cell));
        }
        let _ = writeln!(out, " ║");
    }
    let _ = writeln!(out, "    ╚═══════════════════════╝");
}

fn sunk_at(board: &Board, cell: Coordinate) -> bool {
    board
        .occupant(cell)
        .map(|kind| board.ship(kind).is_sunk())
        .unwrap_or(false)
}

/// The human's own board with every ship visible.
pub fn render_own_board(board: &Board) -> String {
    let mut out = String::new();
    render_grid(&mut out, |cell| {
        let (r, c) = cell.indices();
        if sunk_at(board, cell) {
            '#'
        } else if board.hits().get(r, c).unwrap_or(false) {
            'X'
        } else if board.misses().get(r, c).unwrap_or(false) {
            'o'
        } else if board.occupant(cell).is_some() {
            'S'
        } else {
            '.'
        }
    });
    let _ = writeln!(out, "    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water");
    out
}

/// The opponent's board as the human sees it: shots and sunk ships only.
pub fn render_target_board(board: &Board) -> String {
    let mut out = String::new();
    render_grid(&mut out, |cell| {
        let (r, c) = cell.indices();
        if sunk_at(board, cell) {
            '#'
        } else if board.hits().get(r, c).unwrap_or(false) {
            'X'
        } else if board.misses().get(r, c).unwrap_or(false) {
            'o'
        } else {
            '.'
        }
    });
    let _ = writeln!(out, "    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown");
    out
}

/// One line per ship: name, size, health and placement.
pub fn render_fleet(board: &Board) -> String {
    let mut out = String::new();
    for ship in board.fleet().ships() {
        let kind = ship.kind();
        let state = if ship.is_sunk() {
            "SUNK".to_string()
        } else {
            format!("{}/{}", ship.current_health(), ship.max_health())
        };
        let position = match (ship.occupied_cells().first(), ship.orientation()) {
            (Some(anchor), Some(orientation)) => format!("{} {:?}", anchor, orientation),
            _ => "not placed".to_string(),
        };
        let _ = writeln!(
            out,
            "      {:<11} {:<12} ({}): {:<5} {}",
            kind.display_name(),
            kind.name(),
            kind.size(),
            state,
            position
        );
    }
    out
}

pub fn render_stats(stats: &GameStats) -> String {
    format!(
        "Enemy vessels destroyed: {}/5\nYour vessels destroyed: {}/5\nBattle rounds: {}\nAccuracy: {}% ({} hits / {} shots)\n",
        stats.opponent_ships_sunk,
        stats.player_ships_sunk,
        stats.turns,
        stats.accuracy,
        stats.player_hits,
        stats.player_shots
    )
}

/// One-line description of an event, or `None` for bookkeeping events the
/// terminal does not announce.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    let text = match event {
        GameEvent::PlacementAccepted { kind, anchor, orientation } => format!(
            "{} placed at {} ({:?})",
            kind.display_name(),
            anchor,
            orientation
        ),
        GameEvent::PlacementRejected { kind, reason } => {
            format!("Cannot place {}: {}", kind.display_name(), reason)
        }
        GameEvent::ShipRemoved { kind } => format!("{} removed", kind.display_name()),
        GameEvent::PlacementConfirmed => "Placement confirmed! Ships are locked.".to_string(),
        GameEvent::BattleStarted => "Battle begins!".to_string(),
        GameEvent::AttackResolved {
            attacker,
            target,
            outcome,
        } => {
            let who = match attacker {
                Side::Player => "You fire",
                Side::Opponent => "Enemy fires",
            };
            let what = match outcome {
                AttackOutcome::Miss => "miss".to_string(),
                AttackOutcome::Hit(_) => "HIT".to_string(),
                AttackOutcome::Sunk(kind) => format!("{} destroyed!", kind.display_name()),
            };
            format!("{} at {}: {}", who, target, what)
        }
        GameEvent::OpponentPassed => "The enemy holds fire.".to_string(),
        GameEvent::GameOver { outcome, stats } => {
            let banner = match outcome {
                Outcome::Win => "VICTORY! The sea is yours.",
                Outcome::Lose => "DEFEAT. Your fleet is destroyed.",
            };
            format!("{}\n{}", banner, render_stats(stats))
        }
        GameEvent::Restarted => "New game. Place your fleet.".to_string(),
        GameEvent::TurnChanged { .. } | GameEvent::OpponentAttackScheduled { .. } => {
            return None
        }
    };
    Some(text)
}
