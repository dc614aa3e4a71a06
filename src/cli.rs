#![cfg(feature = "std")]

//! Line-oriented terminal front end: command parsing and the play loop.

use std::io::{BufRead, Write};

use crate::config::ship_kind_named;
use crate::coord::{parse_label, Coordinate};
use crate::driver::SessionDriver;
use crate::game::Phase;
use crate::ship::{Orientation, ShipKind};
use crate::strategy::Strategy;
use crate::ui;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place {
        kind: ShipKind,
        anchor: Coordinate,
        orientation: Orientation,
    },
    Remove(ShipKind),
    Random,
    Confirm,
    Start,
    Fire(Coordinate),
    Status,
    Restart,
    Help,
    Quit,
}

fn parse_kind(word: Option<&str>) -> Result<ShipKind, String> {
    let word = word.ok_or("Missing ship name (carrier, battleship, destroyer, submarine, patrol)")?;
    ship_kind_named(word).ok_or_else(|| format!("Unknown ship '{}'", word))
}

fn parse_coord(word: Option<&str>) -> Result<Coordinate, String> {
    let word = word.ok_or("Missing coordinate (e.g. B7)")?;
    parse_label(&word.to_ascii_uppercase()).map_err(|e| format!("'{}': {}", word, e))
}

fn parse_orientation(word: Option<&str>) -> Result<Orientation, String> {
    match word.map(|w| w.to_ascii_lowercase()).as_deref() {
        None | Some("h") | Some("horizontal") => Ok(Orientation::Horizontal),
        Some("v") | Some("vertical") => Ok(Orientation::Vertical),
        Some(other) => Err(format!("Orientation must be H or V, got '{}'", other)),
    }
}

/// Parse one input line. Orientation defaults to horizontal; coordinates
/// are case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or("Empty input")?.to_ascii_lowercase();
    let command = match verb.as_str() {
        "place" | "p" => Command::Place {
            kind: parse_kind(words.next())?,
            anchor: parse_coord(words.next())?,
            orientation: parse_orientation(words.next())?,
        },
        "remove" | "rm" => Command::Remove(parse_kind(words.next())?),
        "random" => Command::Random,
        "confirm" => Command::Confirm,
        "start" => Command::Start,
        "fire" | "f" => Command::Fire(parse_coord(words.next())?),
        "status" | "s" => Command::Status,
        "restart" => Command::Restart,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        // a bare coordinate fires at it
        _ => Command::Fire(parse_coord(Some(verb.as_str()))?),
    };
    if words.next().is_some() {
        return Err("Too many words".to_string());
    }
    Ok(command)
}

const HELP: &str = "\
Commands:
  place <ship> <cell> [h|v]   put a ship down, e.g. 'place carrier A1 h'
  remove <ship>               pick a placed ship back up
  random                      place the whole fleet at random
  confirm                     lock your placement
  start                       begin the battle
  fire <cell> | <cell>        shoot at the enemy board, e.g. 'fire C7' or 'C7'
  status                      show boards and fleet
  restart                     abandon this game and start over
  quit                        leave
Ships: carrier(5) battleship(4) destroyer(3) submarine(3) patrol(2)";

fn show_boards<S: Strategy, W: Write>(driver: &SessionDriver<S>, out: &mut W) -> std::io::Result<()> {
    let session = driver.session();
    if matches!(session.phase(), Phase::InBattle | Phase::Over) {
        writeln!(out, "Enemy waters:")?;
        write!(out, "{}", ui::render_target_board(session.opponent_board()))?;
    }
    writeln!(out, "Your fleet:")?;
    write!(out, "{}", ui::render_own_board(session.player_board()))?;
    write!(out, "{}", ui::render_fleet(session.player_board()))?;
    Ok(())
}

fn flush_events<S: Strategy, W: Write>(driver: &mut SessionDriver<S>, out: &mut W) -> std::io::Result<()> {
    for event in driver.session_mut().drain_events() {
        if let Some(line) = ui::describe_event(&event) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn prompt<S: Strategy>(driver: &SessionDriver<S>) -> &'static str {
    match driver.session().phase() {
        Phase::Placing => "place> ",
        Phase::Placed => "ready (start)> ",
        Phase::InBattle => "fire> ",
        Phase::Over => "game over (restart/quit)> ",
    }
}

/// Read commands from `input` until `quit` or end of input.
pub async fn run_interactive<S, R, W>(
    driver: &mut SessionDriver<S>,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", HELP)?;
    loop {
        write!(out, "{}", prompt(driver))?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };
        let result = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                Ok(())
            }
            Command::Status => {
                show_boards(driver, &mut out)?;
                Ok(())
            }
            Command::Place {
                kind,
                anchor,
                orientation,
            } => driver.session_mut().place_ship(kind, anchor, orientation),
            Command::Remove(kind) => driver.session_mut().unplace_ship(kind),
            Command::Random => driver.session_mut().randomize_player_fleet(),
            Command::Confirm => driver.session_mut().confirm_placement(),
            Command::Start => driver.session_mut().start_battle(),
            Command::Restart => {
                driver.session_mut().restart();
                Ok(())
            }
            Command::Fire(target) => driver.fire(target).await.map(|_| ()),
        };
        flush_events(driver, &mut out)?;
        if let Err(e) = result {
            writeln!(out, "{}", e)?;
        } else if matches!(
            command,
            Command::Place { .. } | Command::Random | Command::Start | Command::Fire(_)
        ) {
            show_boards(driver, &mut out)?;
        }
    }
    Ok(())
}
