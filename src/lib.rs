#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
pub mod coord;
pub mod domain;
mod fleet;
mod game;
mod opponent;
mod ship;
mod strategy;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod driver;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::{in_bounds, parse_label, to_label, Coordinate};
pub use domain::{accuracy_percent, GameEvent, GameStats, Outcome, ShipStatus};
pub use fleet::Fleet;
pub use game::*;
pub use opponent::*;
pub use ship::*;
pub use strategy::Strategy;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
