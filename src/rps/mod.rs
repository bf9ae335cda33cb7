//! Rock-paper-scissors against a random opponent.
//!
//! - `Choice`, `Outcome`, `determine_winner`: the fixed outcome table
//! - `RpsState`: choices, result, cumulative scores
//! - `RpsGame`: runs rounds with a delayed opponent reveal
//! - `RpsConfig`: reveal delay and RNG seed

mod choice;
mod config;
mod game;

pub use choice::{determine_winner, Choice, Outcome};
pub use config::RpsConfig;
pub use game::{RoundReport, RpsGame, RpsState};
