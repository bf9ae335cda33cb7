//! # rust-widgets
//!
//! State engines for two small interactive widgets: a four-function
//! calculator and a rock-paper-scissors game.
//!
//! ## Design Principles
//!
//! 1. **Snapshot State**: Each engine owns one state struct. Every operation
//!    builds the next snapshot and swaps it in whole.
//!
//! 2. **Total Transitions**: Engine operations never fail. Inputs that make
//!    no sense in the current state are ignored. Only parsing keypad labels
//!    or choice names can return an error.
//!
//! 3. **Injectable Time and Randomness**: The opponent's draw goes through
//!    `UniformSource` and the reveal delay through `Clock`, so tests run
//!    deterministically without sleeping.
//!
//! ## Modules
//!
//! - `core`: random sources, clocks, errors
//! - `calculator`: running-total calculator
//! - `rps`: rock-paper-scissors with delayed reveal

pub mod core;
pub mod calculator;
pub mod rps;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock,
    SeededRng, SeededRngState, ScriptedSource, UniformSource,
    Result, WidgetError,
};

pub use crate::calculator::{Calculator, CalculatorState, Digit, Key, Operator};

pub use crate::rps::{determine_winner, Choice, Outcome, RoundReport, RpsConfig, RpsGame, RpsState};
