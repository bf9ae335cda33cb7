//! Four-function calculator with running-total semantics.
//!
//! - `CalculatorState`: display, pending operand/operator, entry flag
//! - `Calculator`: single owner that applies keypresses to the state
//! - `Key`: keypad labels parsed into commands
//!
//! There is no operator precedence: each operator is applied as soon as the
//! next one is chosen.

mod engine;
mod keypad;
mod number;
mod operator;
mod state;

pub use engine::Calculator;
pub use keypad::Key;
pub use number::{format_number, parse_display};
pub use operator::Operator;
pub use state::{CalculatorState, Digit};
