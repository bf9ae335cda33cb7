//! Calculator engine: owns one `CalculatorState` and swaps it per keypress.

use tracing::{debug, trace};

use super::keypad::Key;
use super::operator::Operator;
use super::state::{CalculatorState, Digit};
use crate::core::Result;

/// Single-owner calculator.
///
/// ```
/// use rust_widgets::calculator::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.press_str("7 × 8 =").unwrap();
/// assert_eq!(calc.display(), "56");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured snapshot.
    #[must_use]
    pub fn from_state(state: CalculatorState) -> Self {
        Self { state }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text currently shown.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn input_digit(&mut self, digit: Digit) {
        self.state = self.state.input_digit(digit);
        debug!(%digit, display = %self.state.display, "digit entered");
    }

    pub fn input_decimal(&mut self) {
        self.state = self.state.input_decimal();
        debug!(display = %self.state.display, "decimal entered");
    }

    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        debug!("calculator cleared");
    }

    pub fn set_operator(&mut self, op: Operator) {
        self.state = self.state.set_operator(op);
        debug!(
            %op,
            display = %self.state.display,
            previous = ?self.state.previous_value,
            "operator selected"
        );
    }

    /// Resolve the pending operator. No-op when nothing is pending.
    pub fn equals(&mut self) {
        match self.state.equals() {
            Some(next) => {
                self.state = next;
                debug!(display = %self.state.display, "equals");
            }
            None => trace!("equals ignored, no pending operator"),
        }
    }

    /// Dispatch one keypad key.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
        }
    }

    /// Press a sequence of single-character keypad labels.
    ///
    /// Whitespace is skipped. Stops at the first unknown label; keys before
    /// it stay applied.
    pub fn press_str(&mut self, labels: &str) -> Result<()> {
        for c in labels.chars().filter(|c| !c.is_whitespace()) {
            self.press(Key::from_char(c)?);
        }
        Ok(())
    }
}
