//! Calculator state and its transitions.
//!
//! ## CalculatorState
//!
//! Every transition takes the current snapshot and returns the next one.
//! Nothing is mutated in place, so observers never see a half-applied
//! keypress.
//!
//! ## Operand entry
//!
//! `waiting_for_operand` is set by an operator or equals and cleared by the
//! next digit or decimal point. While it is set, the next entry starts a
//! fresh numeral instead of appending to the display.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::number::{format_number, parse_display};
use super::operator::Operator;
use crate::core::{Result, WidgetError};

/// A single decimal digit, `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    pub fn new(value: u32) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 9)
            .map(Self)
            .ok_or(WidgetError::InvalidDigit(value))
    }

    /// Create a digit from `'0'..='9'`.
    pub fn from_char(c: char) -> Result<Self> {
        c.to_digit(10)
            .map(|v| Self(v as u8))
            .ok_or_else(|| WidgetError::UnknownKey(c.to_string()))
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9u8).map(Digit)
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete calculator state.
///
/// ## Defaults
///
/// - `display`: `"0"`
/// - `previous_value`: `None`
/// - `operation`: `None`
/// - `waiting_for_operand`: `false`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown.
    pub display: String,

    /// Operand captured before the pending operator.
    pub previous_value: Option<f64>,

    /// Operator awaiting a second operand.
    pub operation: Option<Operator>,

    /// The next digit starts a fresh numeral.
    pub waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
        }
    }
}

impl CalculatorState {
    /// Create the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display parsed as a number.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Enter one digit.
    ///
    /// A lone `"0"` display is replaced rather than prefixed.
    #[must_use]
    pub fn input_digit(&self, digit: Digit) -> Self {
        let display = if self.waiting_for_operand || self.display == "0" {
            digit.to_string()
        } else {
            let mut display = self.display.clone();
            display.push(digit.as_char());
            display
        };

        Self {
            display,
            waiting_for_operand: false,
            ..self.clone()
        }
    }

    /// Enter the decimal point. Has no effect if the numeral already has one.
    #[must_use]
    pub fn input_decimal(&self) -> Self {
        if self.waiting_for_operand {
            return Self {
                display: "0.".to_string(),
                waiting_for_operand: false,
                ..self.clone()
            };
        }

        if self.display.contains('.') {
            return self.clone();
        }

        Self {
            display: format!("{}.", self.display),
            ..self.clone()
        }
    }

    /// Select the next operator, folding any pending one into a running total.
    ///
    /// Chaining operators without equals applies the earlier operator once
    /// and then replaces it: `5 + × 3 =` gives 15.
    #[must_use]
    pub fn set_operator(&self, next: Operator) -> Self {
        let input = self.display_value();
        let mut state = self.clone();

        match (self.previous_value, self.operation) {
            (None, _) => state.previous_value = Some(input),
            (Some(previous), Some(pending)) => {
                // NaN running totals restart from zero
                let current = if previous.is_nan() { 0.0 } else { previous };
                let value = pending.apply(current, input);
                state.display = format_number(value);
                state.previous_value = Some(value);
            }
            (Some(_), None) => {}
        }

        state.waiting_for_operand = true;
        state.operation = Some(next);
        state
    }

    /// Apply the pending operator to the display.
    ///
    /// Returns `None` when no operand and operator are pending.
    #[must_use]
    pub fn equals(&self) -> Option<Self> {
        let previous = self.previous_value?;
        let pending = self.operation?;
        let value = pending.apply(previous, self.display_value());

        Some(Self {
            display: format_number(value),
            previous_value: None,
            operation: None,
            waiting_for_operand: true,
        })
    }
}
