//! Keypad keys and their labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::operator::Operator;
use super::state::Digit;
use crate::core::{Result, WidgetError};

/// One key on the calculator keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    /// The `=` key. Resolves the pending operator instead of queueing one.
    Equals,
    Clear,
}

impl Key {
    /// Parse a single-character keypad label.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '0'..='9' => Digit::from_char(c).map(Key::Digit),
            '.' => Ok(Key::Decimal),
            '=' => Ok(Key::Equals),
            'C' | 'c' => Ok(Key::Clear),
            other => {
                let mut buf = [0u8; 4];
                other
                    .encode_utf8(&mut buf)
                    .parse::<Operator>()
                    .map(Key::Operator)
                    .map_err(|_| WidgetError::UnknownKey(other.to_string()))
            }
        }
    }
}

impl From<Digit> for Key {
    fn from(digit: Digit) -> Self {
        Key::Digit(digit)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Equals => Key::Equals,
            op => Key::Operator(op),
        }
    }
}

impl FromStr for Key {
    type Err = WidgetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("clear") {
            return Ok(Key::Clear);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::from_char(c),
            _ => Err(WidgetError::UnknownKey(label.to_string())),
        }
    }
}
