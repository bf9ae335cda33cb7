//! Errors raised while turning user input into engine commands.
//!
//! Engine transitions themselves are total; only parsing can fail.

use thiserror::Error;

/// Result type for input parsing.
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Errors that can occur when parsing widget input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Digit value outside `0..=9`.
    #[error("invalid digit: {0}")]
    InvalidDigit(u32),

    /// Keypad label that maps to no key.
    #[error("unknown calculator key: {0:?}")]
    UnknownKey(String),

    /// Operator symbol that maps to no operator.
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Name that is not rock, paper or scissors.
    #[error("unknown choice: {0:?}")]
    UnknownChoice(String),
}
