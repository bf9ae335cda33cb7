//! Choices, outcomes, and the outcome table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::WidgetError;

/// A hand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, in the order opponent draws index into.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Does `self` beat `other`?
    #[must_use]
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }

    /// Lowercase name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Choice::Rock => "🪨",
            Choice::Paper => "📄",
            Choice::Scissors => "✂️",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Choice {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Choice::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| WidgetError::UnknownChoice(name.to_string()))
    }
}

/// Result of a round from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Banner text shown after the reveal.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Win => "🎉 You Win!",
            Outcome::Lose => "😔 You Lose!",
            Outcome::Tie => "🤝 It's a Tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome table. Total over all nine pairs.
#[must_use]
pub const fn determine_winner(player: Choice, opponent: Choice) -> Outcome {
    if player.beats(opponent) {
        Outcome::Win
    } else if opponent.beats(player) {
        Outcome::Lose
    } else {
        Outcome::Tie
    }
}
