//! Game configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Rock-paper-scissors configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpsConfig {
    /// Delay between the player's choice and the opponent's reveal
    /// (default: 1000 ms).
    pub reveal_delay_ms: u64,

    /// Seed for the opponent's draws when the game builds its own RNG.
    pub seed: u64,
}

impl Default for RpsConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1000,
            seed: 42,
        }
    }
}

impl RpsConfig {
    /// Reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Create a new config with custom reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
