//! Rock-paper-scissors rounds with a delayed reveal.
//!
//! ## Round lifecycle
//!
//! 1. `play_round` records the player's choice and schedules the reveal
//!    `reveal_delay` after the current clock time.
//! 2. `poll` reveals once the clock has passed the deadline;
//!    `resolve_round` reveals immediately.
//!
//! Between the two, `round_in_progress` is set and further `play_round`
//! calls are ignored. Once the deadline passes, the next `poll` always
//! resolves the round.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::choice::{determine_winner, Choice, Outcome};
use super::config::RpsConfig;
use crate::core::{Clock, SeededRng, SystemClock, UniformSource};

/// Complete game state.
///
/// ## Defaults
///
/// No choices, no result, zero scores, no round in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsState {
    /// Player's choice for the current or last round.
    pub player_choice: Option<Choice>,

    /// Opponent's choice. `None` until the reveal.
    pub opponent_choice: Option<Choice>,

    /// Outcome of the last revealed round.
    pub result: Option<Outcome>,

    pub player_score: u32,
    pub opponent_score: u32,

    /// Rounds revealed since the last score reset.
    pub rounds_played: u32,

    /// Set between the player's choice and the reveal.
    pub round_in_progress: bool,
}

impl RpsState {
    /// Create the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Revealed rounds that neither side won.
    #[must_use]
    pub fn ties(&self) -> u32 {
        self.rounds_played
            .saturating_sub(self.player_score)
            .saturating_sub(self.opponent_score)
    }

    /// Begin a round. `None` if one is already in progress.
    #[must_use]
    pub fn start_round(&self, choice: Choice) -> Option<Self> {
        if self.round_in_progress {
            return None;
        }

        Some(Self {
            player_choice: Some(choice),
            opponent_choice: None,
            result: None,
            round_in_progress: true,
            ..self.clone()
        })
    }

    /// Reveal the in-progress round against `opponent`.
    ///
    /// `None` if no round is in progress.
    #[must_use]
    pub fn resolve_round(&self, opponent: Choice) -> Option<(Self, RoundReport)> {
        if !self.round_in_progress {
            return None;
        }
        let player = self.player_choice?;
        let outcome = determine_winner(player, opponent);

        let mut next = self.clone();
        next.opponent_choice = Some(opponent);
        next.result = Some(outcome);
        next.round_in_progress = false;
        next.rounds_played = next.rounds_played.saturating_add(1);
        match outcome {
            Outcome::Win => next.player_score = next.player_score.saturating_add(1),
            Outcome::Lose => next.opponent_score = next.opponent_score.saturating_add(1),
            Outcome::Tie => {}
        }

        Some((
            next,
            RoundReport {
                player,
                opponent,
                outcome,
            },
        ))
    }

    /// Clear the round fields, keeping scores.
    #[must_use]
    pub fn play_again(&self) -> Self {
        Self {
            player_choice: None,
            opponent_choice: None,
            result: None,
            round_in_progress: false,
            ..self.clone()
        }
    }
}

/// What happened in one revealed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub player: Choice,
    pub opponent: Choice,
    pub outcome: Outcome,
}

/// Rock-paper-scissors game against a random opponent.
///
/// Generic over the opponent's random source and the clock that times the
/// reveal, so both can be replaced in tests.
///
/// ```
/// use std::time::Duration;
/// use rust_widgets::core::{ManualClock, ScriptedSource};
/// use rust_widgets::rps::{Choice, Outcome, RpsConfig, RpsGame};
///
/// let clock = ManualClock::new();
/// // index 2 = scissors
/// let mut game = RpsGame::with_parts(RpsConfig::default(), ScriptedSource::new(vec![2]), clock.clone());
///
/// assert!(game.play_round(Choice::Rock));
/// assert!(game.poll().is_none());
///
/// clock.advance(Duration::from_secs(1));
/// let report = game.poll().unwrap();
/// assert_eq!(report.outcome, Outcome::Win);
/// assert_eq!(game.state().player_score, 1);
/// ```
#[derive(Clone, Debug)]
pub struct RpsGame<S = SeededRng, C = SystemClock> {
    config: RpsConfig,
    state: RpsState,
    source: S,
    clock: C,
    reveal_at: Option<Duration>,
}

impl RpsGame {
    /// Create a game with a seeded RNG and the system clock.
    #[must_use]
    pub fn new(config: RpsConfig) -> Self {
        let source = SeededRng::new(config.seed);
        Self::with_parts(config, source, SystemClock::new())
    }
}

impl Default for RpsGame {
    fn default() -> Self {
        Self::new(RpsConfig::default())
    }
}

impl<S: UniformSource, C: Clock> RpsGame<S, C> {
    /// Create a game with explicit random source and clock.
    #[must_use]
    pub fn with_parts(config: RpsConfig, source: S, clock: C) -> Self {
        Self {
            config,
            state: RpsState::default(),
            source,
            clock,
            reveal_at: None,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &RpsState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &RpsConfig {
        &self.config
    }

    /// Clock time at which the pending round reveals.
    #[must_use]
    pub fn reveal_at(&self) -> Option<Duration> {
        self.reveal_at
    }

    /// Has the pending round's deadline passed?
    #[must_use]
    pub fn is_reveal_due(&self) -> bool {
        self.reveal_at.is_some_and(|at| self.clock.now() >= at)
    }

    /// Start a round with the player's choice.
    ///
    /// Returns `false` and changes nothing if a round is already in progress.
    pub fn play_round(&mut self, choice: Choice) -> bool {
        let Some(next) = self.state.start_round(choice) else {
            trace!(%choice, "round already in progress, choice ignored");
            return false;
        };

        let reveal_at = self.clock.now().saturating_add(self.config.reveal_delay());
        self.state = next;
        self.reveal_at = Some(reveal_at);
        debug!(%choice, reveal_at_ms = reveal_at.as_millis() as u64, "round started");
        true
    }

    /// Reveal the pending round if its deadline has passed.
    pub fn poll(&mut self) -> Option<RoundReport> {
        if self.is_reveal_due() {
            self.resolve_round()
        } else {
            None
        }
    }

    /// Reveal the pending round now, regardless of the clock.
    ///
    /// Returns `None` if no round is in progress.
    pub fn resolve_round(&mut self) -> Option<RoundReport> {
        if !self.state.round_in_progress {
            return None;
        }

        let opponent = Choice::ALL[self.source.next_index(Choice::ALL.len())];
        let (next, report) = self.state.resolve_round(opponent)?;
        self.state = next;
        self.reveal_at = None;

        debug!(
            player = %report.player,
            opponent = %report.opponent,
            outcome = ?report.outcome,
            player_score = self.state.player_score,
            opponent_score = self.state.opponent_score,
            "round revealed"
        );
        Some(report)
    }

    /// Clear the round, keeping scores. Drops any pending reveal.
    pub fn play_again(&mut self) {
        self.state = self.state.play_again();
        self.reveal_at = None;
        debug!("round cleared");
    }

    /// Clear everything including scores. Drops any pending reveal.
    pub fn reset_score(&mut self) {
        self.state = RpsState::default();
        self.reveal_at = None;
        debug!("scores reset");
    }
}
