//! Rock-paper-scissors integration tests.
//!
//! Rounds are driven with a manual clock and scripted or seeded opponents,
//! so every reveal is deterministic and no test sleeps.

use std::time::Duration;

use proptest::prelude::*;
use rust_widgets::core::{ManualClock, ScriptedSource, SeededRng};
use rust_widgets::rps::{determine_winner, Choice, Outcome, RpsConfig, RpsGame, RpsState};

fn game_with_script(script: Vec<usize>) -> (RpsGame<ScriptedSource, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let game = RpsGame::with_parts(
        RpsConfig::default(),
        ScriptedSource::new(script),
        clock.clone(),
    );
    (game, clock)
}

/// Play one full round, advancing the clock past the reveal delay.
fn play<S: rust_widgets::UniformSource>(
    game: &mut RpsGame<S, ManualClock>,
    clock: &ManualClock,
    choice: Choice,
) -> Outcome {
    assert!(game.play_round(choice));
    clock.advance(game.config().reveal_delay());
    game.poll().expect("round should reveal after the delay").outcome
}

// =============================================================================
// Outcome Table
// =============================================================================

#[test]
fn test_same_choice_ties() {
    for c in Choice::ALL {
        assert_eq!(determine_winner(c, c), Outcome::Tie);
    }
}

#[test]
fn test_winning_pairs() {
    assert_eq!(determine_winner(Choice::Rock, Choice::Scissors), Outcome::Win);
    assert_eq!(determine_winner(Choice::Paper, Choice::Rock), Outcome::Win);
    assert_eq!(determine_winner(Choice::Scissors, Choice::Paper), Outcome::Win);
}

// =============================================================================
// Rounds
// =============================================================================

#[test]
fn test_scripted_match() {
    // opponent: rock, paper, scissors, rock
    let (mut game, clock) = game_with_script(vec![0, 1, 2, 0]);

    assert_eq!(play(&mut game, &clock, Choice::Paper), Outcome::Win);
    assert_eq!(play(&mut game, &clock, Choice::Rock), Outcome::Lose);
    assert_eq!(play(&mut game, &clock, Choice::Scissors), Outcome::Tie);
    assert_eq!(play(&mut game, &clock, Choice::Paper), Outcome::Win);

    let state = game.state();
    assert_eq!(state.player_score, 2);
    assert_eq!(state.opponent_score, 1);
    assert_eq!(state.rounds_played, 4);
    assert_eq!(state.ties(), 1);
    assert_eq!(state.opponent_choice, Some(Choice::Rock));
    assert_eq!(state.result, Some(Outcome::Win));
}

#[test]
fn test_custom_reveal_delay() {
    let clock = ManualClock::new();
    let config = RpsConfig::default().with_reveal_delay(Duration::from_millis(200));
    let mut game = RpsGame::with_parts(config, ScriptedSource::new(vec![0]), clock.clone());

    game.play_round(Choice::Rock);
    clock.advance(Duration::from_millis(199));
    assert!(game.poll().is_none());
    clock.advance(Duration::from_millis(1));
    assert_eq!(game.poll().unwrap().outcome, Outcome::Tie);
}

#[test]
fn test_zero_delay_reveals_on_first_poll() {
    let clock = ManualClock::new();
    let config = RpsConfig::default().with_reveal_delay(Duration::ZERO);
    let mut game = RpsGame::with_parts(config, ScriptedSource::new(vec![1]), clock);

    game.play_round(Choice::Scissors);
    assert!(game.is_reveal_due());
    assert_eq!(game.poll().unwrap().outcome, Outcome::Win);
}

#[test]
fn test_repeated_clicks_during_round_are_ignored() {
    let (mut game, clock) = game_with_script(vec![2]);

    assert!(game.play_round(Choice::Rock));
    for c in Choice::ALL {
        assert!(!game.play_round(c));
    }
    clock.advance(Duration::from_secs(1));
    game.poll();

    assert_eq!(game.state().rounds_played, 1);
    assert_eq!(game.state().player_choice, Some(Choice::Rock));
}

#[test]
fn test_opponent_hidden_until_reveal() {
    let (mut game, clock) = game_with_script(vec![0]);
    game.play_round(Choice::Paper);

    for _ in 0..9 {
        clock.advance(Duration::from_millis(100));
        game.poll();
        assert!(game.state().round_in_progress);
        assert_eq!(game.state().opponent_choice, None);
    }

    clock.advance(Duration::from_millis(100));
    assert!(game.poll().is_some());
    assert_eq!(game.state().opponent_choice, Some(Choice::Rock));
}

#[test]
fn test_play_again_then_reset() {
    let (mut game, clock) = game_with_script(vec![2, 1]);
    play(&mut game, &clock, Choice::Rock);
    play(&mut game, &clock, Choice::Rock);

    game.play_again();
    assert_eq!(game.state().player_score, 1);
    assert_eq!(game.state().opponent_score, 1);
    assert_eq!(game.state().result, None);

    game.reset_score();
    assert_eq!(game.state(), &RpsState::default());
}

#[test]
fn test_seeded_games_are_deterministic() {
    let config = RpsConfig::default().with_seed(1234);
    let run = || {
        let clock = ManualClock::new();
        let mut game = RpsGame::with_parts(config.clone(), SeededRng::new(config.seed), clock.clone());
        (0..20)
            .map(|i| play(&mut game, &clock, Choice::ALL[i % 3]))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_seeded_opponent_uses_every_choice() {
    let clock = ManualClock::new();
    let mut game = RpsGame::with_parts(RpsConfig::default(), SeededRng::new(5), clock.clone());

    let mut seen = Vec::new();
    for _ in 0..60 {
        play(&mut game, &clock, Choice::Rock);
        let opponent = game.state().opponent_choice.unwrap();
        if !seen.contains(&opponent) {
            seen.push(opponent);
        }
    }
    assert_eq!(seen.len(), 3);
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Command {
    Play(Choice),
    Advance(u64),
    Resolve,
    PlayAgain,
    Reset,
}

fn choice_strategy() -> impl Strategy<Value = Choice> {
    prop::sample::select(Choice::ALL.to_vec())
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => choice_strategy().prop_map(Command::Play),
        4 => (0u64..1500).prop_map(Command::Advance),
        1 => Just(Command::Resolve),
        1 => Just(Command::PlayAgain),
        1 => Just(Command::Reset),
    ]
}

proptest! {
    #[test]
    fn prop_outcome_table_total(player in choice_strategy(), opponent in choice_strategy()) {
        let outcome = determine_winner(player, opponent);
        let expected = if player == opponent {
            Outcome::Tie
        } else if player.beats(opponent) {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn prop_scores_monotonic_until_reset(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 0..60),
    ) {
        let clock = ManualClock::new();
        let mut game = RpsGame::with_parts(RpsConfig::default(), SeededRng::new(seed), clock.clone());

        for command in commands {
            let before = game.state().clone();
            match command {
                Command::Play(c) => {
                    game.play_round(c);
                }
                Command::Advance(ms) => {
                    clock.advance(Duration::from_millis(ms));
                    game.poll();
                }
                Command::Resolve => {
                    game.resolve_round();
                }
                Command::PlayAgain => {
                    game.play_again();
                    prop_assert_eq!(game.state().player_score, before.player_score);
                    prop_assert_eq!(game.state().opponent_score, before.opponent_score);
                }
                Command::Reset => {
                    game.reset_score();
                    prop_assert_eq!(game.state(), &RpsState::default());
                    continue;
                }
            }

            let state = game.state();
            prop_assert!(state.player_score >= before.player_score);
            prop_assert!(state.opponent_score >= before.opponent_score);
            prop_assert!(state.player_score + state.opponent_score <= state.rounds_played);
            if state.round_in_progress {
                prop_assert!(state.opponent_choice.is_none());
                prop_assert!(state.result.is_none());
            }
        }
    }
}
