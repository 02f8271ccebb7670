//! Integration tests for the holdem_mcts library public API

use assert_matches::assert_matches;
use holdem_mcts::{
    game::{Emulator, GameState, Seat},
    mcts::{decide, Action, MctsConfig},
    policy::{FixedActionExpansion, PolicyKind},
    GameError, HoldemMctsError, Result, SearchError, DESCRIPTION, NAME, VERSION,
};
use rand::prelude::*;

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "holdem_mcts");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_conversions() {
    let game: HoldemMctsError = GameError::RoundFinished.into();
    assert_matches!(game, HoldemMctsError::Game(GameError::RoundFinished));

    let search: HoldemMctsError = SearchError::AgentNotSeated("x".to_string()).into();
    assert_matches!(search, HoldemMctsError::Search(_));

    let wrapped: SearchError = GameError::DeckExhausted.into();
    assert_matches!(wrapped, SearchError::Simulator(GameError::DeckExhausted));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert_eq!(success.unwrap(), 42);

    let failure: Result<i32> = Err(GameError::UnknownPlayer("ghost".to_string()).into());
    assert!(failure.is_err());
}

#[test]
fn test_decide_on_a_real_table() {
    let seats = vec![
        Seat::new("me", "Me", 200),
        Seat::new("v1", "Villain1", 200),
        Seat::new("v2", "Villain2", 200),
    ];
    let mut state = GameState::new(seats, 5).unwrap();
    let mut rng = StdRng::seed_from_u64(77);
    state.start_round(&mut rng).unwrap();

    // play until it is "me" to act
    while state.action_context().is_some_and(|c| c.player_uuid != "me") {
        let call = state.valid_actions().unwrap().call();
        state.apply_action(call).unwrap();
    }
    let context = state.action_context().unwrap();
    let sampled = state.determinize("me", &mut rng);

    let mut emulator = Emulator::new(PolicyKind::Random.build(), 1);
    let result = decide(
        &mut emulator,
        &FixedActionExpansion,
        &context,
        &sampled,
        "me",
        &MctsConfig::with_simulations(30),
    )
    .unwrap();

    assert_eq!(result.action_values.len(), Action::ALL.len());
    assert_eq!(result.initial_stack, state.stack_of("me").unwrap());
    let best = result.best_value().unwrap();
    assert!(result.action_values.iter().all(|v| v.value <= best));
    // chips already in the pot are sunk: folding is worth exactly 0
    assert_eq!(result.value_of(Action::Fold), Some(0.0));
    assert!(best >= 0.0);
}
