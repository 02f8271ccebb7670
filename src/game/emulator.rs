//! Plays hypothetical rounds for the search.
//!
//! Every seat is driven by the same rollout policy. The emulator owns its RNG
//! so a seeded emulator replays identically.

use crate::game::{ActionContext, GameError, GameState, PlayerDecision};
use crate::mcts::{GameSimulator, Transition};
use crate::policy::ActionPolicy;
use rand::prelude::*;

#[derive(Debug)]
pub struct Emulator {
    policy: Box<dyn ActionPolicy>,
    rng: StdRng,
}

impl Emulator {
    pub fn new(policy: Box<dyn ActionPolicy>, seed: u64) -> Self {
        Self {
            policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Lets the rollout policy act for every seat until the round is over.
    pub fn run_until_round_finish(&mut self, state: &mut GameState) -> Result<(), GameError> {
        while let Some(context) = state.action_context() {
            let decision = self.policy.choose(&context, &mut self.rng);
            state.apply_action(decision)?;
        }
        Ok(())
    }
}

impl GameSimulator for Emulator {
    type State = GameState;
    type Context = ActionContext;
    type Move = PlayerDecision;

    fn apply(
        &mut self,
        state: &GameState,
        mv: &PlayerDecision,
    ) -> Result<Transition<GameState, ActionContext>, GameError> {
        let mut next = state.clone();
        next.apply_action(*mv)?;
        let context = next.action_context();
        Ok(Transition { state: next, context })
    }

    fn roll_forward(&mut self, state: &GameState) -> Result<GameState, GameError> {
        let mut next = state.clone();
        self.run_until_round_finish(&mut next)?;
        Ok(next)
    }

    fn stack_of(&self, state: &GameState, agent: &str) -> Option<u32> {
        state.stack_of(agent)
    }

    fn is_round_finished(&self, state: &GameState) -> bool {
        state.is_round_finished()
    }

    fn is_active(&self, state: &GameState, agent: &str) -> bool {
        state.seat(agent).is_some_and(|seat| seat.is_contender())
    }

    fn next_actor<'s>(&self, state: &'s GameState) -> Option<&'s str> {
        state
            .next_player()
            .map(|idx| state.seats()[idx].uuid.as_str())
    }
}
