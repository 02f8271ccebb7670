//! Seated players: something that turns the table state into a decision.

use std::fmt;

use crate::game::{ActionContext, Emulator, GameState, PlayerDecision};
use crate::mcts::{decide, MctsConfig, MctsResult, SearchError};
use crate::policy::{decision_for, ActionPolicy, FixedActionExpansion, PolicyKind};
use rand::prelude::*;

pub trait Player: Send + fmt::Debug {
    /// `state` is the full table; a player must not read cards it cannot see.
    fn declare_action(&mut self, state: &GameState, context: &ActionContext) -> Result<PlayerDecision, SearchError>;
}

/// Plays whatever its policy says.
#[derive(Debug)]
pub struct PolicyPlayer {
    policy: Box<dyn ActionPolicy>,
    rng: StdRng,
}

impl PolicyPlayer {
    pub fn new(policy: Box<dyn ActionPolicy>, seed: u64) -> Self {
        Self {
            policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for PolicyPlayer {
    fn declare_action(&mut self, _state: &GameState, context: &ActionContext) -> Result<PlayerDecision, SearchError> {
        Ok(self.policy.choose(context, &mut self.rng))
    }
}

/// Searches every decision with MCTS.
///
/// Hidden cards are re-dealt before each search, and every seat of the
/// hypothetical rounds is played by `opponent_model`.
#[derive(Debug)]
pub struct MctsPlayer {
    uuid: String,
    config: MctsConfig,
    opponent_model: PolicyKind,
    rng: StdRng,
    last_result: Option<MctsResult>,
}

impl MctsPlayer {
    pub fn new(uuid: impl Into<String>, config: MctsConfig, opponent_model: PolicyKind, seed: u64) -> Self {
        Self {
            uuid: uuid.into(),
            config,
            opponent_model,
            rng: StdRng::seed_from_u64(seed),
            last_result: None,
        }
    }

    pub fn last_result(&self) -> Option<&MctsResult> {
        self.last_result.as_ref()
    }
}

impl Player for MctsPlayer {
    fn declare_action(&mut self, state: &GameState, context: &ActionContext) -> Result<PlayerDecision, SearchError> {
        let sampled = state.determinize(&self.uuid, &mut self.rng);
        let mut emulator = Emulator::new(self.opponent_model.build(), self.rng.random());

        let result = decide(
            &mut emulator,
            &FixedActionExpansion,
            context,
            &sampled,
            &self.uuid,
            &self.config,
        )?;
        let decision = decision_for(result.best_action, &context.valid_actions);
        log::info!(
            "{} plays {} ({}) in round {}",
            self.uuid,
            result.best_action,
            decision,
            context.round_state.round_count
        );
        self.last_result = Some(result);
        Ok(decision)
    }
}
