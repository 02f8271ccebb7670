//! Action policies: map what a player sees to a concrete decision.
//!
//! Policies drive the opponents at the table, the rollouts inside the search,
//! and the translation of the search's abstract actions into legal moves.

pub mod fixed;
pub mod honest;
pub mod random;

pub use fixed::{decision_for, FixedActionExpansion, FixedActionPolicy};
pub use honest::HonestPolicy;
pub use random::RandomPolicy;

use crate::game::{ActionContext, PlayerDecision};
use crate::mcts::Action;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait ActionPolicy: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    /// Must return a decision that is legal for `context.valid_actions`.
    fn choose(&self, context: &ActionContext, rng: &mut StdRng) -> PlayerDecision;
}

/// Opponent and rollout models selectable from the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Uniform over the legal actions
    Random,
    /// Always calls
    Fish,
    /// Calls with a fair share of equity, folds otherwise
    Honest,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Random, PolicyKind::Fish, PolicyKind::Honest];

    pub fn build(self) -> Box<dyn ActionPolicy> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy),
            PolicyKind::Fish => Box::new(FixedActionPolicy::new(Action::Call)),
            PolicyKind::Honest => Box::new(HonestPolicy::default()),
        }
    }

    /// Label used in result file names.
    pub fn player_label(self) -> &'static str {
        match self {
            PolicyKind::Random => "RandomPlayer",
            PolicyKind::Fish => "FishPlayer",
            PolicyKind::Honest => "HonestPlayer",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Random => "random",
            PolicyKind::Fish => "fish",
            PolicyKind::Honest => "honest",
        };
        f.write_str(name)
    }
}
