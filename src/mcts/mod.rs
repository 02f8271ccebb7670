//! Monte Carlo Tree Search decision engine.
//!
//! One decision builds one tree per candidate first action. Each tree is
//! grown with select → expand → simulate → backpropagate cycles:
//!
//! 1. **Selection**: descend by UCB1 until a leaf
//! 2. **Expansion**: a leaf visited once gets one child per abstract action
//! 3. **Simulation**: the simulator plays the round out with its own policies
//! 4. **Backpropagation**: max over children at the agent's own decisions,
//!    visit-weighted expectation at opponent/environment nodes
//!
//! The engine only reaches the game through [`GameSimulator`] and
//! [`ExpansionPolicy`].

pub mod action;
pub mod algorithm;
pub mod decision;
pub mod hyperparameters;
pub mod mcts_result;
pub mod node;
pub mod reward;
pub mod selection;
pub mod simulator;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_util;

pub use action::Action;
pub use algorithm::MctsEngine;
pub use decision::decide;
pub use hyperparameters::MctsConfig;
pub use mcts_result::{ActionValue, MctsResult};
pub use node::{MctsNode, NodeId, NodeKind};
pub use simulator::{ExpansionPolicy, GameSimulator, Transition};
pub use tree::SearchTree;

use crate::game::GameError;

/// Errors that abort a search. None of them is recovered inside the engine.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Node {0:?} already has children")]
    NotALeaf(NodeId),

    #[error("Node {0:?} is terminal and cannot be expanded")]
    TerminalExpansion(NodeId),

    #[error("Node {0:?} has no action context")]
    MissingContext(NodeId),

    #[error("Agent {0} is not seated at the table")]
    AgentNotSeated(String),

    #[error("Invalid search configuration: {0}")]
    Config(String),

    #[error("Simulator error: {0}")]
    Simulator(#[from] GameError),
}
