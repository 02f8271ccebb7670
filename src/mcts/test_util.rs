//! Deterministic toy game for exercising the search without cards.
//!
//! Players alternate (agent first) until `depth` moves were made or someone
//! folds. The agent's stack is `INITIAL_STACK + payoff(path)`, and the default
//! payoff leaves the empty path at `INITIAL_STACK`.

use crate::game::GameError;
use crate::mcts::action::Action;
use crate::mcts::node::{MctsNode, NodeKind};
use crate::mcts::simulator::{ExpansionPolicy, GameSimulator, Transition};

pub const AGENT: &str = "agent";
pub const VILLAIN: &str = "villain";
pub const INITIAL_STACK: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedState {
    pub path: Vec<Action>,
}

impl ScriptedState {
    fn agent_folded(&self) -> bool {
        self.path.iter().step_by(2).any(|a| *a == Action::Fold)
    }

    fn someone_folded(&self) -> bool {
        self.path.contains(&Action::Fold)
    }
}

pub struct ScriptedGame {
    depth: usize,
    payoff: fn(&[Action]) -> i64,
    pub rollouts: usize,
}

fn call_pays_ten(path: &[Action]) -> i64 {
    match path.first() {
        Some(Action::Call) => 10,
        Some(_) => -5,
        None => 0,
    }
}

impl ScriptedGame {
    pub fn new(depth: usize) -> Self {
        Self::with_payoff(depth, call_pays_ten)
    }

    pub fn with_payoff(depth: usize, payoff: fn(&[Action]) -> i64) -> Self {
        Self {
            depth,
            payoff,
            rollouts: 0,
        }
    }

    pub fn root_node(&self) -> MctsNode<ScriptedState, ()> {
        MctsNode::new_root(ScriptedState::default(), Some(()), NodeKind::Decision)
    }
}

impl GameSimulator for ScriptedGame {
    type State = ScriptedState;
    type Context = ();
    type Move = Action;

    fn apply(&mut self, state: &ScriptedState, mv: &Action) -> Result<Transition<ScriptedState, ()>, GameError> {
        if self.is_round_finished(state) {
            return Err(GameError::RoundFinished);
        }
        let mut next = state.clone();
        next.path.push(*mv);
        let context = (!self.is_round_finished(&next)).then_some(());
        Ok(Transition { state: next, context })
    }

    fn roll_forward(&mut self, state: &ScriptedState) -> Result<ScriptedState, GameError> {
        self.rollouts += 1;
        let mut next = state.clone();
        while !self.is_round_finished(&next) {
            next.path.push(Action::Call);
        }
        Ok(next)
    }

    fn stack_of(&self, state: &ScriptedState, agent: &str) -> Option<u32> {
        (agent == AGENT).then(|| (INITIAL_STACK as i64 + (self.payoff)(&state.path)).max(0) as u32)
    }

    fn is_round_finished(&self, state: &ScriptedState) -> bool {
        state.path.len() >= self.depth || state.someone_folded()
    }

    fn is_active(&self, state: &ScriptedState, agent: &str) -> bool {
        agent == AGENT && !state.agent_folded()
    }

    fn next_actor<'s>(&self, state: &'s ScriptedState) -> Option<&'s str> {
        if self.is_round_finished(state) {
            None
        } else if state.path.len() % 2 == 0 {
            Some(AGENT)
        } else {
            Some(VILLAIN)
        }
    }
}

/// Plays the abstract action itself.
pub struct ScriptedPolicy;

impl ExpansionPolicy<ScriptedGame> for ScriptedPolicy {
    fn choose(&self, action: Action, _context: &()) -> Action {
        action
    }
}
