use serde::{Deserialize, Serialize};

use crate::mcts::action::Action;

/// Search outcome for one candidate first action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionValue {
    pub action: Action,
    /// Root value estimate in chips relative to the stack at the decision.
    pub value: f64,
    pub visits: u32,
    /// Size of the subtree that was built.
    pub nodes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MctsResult {
    pub best_action: Action,
    /// In `Action::ALL` order.
    pub action_values: Vec<ActionValue>,
    pub initial_stack: u32,
}

impl MctsResult {
    pub fn value_of(&self, action: Action) -> Option<f64> {
        self.action_values
            .iter()
            .find(|entry| entry.action == action)
            .map(|entry| entry.value)
    }

    pub fn best_value(&self) -> Option<f64> {
        self.value_of(self.best_action)
    }

    pub fn total_visits(&self) -> u64 {
        self.action_values.iter().map(|entry| entry.visits as u64).sum()
    }
}
