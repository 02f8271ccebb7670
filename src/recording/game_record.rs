//! Outcome of one benchmark game.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::arena::GameSettings;

/// Final chip counts of one game, keyed by player name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// Unique game identifier
    pub game_id: String,
    /// Unix time the game ended
    pub timestamp: i64,
    pub settings: GameSettings,
    pub seed: u64,
    pub rounds_played: u32,
    pub final_stacks: BTreeMap<String, u32>,
}

impl GameResult {
    pub fn new(settings: GameSettings, seed: u64, rounds_played: u32, final_stacks: BTreeMap<String, u32>) -> Self {
        Self {
            game_id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp(),
            settings,
            seed,
            rounds_played,
            final_stacks,
        }
    }

    pub fn stack_of(&self, name: &str) -> Option<u32> {
        self.final_stacks.get(name).copied()
    }

    /// Chips won (or lost, if negative) by `name` over the game.
    pub fn profit_of(&self, name: &str) -> Option<i64> {
        self.stack_of(name)
            .map(|stack| stack as i64 - self.settings.table.initial_stack as i64)
    }
}
