//! Search configuration.
//!
//! The defaults reproduce the bot the benchmark results were collected with:
//! 1000 playouts per candidate action and the textbook UCB1 constant.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::mcts::selection::DEFAULT_EXPLORATION;
use crate::mcts::SearchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Search cycles run under each candidate first action.
    /// Default: 1000
    pub simulations_per_action: u32,

    /// UCB1 exploration constant `C`.
    /// Default: sqrt(2)
    pub exploration_constant: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            simulations_per_action: 1000,
            exploration_constant: DEFAULT_EXPLORATION,
        }
    }
}

impl MctsConfig {
    pub fn with_simulations(simulations_per_action: u32) -> Self {
        Self {
            simulations_per_action,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.simulations_per_action == 0 {
            return Err(SearchError::Config(
                "simulations_per_action must be at least 1".to_string(),
            ));
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(SearchError::Config(format!(
                "exploration_constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }

    /// Reads a JSON config; missing fields take their default.
    pub fn load_from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_config_string(&self) -> String {
        format!(
            "sims[{}]_c[{:.3}]",
            self.simulations_per_action, self.exploration_constant
        )
    }
}
