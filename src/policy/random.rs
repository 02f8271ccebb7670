use crate::game::{ActionContext, PlayerDecision};
use crate::policy::ActionPolicy;
use rand::prelude::*;

/// Picks fold, call or raise uniformly among the legal ones; a raise size is
/// drawn uniformly from the legal range.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl ActionPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&self, context: &ActionContext, rng: &mut StdRng) -> PlayerDecision {
        let valid = &context.valid_actions;
        let choices = if valid.raise.is_some() { 3 } else { 2 };

        match (rng.random_range(0..choices), valid.raise) {
            (0, _) => valid.fold(),
            (2, Some(range)) => PlayerDecision::raise(rng.random_range(range.min..=range.max)),
            _ => valid.call(),
        }
    }
}
