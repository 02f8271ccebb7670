use crate::game::{ActionContext, PlayerDecision};
use crate::policy::ActionPolicy;
use crate::scoring::estimate_win_rate;
use rand::prelude::*;

/// Calls when its estimated equity is at least a fair share of the pot
/// (`1 / contenders`), folds otherwise. Never folds when checking is free.
#[derive(Debug, Clone, Copy)]
pub struct HonestPolicy {
    simulations: u32,
}

impl HonestPolicy {
    pub const DEFAULT_SIMULATIONS: u32 = 100;

    pub fn new(simulations: u32) -> Self {
        Self { simulations }
    }
}

impl Default for HonestPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIMULATIONS)
    }
}

impl ActionPolicy for HonestPolicy {
    fn name(&self) -> &'static str {
        "honest"
    }

    fn choose(&self, context: &ActionContext, rng: &mut StdRng) -> PlayerDecision {
        let valid = &context.valid_actions;
        let already_in = context
            .round_state
            .seats
            .iter()
            .find(|s| s.uuid == context.player_uuid)
            .map_or(0, |s| s.street_bet);
        if valid.call_amount <= already_in {
            return valid.call();
        }

        let contenders = context.round_state.contenders().max(2);
        let win_rate = estimate_win_rate(
            &context.hole_cards,
            &context.round_state.community_cards,
            contenders - 1,
            self.simulations,
            rng,
        );
        match win_rate {
            Ok(rate) if rate >= 1.0 / contenders as f64 => valid.call(),
            Ok(_) => valid.fold(),
            Err(err) => {
                log::warn!("honest policy could not rate its hand: {err}");
                valid.call()
            }
        }
    }
}
