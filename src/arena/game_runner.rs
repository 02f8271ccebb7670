//! One full game: the MCTS bot against a table of policy-driven opponents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::arena::player::{MctsPlayer, Player, PolicyPlayer};
use crate::game::{GameError, GameState, TableConfig};
use crate::mcts::MctsConfig;
use crate::policy::PolicyKind;
use crate::recording::GameResult;
use crate::HoldemMctsError;
use rand::prelude::*;

pub const BOT_NAME: &str = "Stonks";
pub const BOT_UUID: &str = "stonks";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Policy of every opponent at the table.
    pub opponent: PolicyKind,
    /// Number of opponents.
    pub others: usize,
    pub table: TableConfig,
    pub mcts: MctsConfig,
    /// Policy the bot assumes for every seat of its searches.
    pub opponent_model: PolicyKind,
}

impl GameSettings {
    pub fn new(opponent: PolicyKind, others: usize, rounds: u32, playouts: u32) -> Self {
        Self {
            opponent,
            others,
            table: TableConfig {
                max_rounds: rounds,
                ..TableConfig::default()
            },
            mcts: MctsConfig::with_simulations(playouts),
            opponent_model: PolicyKind::Random,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.table.max_rounds
    }

    pub fn playouts(&self) -> u32 {
        self.mcts.simulations_per_action
    }

    /// `{opponent}_{rounds}-rounds_{others}-others_{playouts}-playouts.json`
    pub fn results_file_name(&self) -> String {
        format!(
            "{}_{}-rounds_{}-others_{}-playouts.json",
            self.opponent.player_label(),
            self.rounds(),
            self.others,
            self.playouts()
        )
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.others == 0 {
            return Err(GameError::NotEnoughPlayers(1).into());
        }
        if self.table.small_blind == 0 || self.table.initial_stack == 0 {
            return Err(HoldemMctsError::InvalidSettings(format!(
                "stack {} and small blind {} must be positive",
                self.table.initial_stack, self.table.small_blind
            )));
        }
        self.mcts.validate()?;
        Ok(())
    }
}

/// Plays `settings.rounds()` rounds, or until a single player has chips left.
///
/// The bot sits in seat 0; every random choice derives from `seed`.
pub fn run_game(settings: &GameSettings, seed: u64) -> crate::Result<GameResult> {
    settings.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut seats = vec![(BOT_UUID.to_string(), BOT_NAME.to_string())];
    let mut players: Vec<Box<dyn Player>> = vec![Box::new(MctsPlayer::new(
        BOT_UUID,
        settings.mcts.clone(),
        settings.opponent_model,
        rng.random(),
    ))];
    for i in 0..settings.others {
        let number = i + 2;
        seats.push((format!("player{number}"), format!("Player{number}")));
        players.push(Box::new(PolicyPlayer::new(settings.opponent.build(), rng.random())));
    }

    let mut state = GameState::from_config(&seats, &settings.table)?;
    while !state.is_game_over(settings.rounds()) {
        state.start_round(&mut rng)?;
        while let Some(context) = state.action_context() {
            let player = state
                .next_player()
                .and_then(|idx| players.get_mut(idx))
                .ok_or_else(|| GameError::UnknownPlayer(context.player_uuid.clone()))?;
            let decision = player.declare_action(&state, &context)?;
            state.apply_action(decision)?;
        }
        log::debug!(
            "round {} over, {} has {} chips",
            state.round_count(),
            BOT_NAME,
            state.stack_of(BOT_UUID).unwrap_or(0)
        );
    }

    let final_stacks: BTreeMap<String, u32> = state
        .seats()
        .iter()
        .map(|seat| (seat.name.clone(), seat.stack))
        .collect();
    log::info!(
        "game vs {} x{} finished after {} rounds: {} has {}",
        settings.opponent,
        settings.others,
        state.round_count(),
        BOT_NAME,
        final_stacks.get(BOT_NAME).copied().unwrap_or(0)
    );

    Ok(GameResult::new(settings.clone(), seed, state.round_count(), final_stacks))
}
