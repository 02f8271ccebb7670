//! Benchmark grid: every combination of opponent kind, game length, table
//! size and search budget, played in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::arena::game_runner::{run_game, GameSettings};
use crate::game::TableConfig;
use crate::mcts::MctsConfig;
use crate::policy::PolicyKind;
use crate::recording::{GameResult, ResultsWriter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchGrid {
    pub opponents: Vec<PolicyKind>,
    pub rounds: Vec<u32>,
    pub others: Vec<usize>,
    pub playouts: Vec<u32>,
    pub games_per_setting: usize,
    /// Stack and blinds of every table; `max_rounds` comes from `rounds`.
    pub table: TableConfig,
    pub exploration_constant: f64,
    pub opponent_model: PolicyKind,
    pub base_seed: u64,
}

impl Default for BatchGrid {
    fn default() -> Self {
        Self {
            opponents: vec![PolicyKind::Random, PolicyKind::Honest],
            rounds: vec![5, 10, 15, 20],
            others: vec![1, 3, 5, 7],
            playouts: vec![100, 1000, 10_000, 100_000],
            games_per_setting: 10,
            table: TableConfig::default(),
            exploration_constant: MctsConfig::default().exploration_constant,
            opponent_model: PolicyKind::Random,
            base_seed: 2025,
        }
    }
}

impl BatchGrid {
    pub fn settings(&self) -> Vec<GameSettings> {
        let mut settings = Vec::new();
        for &opponent in &self.opponents {
            for &rounds in &self.rounds {
                for &others in &self.others {
                    for &playouts in &self.playouts {
                        settings.push(GameSettings {
                            opponent,
                            others,
                            table: TableConfig {
                                max_rounds: rounds,
                                ..self.table.clone()
                            },
                            mcts: MctsConfig {
                                simulations_per_action: playouts,
                                exploration_constant: self.exploration_constant,
                            },
                            opponent_model: self.opponent_model,
                        });
                    }
                }
            }
        }
        settings
    }

    /// Every game to play with its seed.
    pub fn jobs(&self) -> Vec<(GameSettings, u64)> {
        self.settings()
            .into_iter()
            .enumerate()
            .flat_map(|(setting, settings)| {
                (0..self.games_per_setting).map(move |game| {
                    (settings.clone(), game_seed(self.base_seed, setting, game))
                })
            })
            .collect()
    }
}

/// Seed of one game, independent of scheduling order.
pub fn game_seed(base_seed: u64, setting: usize, game: usize) -> u64 {
    // splitmix64 finaliser over the three inputs
    let mut z = base_seed
        ^ (setting as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (game as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Plays the whole grid on the rayon pool. Results come back in job order and
/// are appended to `writer` once every game is done.
pub fn run_batch(grid: &BatchGrid, writer: Option<&ResultsWriter>) -> crate::Result<Vec<GameResult>> {
    let jobs = grid.jobs();
    log::info!(
        "running {} games over {} settings",
        jobs.len(),
        jobs.len() / grid.games_per_setting.max(1)
    );

    let results = jobs
        .par_iter()
        .map(|(settings, seed)| run_game(settings, *seed))
        .collect::<crate::Result<Vec<_>>>()?;

    if let Some(writer) = writer {
        for result in &results {
            writer.append(result)?;
        }
        log::info!("results written to {}", writer.base_dir().display());
    }
    Ok(results)
}
