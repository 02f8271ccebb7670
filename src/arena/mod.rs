//! Games between the MCTS bot and policy-driven opponents, single or in
//! batches.

pub mod batch;
pub mod game_runner;
pub mod player;

pub use batch::{game_seed, run_batch, BatchGrid};
pub use game_runner::{run_game, GameSettings, BOT_NAME, BOT_UUID};
pub use player::{MctsPlayer, Player, PolicyPlayer};
