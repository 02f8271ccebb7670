//! # Hold'em MCTS
//!
//! A Monte Carlo Tree Search poker bot for no-limit Texas hold'em.
//!
//! ## Features
//!
//! - **Search Engine**: MCTS with UCB1 selection and max/expectation backups
//! - **Table Emulator**: betting rules, side pots and showdowns for the search to play out
//! - **Policies**: random, calling-station and equity-based opponents
//! - **Benchmarks**: parallel game grids with JSON results and CSV summaries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use holdem_mcts::arena::{run_game, GameSettings};
//! use holdem_mcts::policy::PolicyKind;
//!
//! let settings = GameSettings::new(PolicyKind::Honest, 3, 10, 1000);
//! let result = run_game(&settings, 42)?;
//! println!("{:?}", result.profit_of("Stonks"));
//! # Ok::<(), holdem_mcts::HoldemMctsError>(())
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Games between the MCTS bot and policy-driven opponents
pub mod arena;

/// Cards, seats, betting rules and the emulator
pub mod game;

/// Logger setup shared by the binary and the benchmarks
pub mod logging;

/// Monte Carlo Tree Search decision engine
pub mod mcts;

/// Opponent and rollout policies
pub mod policy;

/// Benchmark results on disk
pub mod recording;

/// Hand ranking and equity estimation
pub mod scoring;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::{GameError, GameState, TableConfig};
pub use mcts::{decide, Action, MctsConfig, MctsResult, SearchError};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum HoldemMctsError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HoldemMctsError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
