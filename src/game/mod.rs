//! No-limit hold'em table: cards, seats, betting rules and the emulator used
//! by the search to play hypothetical rounds.

pub mod action;
pub mod card;
pub mod deck;
pub mod emulator;
pub mod game_state;
pub mod round_state;
pub mod seat;

pub use action::{ActionContext, PlayerAction, PlayerDecision, RaiseRange, ValidActions};
pub use card::{Card, Suit};
pub use deck::Deck;
pub use emulator::Emulator;
pub use game_state::{GameState, TableConfig};
pub use round_state::{RoundState, SeatView, Street};
pub use seat::{Seat, SeatStatus};

/// Errors raised by the table rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("Illegal action {decision} for player {player}")]
    IllegalAction {
        player: String,
        decision: PlayerDecision,
    },

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Round is already finished")]
    RoundFinished,

    #[error("A round is still in progress")]
    RoundInProgress,

    #[error("Deck exhausted")]
    DeckExhausted,

    #[error("Need at least two players with chips, found {0}")]
    NotEnoughPlayers(usize),

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Cannot evaluate a hand of {0} cards")]
    InvalidHand(usize),
}
