use crate::game::card::Card;
use crate::game::seat::SeatStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Finished,
}

/// Public information about one seat. Hole cards are never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub uuid: String,
    pub name: String,
    pub stack: u32,
    pub status: SeatStatus,
    pub street_bet: u32,
    pub round_bet: u32,
}

/// What every player at the table can see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub round_count: u32,
    pub street: Street,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    pub dealer_btn: usize,
    pub next_player: Option<usize>,
    pub small_blind: u32,
    pub seats: Vec<SeatView>,
}

impl RoundState {
    /// Players still contesting the pot.
    pub fn contenders(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| matches!(s.status, SeatStatus::Active | SeatStatus::AllIn))
            .count()
    }
}
