use crate::game::card::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// In the hand with chips behind.
    Active,
    Folded,
    /// In the hand with nothing left to bet.
    AllIn,
    /// Out of the game (no chips at the start of a round).
    Eliminated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub uuid: String,
    pub name: String,
    pub stack: u32,
    pub hole_cards: Vec<Card>,
    pub status: SeatStatus,
    /// Chips committed on the current street.
    pub street_bet: u32,
    /// Chips committed over the whole round.
    pub round_bet: u32,
    pub(crate) has_acted: bool,
}

impl Seat {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>, stack: u32) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            stack,
            hole_cards: Vec::new(),
            status: SeatStatus::Active,
            street_bet: 0,
            round_bet: 0,
            has_acted: false,
        }
    }

    /// Still contesting the pot.
    pub fn is_contender(&self) -> bool {
        matches!(self.status, SeatStatus::Active | SeatStatus::AllIn)
    }

    pub fn can_act(&self) -> bool {
        self.status == SeatStatus::Active
    }

    /// Moves up to `amount` chips from the stack into the pot and returns what
    /// was actually committed.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.street_bet += paid;
        self.round_bet += paid;
        if self.stack == 0 && self.status == SeatStatus::Active {
            self.status = SeatStatus::AllIn;
        }
        paid
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.hole_cards.clear();
        self.street_bet = 0;
        self.round_bet = 0;
        self.has_acted = false;
        self.status = if self.stack == 0 {
            SeatStatus::Eliminated
        } else {
            SeatStatus::Active
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_caps_at_stack_and_goes_all_in() {
        let mut seat = Seat::new("p1", "Alice", 30);
        assert_eq!(seat.commit(10), 10);
        assert_eq!(seat.status, SeatStatus::Active);
        assert_eq!(seat.commit(50), 20);
        assert_eq!(seat.stack, 0);
        assert_eq!(seat.street_bet, 30);
        assert_eq!(seat.round_bet, 30);
        assert_eq!(seat.status, SeatStatus::AllIn);
    }

    #[test]
    fn test_reset_eliminates_broke_seats() {
        let mut seat = Seat::new("p1", "Alice", 0);
        seat.reset_for_round();
        assert_eq!(seat.status, SeatStatus::Eliminated);
        assert!(!seat.is_contender());

        let mut seat = Seat::new("p2", "Bob", 10);
        seat.status = SeatStatus::Folded;
        seat.reset_for_round();
        assert!(seat.can_act());
    }
}
