use crate::game::card::{Card, Suit};
use crate::game::GameError;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub(crate) cards: Vec<Card>,
}

impl Deck {
    /// Full 52 card deck in a fixed order.
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| (2..=Card::ACE).map(move |rank| Card { rank, suit }))
            .collect();
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        (0..count).map(|_| self.draw()).collect()
    }

    /// Removes the given cards if present; unknown cards are ignored.
    pub fn remove_all(&mut self, cards: &[Card]) {
        self.cards.retain(|c| !cards.contains(c));
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
