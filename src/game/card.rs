use crate::game::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// A playing card. `rank` runs from 2 to 14 (ace high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

impl Card {
    pub const ACE: u8 = 14;

    pub fn new(rank: u8, suit: Suit) -> Result<Self, GameError> {
        if !(2..=Self::ACE).contains(&rank) {
            return Err(GameError::InvalidCard(format!("rank {}", rank)));
        }
        Ok(Card { rank, suit })
    }

    fn rank_symbol(self) -> char {
        match self.rank {
            14 => 'A',
            13 => 'K',
            12 => 'Q',
            11 => 'J',
            10 => 'T',
            r => (b'0' + r) as char,
        }
    }
}

/// Suit first, then rank: `SA`, `H9`, `DT`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank_symbol())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(suit), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GameError::InvalidCard(s.to_string()));
        };

        let suit = match suit.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(GameError::InvalidCard(s.to_string())),
        };

        let rank = match rank.to_ascii_uppercase() {
            'A' => 14,
            'K' => 13,
            'Q' => 12,
            'J' => 11,
            'T' => 10,
            d @ '2'..='9' => d as u8 - b'0',
            _ => return Err(GameError::InvalidCard(s.to_string())),
        };

        Card::new(rank, suit)
    }
}

/// Parses a whitespace separated list such as `"SA HK D2"`.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, GameError> {
    text.split_whitespace().map(str::parse).collect()
}
