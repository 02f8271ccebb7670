//! Hold'em hand evaluation.
//!
//! Hands are reduced to a [`HandRank`] whose derived ordering is the poker
//! ordering: category first, then the tie-break ranks in significance order.

use crate::game::card::Card;
use crate::game::GameError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandRank {
    pub category: HandCategory,
    /// Ranks compared after the category, most significant first, zero padded.
    pub tiebreak: [u8; 5],
}

/// Evaluates exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&ranks);

    // (count, rank), biggest groups first, then highest rank
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &rank in &ranks {
        match groups.iter_mut().find(|(_, r)| *r == rank) {
            Some(group) => group.0 += 1,
            None => groups.push((1, rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let mut tiebreak = [0u8; 5];
    for (slot, (_, rank)) in tiebreak.iter_mut().zip(groups.iter()) {
        *slot = *rank;
    }

    let category = match (is_flush, straight_high, groups[0].0, groups.get(1).map(|g| g.0)) {
        (true, Some(_), _, _) => HandCategory::StraightFlush,
        (_, _, 4, _) => HandCategory::FourOfAKind,
        (_, _, 3, Some(2)) => HandCategory::FullHouse,
        (true, None, _, _) => HandCategory::Flush,
        (false, Some(_), _, _) => HandCategory::Straight,
        (_, _, 3, _) => HandCategory::ThreeOfAKind,
        (_, _, 2, Some(2)) => HandCategory::TwoPair,
        (_, _, 2, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    if let Some(high) = straight_high {
        if matches!(category, HandCategory::Straight | HandCategory::StraightFlush) {
            tiebreak = [high, 0, 0, 0, 0];
        }
    }

    HandRank { category, tiebreak }
}

/// Highest card of a straight in `ranks` (sorted descending), the wheel
/// counting as five high.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if ranks[0] - ranks[4] == 4 {
        return Some(ranks[0]);
    }
    if *ranks == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// Best five card hand out of five to seven cards.
pub fn best_hand(cards: &[Card]) -> Result<HandRank, GameError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(GameError::InvalidHand(n));
    }

    let mut best: Option<HandRank> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let rank = evaluate_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.is_none_or(|current| rank > current) {
                            best = Some(rank);
                        }
                    }
                }
            }
        }
    }

    best.ok_or(GameError::InvalidHand(n))
}
