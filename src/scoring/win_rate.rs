use crate::game::{Card, Deck, GameError};
use crate::scoring::hand_rank::best_hand;
use rand::prelude::*;

/// Share of random deals in which `hole_cards` win or tie against
/// `opponents` random hands once the board is completed to five cards.
pub fn estimate_win_rate<R: Rng + ?Sized>(
    hole_cards: &[Card],
    community: &[Card],
    opponents: usize,
    simulations: u32,
    rng: &mut R,
) -> Result<f64, GameError> {
    if hole_cards.len() != 2 {
        return Err(GameError::InvalidHand(hole_cards.len()));
    }
    if community.len() > 5 {
        return Err(GameError::InvalidHand(community.len()));
    }
    if simulations == 0 {
        return Ok(0.0);
    }

    let mut remaining = Deck::new();
    remaining.remove_all(hole_cards);
    remaining.remove_all(community);

    let mut wins = 0u32;
    let mut board = Vec::with_capacity(5);
    let mut hand = Vec::with_capacity(7);
    for _ in 0..simulations {
        let mut deck = remaining.clone();
        deck.shuffle(rng);

        board.clear();
        board.extend_from_slice(community);
        board.extend(deck.draw_many(5 - community.len())?);

        hand.clear();
        hand.extend_from_slice(hole_cards);
        hand.extend_from_slice(&board);
        let mine = best_hand(&hand)?;

        let mut beaten = false;
        for _ in 0..opponents {
            hand.clear();
            hand.extend(deck.draw_many(2)?);
            hand.extend_from_slice(&board);
            if best_hand(&hand)? > mine {
                beaten = true;
                break;
            }
        }
        if !beaten {
            wins += 1;
        }
    }

    Ok(wins as f64 / simulations as f64)
}
