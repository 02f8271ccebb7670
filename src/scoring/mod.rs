//! Hand strength: exact showdown ranking and Monte Carlo equity.

pub mod hand_rank;
pub mod win_rate;

pub use hand_rank::{best_hand, evaluate_five, HandCategory, HandRank};
pub use win_rate::estimate_win_rate;
