use crate::game::card::Card;
use crate::game::round_state::RoundState;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Call => "call",
            PlayerAction::Raise => "raise",
        };
        f.write_str(name)
    }
}

/// A concrete move: the action plus the street total it commits to.
/// For a fold the amount is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDecision {
    pub action: PlayerAction,
    pub amount: u32,
}

impl PlayerDecision {
    pub fn fold() -> Self {
        Self {
            action: PlayerAction::Fold,
            amount: 0,
        }
    }

    pub fn call(amount: u32) -> Self {
        Self {
            action: PlayerAction::Call,
            amount,
        }
    }

    pub fn raise(amount: u32) -> Self {
        Self {
            action: PlayerAction::Raise,
            amount,
        }
    }
}

impl fmt::Display for PlayerDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.action, self.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseRange {
    pub min: u32,
    pub max: u32,
}

/// Legal moves for the player to act. Amounts are street totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidActions {
    pub call_amount: u32,
    pub raise: Option<RaiseRange>,
}

impl ValidActions {
    pub fn fold(&self) -> PlayerDecision {
        PlayerDecision::fold()
    }

    pub fn call(&self) -> PlayerDecision {
        PlayerDecision::call(self.call_amount)
    }

    pub fn is_legal(&self, decision: &PlayerDecision) -> bool {
        match decision.action {
            PlayerAction::Fold => true,
            PlayerAction::Call => decision.amount == self.call_amount,
            PlayerAction::Raise => self
                .raise
                .is_some_and(|r| (r.min..=r.max).contains(&decision.amount)),
        }
    }
}

/// Everything a policy may look at when it is asked to act.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionContext {
    pub player_uuid: String,
    pub valid_actions: ValidActions,
    pub hole_cards: Vec<Card>,
    pub round_state: RoundState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legality() {
        let valid = ValidActions {
            call_amount: 10,
            raise: Some(RaiseRange { min: 20, max: 200 }),
        };
        assert!(valid.is_legal(&PlayerDecision::fold()));
        assert!(valid.is_legal(&PlayerDecision::call(10)));
        assert!(!valid.is_legal(&PlayerDecision::call(5)));
        assert!(valid.is_legal(&PlayerDecision::raise(20)));
        assert!(valid.is_legal(&PlayerDecision::raise(200)));
        assert!(!valid.is_legal(&PlayerDecision::raise(201)));

        let no_raise = ValidActions {
            call_amount: 10,
            raise: None,
        };
        assert!(!no_raise.is_legal(&PlayerDecision::raise(20)));
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerDecision::raise(40).to_string(), "raise(40)");
        assert_eq!(PlayerDecision::fold().to_string(), "fold(0)");
    }
}
