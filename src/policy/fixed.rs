use crate::game::{ActionContext, PlayerDecision, ValidActions};
use crate::mcts::{Action, ExpansionPolicy, GameSimulator};
use crate::policy::ActionPolicy;
use rand::rngs::StdRng;

/// Concrete move for an abstract action. A raise that is not available
/// degrades to a call.
pub fn decision_for(action: Action, valid: &ValidActions) -> PlayerDecision {
    match (action, valid.raise) {
        (Action::Fold, _) => valid.fold(),
        (Action::Call, _) | (Action::MinRaise | Action::MaxRaise, None) => valid.call(),
        (Action::MinRaise, Some(range)) => PlayerDecision::raise(range.min),
        (Action::MaxRaise, Some(range)) => PlayerDecision::raise(range.max),
    }
}

/// Always plays the same abstract action.
#[derive(Debug, Clone, Copy)]
pub struct FixedActionPolicy {
    action: Action,
}

impl FixedActionPolicy {
    pub fn new(action: Action) -> Self {
        Self { action }
    }
}

impl ActionPolicy for FixedActionPolicy {
    fn name(&self) -> &'static str {
        match self.action {
            Action::Fold => "fold",
            Action::Call => "fish",
            Action::MinRaise => "min_raiser",
            Action::MaxRaise => "shover",
        }
    }

    fn choose(&self, context: &ActionContext, _rng: &mut StdRng) -> PlayerDecision {
        decision_for(self.action, &context.valid_actions)
    }
}

/// Expansion policy for simulators that speak [`ActionContext`] and
/// [`PlayerDecision`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedActionExpansion;

impl<G> ExpansionPolicy<G> for FixedActionExpansion
where
    G: GameSimulator<Context = ActionContext, Move = PlayerDecision> + ?Sized,
{
    fn choose(&self, action: Action, context: &ActionContext) -> PlayerDecision {
        decision_for(action, &context.valid_actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RaiseRange;

    #[test]
    fn test_decisions_with_raise_available() {
        let valid = ValidActions {
            call_amount: 10,
            raise: Some(RaiseRange { min: 20, max: 200 }),
        };
        assert_eq!(decision_for(Action::Fold, &valid), PlayerDecision::fold());
        assert_eq!(decision_for(Action::Call, &valid), PlayerDecision::call(10));
        assert_eq!(decision_for(Action::MinRaise, &valid), PlayerDecision::raise(20));
        assert_eq!(decision_for(Action::MaxRaise, &valid), PlayerDecision::raise(200));
    }

    #[test]
    fn test_raises_fall_back_to_call() {
        let valid = ValidActions {
            call_amount: 50,
            raise: None,
        };
        assert_eq!(decision_for(Action::MinRaise, &valid), PlayerDecision::call(50));
        assert_eq!(decision_for(Action::MaxRaise, &valid), PlayerDecision::call(50));
    }
}
