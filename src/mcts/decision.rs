use crate::mcts::action::Action;
use crate::mcts::algorithm::MctsEngine;
use crate::mcts::hyperparameters::MctsConfig;
use crate::mcts::mcts_result::{ActionValue, MctsResult};
use crate::mcts::simulator::{ExpansionPolicy, GameSimulator, Transition};
use crate::mcts::SearchError;

/// Picks the abstract action with the best searched value for `agent`.
///
/// Every action of [`Action::ALL`] is applied to the real `state` through
/// `policy`, and a separate tree is searched from each resulting state with
/// `config.simulations_per_action` cycles. Ties go to the earliest action.
pub fn decide<G, P>(
    simulator: &mut G,
    policy: &P,
    context: &G::Context,
    state: &G::State,
    agent: &str,
    config: &MctsConfig,
) -> Result<MctsResult, SearchError>
where
    G: GameSimulator + ?Sized,
    P: ExpansionPolicy<G> + ?Sized,
{
    config.validate()?;
    let initial_stack = simulator
        .stack_of(state, agent)
        .ok_or_else(|| SearchError::AgentNotSeated(agent.to_string()))?;

    let mut action_values = Vec::with_capacity(Action::ALL.len());
    let mut best: Option<(Action, f64)> = None;

    for action in Action::ALL {
        let mv = policy.choose(action, context);
        let Transition {
            state: next_state,
            context: next_context,
        } = simulator.apply(state, &mv)?;

        let mut engine = MctsEngine::new(
            &mut *simulator,
            policy,
            agent,
            initial_stack,
            config.exploration_constant,
            next_state,
            next_context,
        );
        let value = engine.run(config.simulations_per_action)?;
        let tree = engine.tree();
        action_values.push(ActionValue {
            action,
            value,
            visits: tree.get(tree.root()).visit_count,
            nodes: tree.len(),
        });

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((action, value));
        }
    }

    let (best_action, best_value) = best.unwrap_or((Action::Fold, 0.0));
    log::debug!(
        "{agent} chooses {best_action} ({best_value:.2}) after {} cycles per action",
        config.simulations_per_action
    );

    Ok(MctsResult {
        best_action,
        action_values,
        initial_stack,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcts::test_util::{ScriptedGame, ScriptedPolicy, ScriptedState, AGENT, INITIAL_STACK};
    use assert_matches::assert_matches;

    #[test]
    fn test_profitable_action_is_chosen() {
        let mut game = ScriptedGame::new(4);
        let result = decide(
            &mut game,
            &ScriptedPolicy,
            &(),
            &ScriptedState::default(),
            AGENT,
            &MctsConfig::with_simulations(50),
        )
        .unwrap();

        assert_eq!(result.initial_stack, INITIAL_STACK);
        assert_eq!(result.best_action, Action::Call);
        assert_eq!(result.action_values.len(), 4);
        assert_eq!(result.value_of(Action::Call), Some(10.0));
        assert_eq!(result.value_of(Action::Fold), Some(-5.0));
        assert!(result.action_values.iter().all(|v| v.visits == 50));
    }

    #[test]
    fn test_values_are_measured_from_the_decision_stack() {
        // the agent is already 20 chips up when it has to act
        let mut game = ScriptedGame::with_payoff(2, |path| match path.first() {
            None => 20,
            Some(Action::Call) => 30,
            Some(_) => 0,
        });
        let result = decide(
            &mut game,
            &ScriptedPolicy,
            &(),
            &ScriptedState::default(),
            AGENT,
            &MctsConfig::with_simulations(20),
        )
        .unwrap();

        assert_eq!(result.initial_stack, INITIAL_STACK + 20);
        assert_eq!(result.value_of(Action::Call), Some(10.0));
        assert_eq!(result.value_of(Action::Fold), Some(-20.0));
    }

    #[test]
    fn test_ties_go_to_first_action() {
        let mut game = ScriptedGame::with_payoff(2, |_| 0);
        let result = decide(
            &mut game,
            &ScriptedPolicy,
            &(),
            &ScriptedState::default(),
            AGENT,
            &MctsConfig::with_simulations(10),
        )
        .unwrap();
        assert_eq!(result.best_action, Action::Fold);
    }

    #[test]
    fn test_unseated_agent_is_rejected() {
        let mut game = ScriptedGame::new(4);
        let result = decide(
            &mut game,
            &ScriptedPolicy,
            &(),
            &ScriptedState::default(),
            "ghost",
            &MctsConfig::default(),
        );
        assert_matches!(result, Err(SearchError::AgentNotSeated(name)) if name == "ghost");
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let mut game = ScriptedGame::new(4);
        let result = decide(
            &mut game,
            &ScriptedPolicy,
            &(),
            &ScriptedState::default(),
            AGENT,
            &MctsConfig::with_simulations(0),
        );
        assert_matches!(result, Err(SearchError::Config(_)));
    }

    #[test]
    fn test_budget_one_is_reproducible() {
        let run = || {
            let mut game = ScriptedGame::new(3);
            decide(
                &mut game,
                &ScriptedPolicy,
                &(),
                &ScriptedState::default(),
                AGENT,
                &MctsConfig::with_simulations(1),
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }
}
