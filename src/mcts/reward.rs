use crate::mcts::simulator::GameSimulator;

/// Chips won or lost by `agent` since the decision point.
///
/// Only meaningful once the round is over for the agent; any other state is
/// worth 0. A seat that disappeared counts as a stack of 0.
pub fn terminal_value<G>(simulator: &G, state: &G::State, agent: &str, initial_stack: u32) -> f64
where
    G: GameSimulator + ?Sized,
{
    if simulator.is_round_finished(state) || !simulator.is_active(state, agent) {
        let final_stack = simulator.stack_of(state, agent).unwrap_or(0);
        final_stack as f64 - initial_stack as f64
    } else {
        0.0
    }
}
