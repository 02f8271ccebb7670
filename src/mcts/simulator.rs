//! Boundary between the search and the game.

use crate::game::GameError;
use crate::mcts::action::Action;
use crate::mcts::node::NodeKind;

/// Result of applying one move: the new state and what the next player to act
/// gets to see (`None` once nobody has to act).
#[derive(Debug, Clone)]
pub struct Transition<S, C> {
    pub state: S,
    pub context: Option<C>,
}

pub trait GameSimulator {
    type State: Clone;
    type Context: Clone;
    type Move;

    /// Applies `mv` for the player to act. An illegal move is an error.
    fn apply(
        &mut self,
        state: &Self::State,
        mv: &Self::Move,
    ) -> Result<Transition<Self::State, Self::Context>, GameError>;

    /// Plays every remaining turn of the round with the simulator's own
    /// policies and returns the finished state.
    fn roll_forward(&mut self, state: &Self::State) -> Result<Self::State, GameError>;

    /// Chip count of `agent`, `None` if the agent is not at the table.
    fn stack_of(&self, state: &Self::State, agent: &str) -> Option<u32>;

    fn is_round_finished(&self, state: &Self::State) -> bool;

    /// Whether `agent` still contests the current round.
    fn is_active(&self, state: &Self::State, agent: &str) -> bool;

    fn next_actor<'s>(&self, state: &'s Self::State) -> Option<&'s str>;

    fn classify(&self, state: &Self::State, agent: &str) -> NodeKind {
        if self.is_round_finished(state) || !self.is_active(state, agent) {
            NodeKind::Terminal
        } else if self.next_actor(state) == Some(agent) {
            NodeKind::Decision
        } else {
            NodeKind::Chance
        }
    }
}

/// Turns an abstract [`Action`] into a concrete move for whoever acts in
/// `context`. Must only produce legal moves.
pub trait ExpansionPolicy<G: GameSimulator + ?Sized> {
    fn choose(&self, action: Action, context: &G::Context) -> G::Move;
}
