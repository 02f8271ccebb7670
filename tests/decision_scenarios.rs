//! Search behaviour against a small deterministic game.
//!
//! The agent and "nature" alternate for `depth` moves. The agent's payoff is
//! +10 when its first move is the favourite and -5 otherwise, plus one chip
//! for every `MinRaise` nature plays. Rollouts pick nature's and the agent's
//! moves from a seeded RNG.

use holdem_mcts::game::GameError;
use holdem_mcts::mcts::reward::terminal_value;
use holdem_mcts::mcts::{
    decide, Action, ExpansionPolicy, GameSimulator, MctsConfig, MctsEngine, MctsNode, NodeId, NodeKind,
    Transition,
};
use rand::prelude::*;

const AGENT: &str = "agent";
const NATURE: &str = "nature";
const START: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq)]
struct History {
    moves: Vec<Action>,
}

struct LadderGame {
    depth: usize,
    favourite: Action,
    rng: StdRng,
}

impl LadderGame {
    fn new(depth: usize, favourite: Action, seed: u64) -> Self {
        Self {
            depth,
            favourite,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn payoff(&self, history: &History) -> i64 {
        let base = match history.moves.first() {
            Some(first) if *first == self.favourite => 10,
            _ => -5,
        };
        let bonus = history
            .moves
            .iter()
            .skip(1)
            .step_by(2)
            .filter(|m| **m == Action::MinRaise)
            .count() as i64;
        base + bonus
    }
}

impl GameSimulator for LadderGame {
    type State = History;
    type Context = ();
    type Move = Action;

    fn apply(&mut self, state: &History, mv: &Action) -> Result<Transition<History, ()>, GameError> {
        if self.is_round_finished(state) {
            return Err(GameError::RoundFinished);
        }
        let mut next = state.clone();
        next.moves.push(*mv);
        let context = (!self.is_round_finished(&next)).then_some(());
        Ok(Transition { state: next, context })
    }

    fn roll_forward(&mut self, state: &History) -> Result<History, GameError> {
        let mut next = state.clone();
        while !self.is_round_finished(&next) {
            let mv = *Action::ALL[1..].choose(&mut self.rng).unwrap_or(&Action::Call);
            next.moves.push(mv);
        }
        Ok(next)
    }

    fn stack_of(&self, state: &History, agent: &str) -> Option<u32> {
        (agent == AGENT).then(|| (START as i64 + self.payoff(state)) as u32)
    }

    fn is_round_finished(&self, state: &History) -> bool {
        state.moves.len() >= self.depth
    }

    fn is_active(&self, state: &History, agent: &str) -> bool {
        agent == AGENT && !state.moves.iter().step_by(2).any(|m| *m == Action::Fold)
    }

    fn next_actor<'s>(&self, state: &'s History) -> Option<&'s str> {
        if self.is_round_finished(state) {
            None
        } else if state.moves.len() % 2 == 0 {
            Some(AGENT)
        } else {
            Some(NATURE)
        }
    }
}

struct Identity;

impl ExpansionPolicy<LadderGame> for Identity {
    fn choose(&self, action: Action, _context: &()) -> Action {
        action
    }
}

fn node(tree_len: usize) -> impl Iterator<Item = NodeId> {
    (0..tree_len as u32).map(NodeId)
}

#[test]
fn favourite_action_is_chosen_with_fifty_cycles() {
    for favourite in Action::ALL {
        let mut game = LadderGame::new(4, favourite, 1);
        let result = decide(
            &mut game,
            &Identity,
            &(),
            &History::default(),
            AGENT,
            &MctsConfig::with_simulations(50),
        )
        .unwrap();

        assert_eq!(result.best_action, favourite);
        for entry in &result.action_values {
            assert_eq!(entry.visits, 50);
            if entry.action != favourite {
                assert!(entry.value < result.best_value().unwrap());
            }
        }
    }
}

#[test]
fn budget_of_one_is_reproducible() {
    let run = || {
        let mut game = LadderGame::new(6, Action::MinRaise, 99);
        decide(
            &mut game,
            &Identity,
            &(),
            &History::default(),
            AGENT,
            &MctsConfig::with_simulations(1),
        )
        .unwrap()
    };
    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.best_action, Action::MinRaise);
}

#[test]
fn visit_counts_only_grow() {
    let mut game = LadderGame::new(6, Action::Call, 5);
    let mut engine = MctsEngine::new(
        &mut game,
        &Identity,
        AGENT,
        START,
        std::f64::consts::SQRT_2,
        History::default(),
        Some(()),
    );

    let mut previous: Vec<u32> = Vec::new();
    for cycle in 1..=150u32 {
        engine.run_cycle().unwrap();
        let tree = engine.tree();
        let visits: Vec<u32> = node(tree.len()).map(|id| tree.get(id).visit_count).collect();

        assert!(visits.len() >= previous.len());
        for (before, after) in previous.iter().zip(&visits) {
            assert!(after >= before);
        }
        assert_eq!(tree.get(tree.root()).visit_count, cycle);
        previous = visits;
    }
}

#[test]
fn children_never_outvisit_their_parent() {
    let mut game = LadderGame::new(6, Action::Call, 8);
    let mut engine = MctsEngine::new(
        &mut game,
        &Identity,
        AGENT,
        START,
        std::f64::consts::SQRT_2,
        History::default(),
        Some(()),
    );
    engine.run(300).unwrap();

    let tree = engine.tree();
    for id in node(tree.len()) {
        let parent = tree.get(id);
        let below: u32 = tree.children(id).map(|c| c.visit_count).sum();
        assert!(below <= parent.visit_count);
        if !parent.is_leaf() {
            // one visit was spent on the node itself before it was expanded
            assert_eq!(below + 1, parent.visit_count);
        }
    }
}

#[test]
fn decision_values_are_bounded_by_best_child() {
    let mut game = LadderGame::new(6, Action::MaxRaise, 13);
    let mut engine = MctsEngine::new(
        &mut game,
        &Identity,
        AGENT,
        START,
        std::f64::consts::SQRT_2,
        History::default(),
        Some(()),
    );
    engine.run(400).unwrap();

    let tree = engine.tree();
    for id in node(tree.len()) {
        let current = tree.get(id);
        let child_values: Vec<f64> = tree
            .children(id)
            .filter(|c| c.visit_count > 0)
            .map(MctsNode::average_value)
            .collect();
        if child_values.is_empty() {
            continue;
        }
        let best = child_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = child_values.iter().copied().fold(f64::INFINITY, f64::min);
        match current.kind {
            NodeKind::Decision => assert!((current.average_value() - best).abs() < 1e-9),
            NodeKind::Chance => {
                assert!(current.average_value() <= best + 1e-9);
                assert!(current.average_value() >= worst - 1e-9);
            }
            NodeKind::Terminal => panic!("terminal node {id:?} has children"),
        }
    }
}

#[test]
fn terminal_value_is_stack_delta_only_at_the_end() {
    let game = LadderGame::new(2, Action::Call, 0);
    let unfinished = History {
        moves: vec![Action::Call],
    };
    let finished = History {
        moves: vec![Action::Call, Action::MinRaise],
    };
    let folded = History {
        moves: vec![Action::Fold],
    };

    assert_eq!(terminal_value(&game, &unfinished, AGENT, START), 0.0);
    assert_eq!(terminal_value(&game, &finished, AGENT, START), 11.0);
    assert_eq!(terminal_value(&game, &folded, AGENT, START), -5.0);
    assert_eq!(terminal_value(&game, &finished, AGENT, 90), 21.0);
}

#[test]
fn illegal_moves_abort_the_decision() {
    // a finished round rejects every move
    let mut game = LadderGame::new(0, Action::Call, 0);
    let result = decide(
        &mut game,
        &Identity,
        &(),
        &History::default(),
        AGENT,
        &MctsConfig::with_simulations(5),
    );
    assert!(matches!(
        result,
        Err(holdem_mcts::SearchError::Simulator(GameError::RoundFinished))
    ));
}
