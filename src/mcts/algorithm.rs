//! Search loop over a single tree.
//!
//! [`MctsEngine`] owns the tree for one candidate first action and borrows the
//! simulator and the expansion policy for as long as the search runs.

use crate::mcts::node::{MctsNode, NodeId};
use crate::mcts::reward::terminal_value;
use crate::mcts::selection::select_leaf;
use crate::mcts::simulator::{ExpansionPolicy, GameSimulator};
use crate::mcts::tree::SearchTree;
use crate::mcts::SearchError;

pub struct MctsEngine<'a, G, P>
where
    G: GameSimulator + ?Sized,
    P: ExpansionPolicy<G> + ?Sized,
{
    simulator: &'a mut G,
    policy: &'a P,
    agent: &'a str,
    initial_stack: u32,
    exploration: f64,
    tree: SearchTree<G::State, G::Context>,
}

impl<'a, G, P> MctsEngine<'a, G, P>
where
    G: GameSimulator + ?Sized,
    P: ExpansionPolicy<G> + ?Sized,
{
    /// Roots a fresh tree at `root_state`. `initial_stack` is the agent's
    /// stack at the real decision point, not at `root_state`.
    pub fn new(
        simulator: &'a mut G,
        policy: &'a P,
        agent: &'a str,
        initial_stack: u32,
        exploration: f64,
        root_state: G::State,
        root_context: Option<G::Context>,
    ) -> Self {
        let kind = simulator.classify(&root_state, agent);
        let tree = SearchTree::new(MctsNode::new_root(root_state, root_context, kind));
        Self {
            simulator,
            policy,
            agent,
            initial_stack,
            exploration,
            tree,
        }
    }

    /// One select → expand → simulate → backpropagate pass. Returns the node
    /// whose sample was recorded.
    pub fn run_cycle(&mut self) -> Result<NodeId, SearchError> {
        let leaf = select_leaf(&self.tree, self.exploration);
        let leaf_node = self.tree.get(leaf);

        let target = if leaf_node.is_terminal() || leaf_node.visit_count == 0 {
            leaf
        } else {
            let children = self.tree.expand(leaf, &mut *self.simulator, self.policy, self.agent)?;
            children.first().copied().unwrap_or(leaf)
        };

        let target_node = self.tree.get(target);
        let value = if target_node.is_terminal() {
            terminal_value(&*self.simulator, &target_node.state, self.agent, self.initial_stack)
        } else {
            let final_state = self.simulator.roll_forward(&target_node.state)?;
            terminal_value(&*self.simulator, &final_state, self.agent, self.initial_stack)
        };

        self.tree.backpropagate(target, value);
        Ok(target)
    }

    /// Runs `budget` cycles and returns the root's value estimate.
    pub fn run(&mut self, budget: u32) -> Result<f64, SearchError> {
        for _ in 0..budget {
            self.run_cycle()?;
        }

        let root = self.tree.get(self.tree.root());
        log::debug!(
            "search finished: {} cycles, {} nodes, root value {:.3}",
            root.visit_count,
            self.tree.len(),
            root.average_value()
        );
        Ok(self.root_value())
    }

    pub fn tree(&self) -> &SearchTree<G::State, G::Context> {
        &self.tree
    }

    /// Current value estimate of the root.
    pub fn root_value(&self) -> f64 {
        self.tree.get(self.tree.root()).average_value()
    }
}
