//! Arena-backed search tree.
//!
//! All nodes of one tree are stored in a single `Vec` and addressed by
//! [`NodeId`]; the whole tree is dropped at once when the decision is made.

use crate::mcts::action::Action;
use crate::mcts::node::{MctsNode, NodeId, NodeKind};
use crate::mcts::simulator::{ExpansionPolicy, GameSimulator, Transition};
use crate::mcts::SearchError;

#[derive(Debug)]
pub struct SearchTree<S, C> {
    nodes: Vec<MctsNode<S, C>>,
    root: NodeId,
}

impl<S, C> SearchTree<S, C> {
    pub fn new(root: MctsNode<S, C>) -> Self {
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S, C> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S, C> {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &MctsNode<S, C>> + '_ {
        self.get(id).children.iter().map(move |&child| self.get(child))
    }

    /// Appends a child to `parent` and returns its id.
    pub fn add_child(&mut self, parent: NodeId, state: S, context: Option<C>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(MctsNode::new(state, context, kind, Some(parent)));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Creates one child of `id` per abstract action, in [`Action::ALL`]
    /// order, and returns the new ids.
    pub fn expand<G, P>(&mut self, id: NodeId, simulator: &mut G, policy: &P, agent: &str) -> Result<Vec<NodeId>, SearchError>
    where
        G: GameSimulator<State = S, Context = C> + ?Sized,
        P: ExpansionPolicy<G> + ?Sized,
    {
        let node = self.get(id);
        if node.is_terminal() {
            return Err(SearchError::TerminalExpansion(id));
        }
        if !node.is_leaf() {
            return Err(SearchError::NotALeaf(id));
        }
        let context = node.context.as_ref().ok_or(SearchError::MissingContext(id))?;

        let mut transitions = Vec::with_capacity(Action::ALL.len());
        for action in Action::ALL {
            let mv = policy.choose(action, context);
            transitions.push(simulator.apply(&node.state, &mv)?);
        }

        let mut children = Vec::with_capacity(transitions.len());
        for Transition { state, context } in transitions {
            let kind = simulator.classify(&state, agent);
            children.push(self.add_child(id, state, context, kind));
        }
        Ok(children)
    }

    /// Records `value` on `leaf` and refreshes every ancestor up to the root.
    ///
    /// The leaf keeps the mean of its own samples. A decision ancestor takes
    /// the best of its visited children, a chance ancestor the visit-weighted
    /// mean of its children.
    pub fn backpropagate(&mut self, leaf: NodeId, value: f64) {
        let node = self.get_mut(leaf);
        node.visit_count += 1;
        node.total_value += value;

        let mut current = node.parent;
        while let Some(id) = current {
            let estimate = self.children_estimate(id);
            let node = self.get_mut(id);
            node.visit_count += 1;
            node.total_value = estimate * node.visit_count as f64;
            current = node.parent;
        }
    }

    fn children_estimate(&self, id: NodeId) -> f64 {
        let node = self.get(id);
        let visited = self.children(id).filter(|child| child.visit_count > 0);

        match node.kind {
            NodeKind::Decision => visited
                .map(MctsNode::average_value)
                .reduce(f64::max)
                .unwrap_or_else(|| node.average_value()),
            NodeKind::Chance => {
                // the node's own sample from before expansion is excluded, so
                // the weights are the child visits, not `node.visit_count`
                let (weighted, visits) = visited.fold((0.0, 0u32), |(weighted, visits), child| {
                    (
                        weighted + child.average_value() * child.visit_count as f64,
                        visits + child.visit_count,
                    )
                });
                if visits == 0 {
                    node.average_value()
                } else {
                    weighted / visits as f64
                }
            }
            NodeKind::Terminal => node.average_value(),
        }
    }
}
