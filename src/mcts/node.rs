//! Search tree node.
//!
//! Nodes live in a [`SearchTree`](crate::mcts::tree::SearchTree) arena and
//! refer to each other by [`NodeId`]: the parent link is a plain index, the
//! arena owns every node.

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Who moves at a node, fixed when the node is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The tracked agent acts.
    Decision,
    /// An opponent or the environment acts.
    Chance,
    /// Round over, or the agent is out of it.
    Terminal,
}

/// A vertex of the search tree.
#[derive(Debug, Clone)]
pub struct MctsNode<S, C> {
    /// Game state reached at this node, owned by the node
    pub state: S,

    /// Arena index of the parent; `None` at the root
    pub parent: Option<NodeId>,

    /// Arena indices of the children, in expansion order. Append-only.
    pub children: Vec<NodeId>,

    /// Input for the expansion policy at this state; `None` on terminal nodes.
    pub context: Option<C>,

    /// Number of completed cycles that went through this node
    pub visit_count: u32,

    /// Backed-up value, scaled so that `total_value / visit_count` is the
    /// node's value estimate
    pub total_value: f64,

    /// Decision, Chance or Terminal
    pub kind: NodeKind,
}

impl<S, C> MctsNode<S, C> {
    pub fn new(state: S, context: Option<C>, kind: NodeKind, parent: Option<NodeId>) -> Self {
        let context = if kind == NodeKind::Terminal { None } else { context };
        Self {
            state,
            parent,
            children: Vec::new(),
            context,
            visit_count: 0,
            total_value: 0.0,
            kind,
        }
    }

    pub fn new_root(state: S, context: Option<C>, kind: NodeKind) -> Self {
        Self::new(state, context, kind, None)
    }

    /// Mean value, 0.0 before the first visit.
    #[inline]
    pub fn average_value(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.total_value / self.visit_count as f64
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind == NodeKind::Terminal
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_root() {
        let node: MctsNode<u32, &str> = MctsNode::new_root(7, Some("ctx"), NodeKind::Decision);
        assert!(node.is_root());
        assert!(node.is_leaf());
        assert!(!node.is_terminal());
        assert_eq!(node.visit_count, 0);
        assert_eq!(node.context, Some("ctx"));
    }

    #[test]
    fn test_terminal_nodes_drop_their_context() {
        let node: MctsNode<u32, &str> = MctsNode::new(1, Some("ctx"), NodeKind::Terminal, Some(NodeId(0)));
        assert!(node.is_terminal());
        assert!(node.context.is_none());
        assert_eq!(node.parent, Some(NodeId(0)));
    }

    #[test]
    fn test_average_value() {
        let mut node: MctsNode<(), ()> = MctsNode::new_root((), None, NodeKind::Chance);
        assert_eq!(node.average_value(), 0.0);

        node.visit_count = 4;
        node.total_value = -10.0;
        assert!((node.average_value() + 2.5).abs() < 1e-9);
    }
}
