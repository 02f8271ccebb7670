//! UCB1 selection.
//!
//! `score = mean + C * sqrt(ln(N_parent) / N_child)`, with unvisited children
//! scored `+∞` so that every child is sampled once before any is revisited.

use crate::mcts::node::{MctsNode, NodeId};
use crate::mcts::tree::SearchTree;

pub const DEFAULT_EXPLORATION: f64 = std::f64::consts::SQRT_2;

/// UCB1 score of `node` given its parent's visit count.
pub fn ucb1_score<S, C>(node: &MctsNode<S, C>, parent_visits: u32, exploration: f64) -> f64 {
    if node.visit_count == 0 {
        return f64::INFINITY;
    }
    let visits = node.visit_count as f64;
    let exploitation = node.total_value / visits;
    let exploration = exploration * ((parent_visits as f64).ln() / visits).sqrt();
    exploitation + exploration
}

/// Child of `parent` with the highest score; the earliest child wins ties.
pub fn select_best_child<S, C>(tree: &SearchTree<S, C>, parent: NodeId, exploration: f64) -> Option<NodeId> {
    let parent_node = tree.get(parent);
    let mut best: Option<(NodeId, f64)> = None;

    for &child in &parent_node.children {
        let score = ucb1_score(tree.get(child), parent_node.visit_count, exploration);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((child, score));
        }
    }

    best.map(|(id, _)| id)
}

/// Descends from the root to a leaf.
pub fn select_leaf<S, C>(tree: &SearchTree<S, C>, exploration: f64) -> NodeId {
    let mut current = tree.root();
    while let Some(child) = select_best_child(tree, current, exploration) {
        current = child;
    }
    current
}
