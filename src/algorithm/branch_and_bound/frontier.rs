//! # Frontier
//!
//! Nodes that were created but not yet evaluated. The order in which they come out determines the
//! shape of the search; the engine doesn't depend on it.
use std::collections::VecDeque;

use crate::algorithm::branch_and_bound::node::Node;

/// Pool of pending nodes.
pub trait Frontier: Default + Send + 'static {
    /// Add a node.
    fn push(&mut self, node: Node);
    /// Take the next node to evaluate.
    fn pop(&mut self) -> Option<Node>;
}

/// Last in, first out. Keeps few nodes pending and finds integer solutions early.
#[derive(Debug, Default)]
pub struct DepthFirst(Vec<Node>);

impl Frontier for DepthFirst {
    fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<Node> {
        self.0.pop()
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct BreadthFirst(VecDeque<Node>);

impl Frontier for BreadthFirst {
    fn push(&mut self, node: Node) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<Node> {
        self.0.pop_front()
    }
}
