// src/node/autograd.rs

use crate::autograd::graph::ComputationGraph;
use crate::node::Node;

impl Node {
    /// Computes the gradient of this node with respect to every node it
    /// depends on.
    ///
    /// Seeds this node's gradient with 1.0, then runs each gradient rule in
    /// reverse topological order. Gradients of the ancestors are **accumulated**:
    /// calling `backward()` twice, or on two roots sharing nodes, sums the
    /// results. Use [`Node::zero_grad_graph`] in between to start fresh.
    pub fn backward(&self) {
        if self.is_leaf() {
            log::debug!("backward() called on leaf node {}. Only the seed is set.", self.id());
        }
        ComputationGraph::build(self).backward();
    }

    /// Resets the gradient of this node to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Resets the gradient of this node and of every node it depends on.
    pub fn zero_grad_graph(&self) {
        ComputationGraph::build(self).zero_grad();
    }

    /// Every node reachable from this one, operands before consumers. This is
    /// the order `backward()` walks in reverse; the node itself is last.
    pub fn topological_order(&self) -> Vec<Node> {
        ComputationGraph::build(self).nodes().to_vec()
    }
}
