use crate::node::Node;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a node in the computation graph.
///
/// Assigned from a monotonically increasing counter when the node is built,
/// so it never depends on the node's value, gradient or tag. Visited sets and
/// node equality are keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value; later nodes always have larger ids.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The ancestry of a root node, sorted so that every node comes after all of
/// its operands (the root is last).
///
/// Built once per backward pass. Holding a `ComputationGraph` keeps every
/// node in it alive.
pub struct ComputationGraph {
    root: Node,
    sorted: Vec<Node>,
    visited: HashSet<NodeId>,
}

impl ComputationGraph {
    /// Collects every node reachable from `root` through operand edges.
    pub fn build(root: &Node) -> Self {
        let (sorted, visited) = topological_sort(root);
        ComputationGraph {
            root: root.clone(),
            sorted,
            visited,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Nodes in topological order: operands before the nodes consuming them.
    pub fn nodes(&self) -> &[Node] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always `false`: a graph contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.visited.contains(&node.id())
    }

    /// Seeds the root gradient with 1.0 and runs every gradient rule in
    /// reverse topological order.
    ///
    /// By the time a node's rule runs, all of its consumers have already added
    /// their contributions to its gradient. Operand gradients are accumulated,
    /// never overwritten; only the root is reset by the seed.
    pub fn backward(&self) {
        log::debug!(
            "backward from node {} ({}) through {} nodes",
            self.root.id(),
            self.root.tag(),
            self.sorted.len()
        );
        self.root.set_grad(1.0);

        for node in self.sorted.iter().rev() {
            let Some(grad_fn) = node.grad_fn() else {
                continue;
            };
            let contributions = grad_fn.backward(node.grad());
            debug_assert_eq!(
                contributions.len(),
                node.operands().len(),
                "BackwardOp {:?} returned {} gradients for {} operands",
                grad_fn,
                contributions.len(),
                node.operands().len()
            );
            for (operand, contribution) in node.operands().iter().zip(contributions) {
                operand.acc_grad(contribution);
            }
        }
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&self) {
        log::debug!("zeroing gradients of {} nodes", self.sorted.len());
        for node in &self.sorted {
            node.zero_grad();
        }
    }
}

/// Post-order depth-first traversal from `root` along operand edges.
///
/// Uses an explicit work stack, so arbitrarily long expression chains do not
/// grow the call stack. Each node is emitted exactly once no matter how many
/// consumers it has.
pub(crate) fn topological_sort(root: &Node) -> (Vec<Node>, HashSet<NodeId>) {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Node> = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            log::trace!("[topological_sort] node {} already visited", node.id());
            continue;
        }
        log::trace!(
            "[topological_sort] visiting node {} ({} operands)",
            node.id(),
            node.operands().len()
        );

        stack.push((node.clone(), true));
        // Reversed so the first operand is expanded first.
        for operand in node.operands().iter().rev() {
            if !visited.contains(&operand.id()) {
                stack.push((operand.clone(), false));
            }
        }
    }

    (sorted_list, visited)
}
