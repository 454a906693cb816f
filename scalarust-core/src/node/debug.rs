// src/node/debug.rs
use crate::autograd::graph::ComputationGraph;
use crate::node::Node;
use std::fmt;
use std::fmt::Write;

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Operands are listed by id only; printing them in full would walk the
        // whole ancestry.
        let operand_ids: Vec<_> = self.operands().iter().map(Node::id).collect();
        f.debug_struct("Node")
            .field("id", &self.id())
            .field("value", &self.value())
            .field("grad", &self.grad())
            .field("tag", &self.tag())
            .field("operands", &operand_ids)
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(value={}, grad={}", self.value(), self.grad())?;
        if !self.is_leaf() {
            write!(f, ", op={}", self.tag())?;
        }
        write!(f, ")")
    }
}

impl Node {
    /// Multi-line listing of the graph rooted at this node, one node per
    /// line in topological order. For debugging output only.
    ///
    /// ```text
    /// #0 leaf value=2 grad=0
    /// #1 leaf value=-3 grad=0
    /// #2 * value=-6 grad=0 <- [#0, #1]
    /// ```
    pub fn graph_summary(&self) -> String {
        let graph = ComputationGraph::build(self);
        let mut out = String::new();
        for node in graph.nodes() {
            let label = if node.is_leaf() { "leaf" } else { node.tag() };
            // Writing into a String cannot fail.
            let _ = write!(
                out,
                "{} {} value={} grad={}",
                node.id(),
                label,
                node.value(),
                node.grad()
            );
            if !node.operands().is_empty() {
                let ids: Vec<String> = node.operands().iter().map(|o| o.id().to_string()).collect();
                let _ = write!(out, " <- [{}]", ids.join(", "));
            }
            out.push('\n');
        }
        out
    }
}
