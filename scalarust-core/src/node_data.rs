// src/node_data.rs
use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::node::Node;
use std::cell::Cell;
use std::rc::Rc;

/// Internal storage for a [`Node`].
///
/// Everything except `grad` is fixed at construction. It is wrapped in `Rc`
/// by the `Node` struct so that one value can feed several downstream
/// operations; `grad` sits in a `Cell` so the backward pass can accumulate
/// through shared references.
#[derive(Debug)]
pub struct NodeData {
    /// Construction-order identity. The only thing equality and hashing look at.
    pub(crate) id: NodeId,
    /// Forward value, computed eagerly when the node is built.
    pub(crate) value: f64,
    /// Accumulated d(root)/d(self). Zero until a backward pass reaches this node.
    pub(crate) grad: Cell<f64>,
    /// Direct inputs of the operation that produced this node. Empty for leaves.
    pub(crate) operands: Vec<Node>,
    /// Local gradient rule. Leaf nodes have `grad_fn = None`.
    pub(crate) grad_fn: Option<Box<dyn BackwardOp>>,
    /// Operation label, informational only.
    pub(crate) tag: String,
}

impl NodeData {
    /// Creates the data of a leaf node wrapping a raw scalar.
    pub(crate) fn new_leaf(value: f64) -> Self {
        NodeData {
            id: NodeId::next(),
            value,
            grad: Cell::new(0.0),
            operands: Vec::new(),
            grad_fn: None,
            tag: String::new(),
        }
    }

    /// Creates the data of a node produced by an operation.
    pub(crate) fn new_op(
        value: f64,
        operands: Vec<Node>,
        grad_fn: Box<dyn BackwardOp>,
        tag: String,
    ) -> Self {
        NodeData {
            id: NodeId::next(),
            value,
            grad: Cell::new(0.0),
            operands,
            grad_fn: Some(grad_fn),
            tag,
        }
    }
}

// Long expression chains would otherwise be freed through one nested drop
// call per link. Unlink operands onto a local stack instead.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(node) = pending.pop() {
            if let Ok(mut data) = Rc::try_unwrap(node.data) {
                pending.append(&mut data.operands);
            }
        }
    }
}
