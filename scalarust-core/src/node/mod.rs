// src/node/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::node_data::NodeData;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

mod autograd;
mod debug;


/// A scalar value in the computation graph.
///
/// `Node` uses `Rc<NodeData>` internally:
/// 1.  **Shared Ownership:** one node may be an operand of many downstream
///     nodes; cloning a `Node` clones the handle, not the value.
/// 2.  **Interior Mutability:** only the gradient changes after
///     construction, and it lives in a `Cell`.
///
/// Nodes are built either by wrapping a raw scalar ([`Node::new`]) or by
/// applying an operator to existing nodes, which computes the value eagerly and
/// records how to propagate gradients back to the operands.
///
/// Equality and hashing use the construction identity ([`Node::id`]), never
/// the value or gradient.
#[derive(Clone)]
pub struct Node {
    pub(crate) data: Rc<NodeData>,
}

impl Node {
    /// Creates a leaf node wrapping a raw scalar.
    pub fn new(value: f64) -> Self {
        Node {
            data: Rc::new(NodeData::new_leaf(value)),
        }
    }

    /// Creates the output node of an operation. Used by the `_op` functions.
    pub(crate) fn from_op(
        value: f64,
        operands: Vec<Node>,
        grad_fn: Box<dyn BackwardOp>,
        tag: impl Into<String>,
    ) -> Self {
        Node {
            data: Rc::new(NodeData::new_op(value, operands, grad_fn, tag.into())),
        }
    }

    pub fn id(&self) -> NodeId {
        self.data.id
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.data.value
    }

    /// Returns the accumulated gradient (0 until a backward pass reaches this node).
    pub fn grad(&self) -> f64 {
        self.data.grad.get()
    }

    /// Direct inputs of the operation that produced this node.
    pub fn operands(&self) -> &[Node] {
        &self.data.operands
    }

    /// Operation label (`""` for leaves, `"+"`, `"*"`, `"**2"`, `"ReLU"`, ...).
    pub fn tag(&self) -> &str {
        &self.data.tag
    }

    pub fn is_leaf(&self) -> bool {
        self.data.grad_fn.is_none()
    }

    /// Returns the gradient rule of this node, if it is not a leaf.
    pub fn grad_fn(&self) -> Option<&dyn BackwardOp> {
        self.data.grad_fn.as_deref()
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.data.grad.set(grad);
    }

    /// Adds `contribution` to this node's gradient.
    pub(crate) fn acc_grad(&self, contribution: f64) {
        self.data.grad.set(self.data.grad.get() + contribution);
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::new(value)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
