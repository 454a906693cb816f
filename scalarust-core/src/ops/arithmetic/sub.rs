use crate::node::Node;
use crate::ops::arithmetic::{add_op, neg_op};

/// Subtracts as `a + (-b)`. No backward rule of its own.
pub fn sub_op(a: &Node, b: &Node) -> Node {
    add_op(a, &neg_op(b))
}

impl_binary_operator!(Sub, sub, sub_op);
