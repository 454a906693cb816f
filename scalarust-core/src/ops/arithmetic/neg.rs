use crate::node::Node;
use crate::ops::arithmetic::mul_op;
use std::ops::Neg;

/// Negates a node as `a * -1`, reusing the multiplication rule.
pub fn neg_op(a: &Node) -> Node {
    mul_op(a, &Node::new(-1.0))
}

impl Neg for &Node {
    type Output = Node;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Self::Output {
        neg_op(&self)
    }
}
