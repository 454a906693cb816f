//! # Scalar Operations Module (`ops`)
//!
//! Every operation computes its forward value immediately and records how to
//! send gradient back to its operands.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`,
//!   `mul_op`, ...) that builds the output [`Node`](crate::Node). The
//!   `std::ops` operators and the `Node` methods call these.
//! - **`Backward` Structs:** Primitive operations (`add`, `mul`, `pow`,
//!   `relu`) have a struct implementing
//!   [`BackwardOp`](crate::autograd::BackwardOp) that stores what the local
//!   derivative needs from the forward pass.
//! - **Derived operations:** `neg`, `sub` and `div` are compositions of the
//!   primitives and have no backward struct of their own.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: ReLU.

/// Implements a `std::ops` binary operator for every combination of owned or
/// borrowed `Node` and `f64` operands, delegating to the given `_op` function.
///
/// A raw `f64` operand is first wrapped as a fresh leaf node, so
/// `node + 2.0`, `2.0 + node` and `node + Node::new(2.0)` build the same graph
/// shape and propagate identical gradients to `node`.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl std::ops::$trait<&$crate::node::Node> for &$crate::node::Node {
            type Output = $crate::node::Node;
            fn $method(self, rhs: &$crate::node::Node) -> Self::Output {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<$crate::node::Node> for $crate::node::Node {
            type Output = $crate::node::Node;
            fn $method(self, rhs: $crate::node::Node) -> Self::Output {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<&$crate::node::Node> for $crate::node::Node {
            type Output = $crate::node::Node;
            fn $method(self, rhs: &$crate::node::Node) -> Self::Output {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<$crate::node::Node> for &$crate::node::Node {
            type Output = $crate::node::Node;
            fn $method(self, rhs: $crate::node::Node) -> Self::Output {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &$crate::node::Node {
            type Output = $crate::node::Node;
            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(self, &$crate::node::Node::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for $crate::node::Node {
            type Output = $crate::node::Node;
            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(&self, &$crate::node::Node::new(rhs))
            }
        }

        impl std::ops::$trait<&$crate::node::Node> for f64 {
            type Output = $crate::node::Node;
            fn $method(self, rhs: &$crate::node::Node) -> Self::Output {
                $op_fn(&$crate::node::Node::new(self), rhs)
            }
        }

        impl std::ops::$trait<$crate::node::Node> for f64 {
            type Output = $crate::node::Node;
            fn $method(self, rhs: $crate::node::Node) -> Self::Output {
                $op_fn(&$crate::node::Node::new(self), &rhs)
            }
        }
    };
}

pub mod activation;
pub mod arithmetic;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
