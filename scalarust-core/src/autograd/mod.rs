//! # Automatic Differentiation (`autograd`)
//!
//! Reverse-mode differentiation over the dynamic graph that the arithmetic
//! operators build. Every non-leaf [`Node`](crate::Node) stores a
//! [`BackwardOp`] describing its local derivative; [`graph`] orders the
//! ancestry of a root and drives those rules from the root back to the leaves.
//!
//! [`grad_check`] compares the analytical gradients against central finite
//! differences.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::{ComputationGraph, NodeId};

#[cfg(test)]
mod grad_check_test;
