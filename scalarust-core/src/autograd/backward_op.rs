use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Any operation that creates a non-leaf [`Node`](crate::Node) stores an
/// implementation of this trait in the output node's `grad_fn`. It is invoked
/// once per backward pass, after every consumer of the output node has
/// contributed to the output's gradient.
///
/// Implementations capture whatever they need from the forward pass (operand
/// values, constant parameters, the output value) when the node is built.
/// Values are immutable, so the captured copies always agree with the operands.
pub trait BackwardOp: Debug {
    /// Computes the contribution to each operand's gradient, given the
    /// gradient flowing into the output node (dRoot/dOutput).
    ///
    /// For `Output = f(Input_1, ..., Input_n)` entry `i` of the result is
    /// `grad_output * dOutput/dInput_i`.
    ///
    /// The order of the returned values **must** match the order of the
    /// operands recorded on the output node.
    fn backward(&self, grad_output: f64) -> Vec<f64>;
}
