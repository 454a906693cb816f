use thiserror::Error;

/// Custom error type for the scalarust framework.
///
/// The differentiation engine itself never fails: degenerate arithmetic
/// (division by zero, fractional powers of negative numbers) produces IEEE-754
/// infinities and NaNs that flow through values and gradients untouched.
/// These errors are raised only by the tooling built around the engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarustError {
    #[error("Invalid finite-difference step: epsilon must be finite and > 0, got {epsilon}")]
    InvalidEpsilon { epsilon: f64 },

    #[error("Invalid tolerance: must be finite and >= 0, got {tolerance}")]
    InvalidTolerance { tolerance: f64 },

    #[error("Gradient check requires at least one input node")]
    NoInputs,

    #[error("Input node at index {input_index} is not a leaf (it has a grad_fn)")]
    InputNotLeaf { input_index: usize },
}
