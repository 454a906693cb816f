use crate::error::ScalarustError;
use crate::node::Node;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Invalid gradient check setup: {0}")]
    Setup(#[from] ScalarustError),
}

/// Tunables for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Accepted absolute and relative disagreement.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

impl GradCheckConfig {
    pub fn new(epsilon: f64, tolerance: f64) -> Result<Self, ScalarustError> {
        let config = GradCheckConfig { epsilon, tolerance };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScalarustError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ScalarustError::InvalidEpsilon {
                epsilon: self.epsilon,
            });
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ScalarustError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a scalar expression from the input leaves. It is called once
/// on `inputs` themselves (followed by `backward()`), then twice per input on
/// fresh leaves where that input is shifted by `±epsilon`.
///
/// The gradients of `inputs` are reset before the analytical pass and hold the
/// analytical gradients afterwards.
pub fn check_grad<F>(
    func: F,
    inputs: &[Node],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Node,
{
    config.validate()?;
    if inputs.is_empty() {
        return Err(ScalarustError::NoInputs.into());
    }
    if let Some(input_index) = inputs.iter().position(|input| !input.is_leaf()) {
        return Err(ScalarustError::InputNotLeaf { input_index }.into());
    }

    // --- Analytical pass ---
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs);
    output.backward();
    let analytical_grads: Vec<f64> = inputs.iter().map(Node::grad).collect();

    log::debug!(
        "check_grad: {} inputs, output value {}, epsilon {}, tolerance {}",
        inputs.len(),
        output.value(),
        config.epsilon,
        config.tolerance
    );

    // --- Numerical pass ---
    let original_values: Vec<f64> = inputs.iter().map(Node::value).collect();
    let evaluate_shifted = |index: usize, delta: f64| -> f64 {
        let shifted: Vec<Node> = original_values
            .iter()
            .enumerate()
            .map(|(i, &v)| Node::new(if i == index { v + delta } else { v }))
            .collect();
        func(&shifted).value()
    };

    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate_shifted(input_index, config.epsilon);
        let loss_minus = evaluate_shifted(input_index, -config.epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
