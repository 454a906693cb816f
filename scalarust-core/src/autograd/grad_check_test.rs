#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
    use crate::autograd::BackwardOp;
    use crate::error::ScalarustError;
    use crate::node::Node;

    /// Identity forward value with a gradient rule that is off by a factor 2.
    #[derive(Debug)]
    struct DoublingBackward;

    impl BackwardOp for DoublingBackward {
        fn backward(&self, grad_output: f64) -> Vec<f64> {
            vec![2.0 * grad_output]
        }
    }

    fn broken_identity(x: &Node) -> Node {
        Node::from_op(x.value(), vec![x.clone()], Box::new(DoublingBackward), "broken")
    }

    #[test]
    fn test_check_grad_polynomial() {
        let inputs = vec![Node::new(1.3), Node::new(-0.7)];
        let func = |n: &[Node]| {
            // f(x, y) = x^3 * y - 2x + y / x
            &n[0].pow(3.0) * &n[1] - &n[0] * 2.0 + &n[1] / &n[0]
        };
        let result = check_grad(func, &inputs, &GradCheckConfig::default());
        assert!(result.is_ok(), "{:?}", result);

        // Analytical gradients are left on the inputs.
        let (x, y) = (1.3_f64, -0.7_f64);
        approx::assert_relative_eq!(
            inputs[0].grad(),
            3.0 * x * x * y - 2.0 - y / (x * x),
            epsilon = 1e-12
        );
        approx::assert_relative_eq!(inputs[1].grad(), x.powi(3) + 1.0 / x, epsilon = 1e-12);
    }

    #[test]
    fn test_check_grad_resets_input_grads_first() {
        let x = Node::new(2.0);
        let stale = &x * 100.0;
        stale.backward();
        assert_eq!(x.grad(), 100.0);

        check_grad(|n| n[0].pow(2.0), &[x.clone()], &GradCheckConfig::default()).unwrap();
        assert_eq!(x.grad(), 4.0);
    }

    #[test]
    fn test_check_grad_detects_mismatch() {
        let inputs = vec![Node::new(0.25)];
        let result = check_grad(
            |n| broken_identity(&n[0]),
            &inputs,
            &GradCheckConfig::default(),
        );
        match result {
            Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 2.0);
                approx::assert_relative_eq!(numerical_grad, 1.0, epsilon = 1e-6);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_non_finite_analytical() {
        // d(1/x)/dx at 0 is -inf analytically, the central difference is finite.
        let inputs = vec![Node::new(0.0)];
        let result = check_grad(|n| n[0].pow(-1.0), &inputs, &GradCheckConfig::default());
        assert!(
            matches!(
                result,
                Err(GradCheckError::AnalyticalGradNonFinite { input_index: 0, .. })
            ),
            "{:?}",
            result
        );
    }

    #[test]
    fn test_check_grad_non_finite_numerical() {
        // sqrt is NaN just left of 0.
        let inputs = vec![Node::new(0.0)];
        let result = check_grad(|n| n[0].pow(0.5), &inputs, &GradCheckConfig::default());
        assert!(
            matches!(
                result,
                Err(GradCheckError::NumericalGradNonFinite { input_index: 0, .. })
            ),
            "{:?}",
            result
        );
    }

    #[test]
    fn test_check_grad_rejects_bad_setup() {
        let config = GradCheckConfig::default();
        assert_eq!(
            check_grad(|n| n[0].clone(), &[], &config),
            Err(GradCheckError::Setup(ScalarustError::NoInputs))
        );

        let a = Node::new(1.0);
        let not_leaf = &a + 1.0;
        assert_eq!(
            check_grad(|n| n[1].clone(), &[a, not_leaf], &config),
            Err(GradCheckError::Setup(ScalarustError::InputNotLeaf {
                input_index: 1
            }))
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(GradCheckConfig::default().validate().is_ok());
        assert_eq!(
            GradCheckConfig::new(0.0, 1e-4),
            Err(ScalarustError::InvalidEpsilon { epsilon: 0.0 })
        );
        assert!(matches!(
            GradCheckConfig::new(f64::NAN, 1e-4),
            Err(ScalarustError::InvalidEpsilon { .. })
        ));
        assert_eq!(
            GradCheckConfig::new(1e-6, -1.0),
            Err(ScalarustError::InvalidTolerance { tolerance: -1.0 })
        );

        let config = GradCheckConfig {
            epsilon: -1.0,
            tolerance: 1e-4,
        };
        let result = check_grad(|n| n[0].clone(), &[Node::new(1.0)], &config);
        assert_eq!(
            result,
            Err(GradCheckError::Setup(ScalarustError::InvalidEpsilon {
                epsilon: -1.0
            }))
        );
    }
}
