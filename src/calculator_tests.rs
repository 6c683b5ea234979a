#[cfg(test)]
mod tests {
    use crate::calculator::{Calculator, CalculatorError};
    use crate::self_check;

    #[test]
    fn test_add() {
        let calculator = Calculator::new();

        assert_eq!(calculator.add(10.0, 5.0), 15.0);
        assert_eq!(calculator.add(-5.0, 5.0), 0.0);
        assert_eq!(calculator.add(1.5, 2.25), 3.75);
    }

    #[test]
    fn test_subtract() {
        let calculator = Calculator::new();

        assert_eq!(calculator.subtract(10.0, 3.0), 7.0);
        assert_eq!(calculator.subtract(3.0, 10.0), -7.0);
        assert_eq!(calculator.subtract(0.5, 0.25), 0.25);
    }

    #[test]
    fn test_floating_point_rounding() {
        let calculator = Calculator::new();

        let sum = calculator.add(0.1, 0.2);
        assert!((sum - 0.3).abs() < 1e-12);
        assert_eq!(calculator.add(2.0, 3.0), calculator.add(3.0, 2.0));
    }

    #[test]
    fn test_divide() {
        let calculator = Calculator::new();

        assert_eq!(calculator.divide(15.0, 3.0), Ok(5.0));
        assert_eq!(calculator.divide(1.0, 4.0), Ok(0.25));
        assert_eq!(calculator.divide(-9.0, 3.0), Ok(-3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let calculator = Calculator::new();

        for dividend in [10.0, 0.0, -3.5, f64::MAX] {
            let result = calculator.divide(dividend, 0.0);
            assert_eq!(result, Err(CalculatorError::DivisionByZero { dividend }));
        }

        // negative zero is still zero
        assert!(calculator.divide(1.0, -0.0).is_err());
    }

    #[test]
    fn test_divide_by_zero_message() {
        let calculator = Calculator::new();

        let err = calculator.divide(10.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "cannot divide 10 by zero");
    }

    #[test]
    fn test_info_is_stable() {
        let calculator = Calculator::new();

        let first = calculator.info();
        assert!(!first.is_empty());
        assert_eq!(first, calculator.info());
        for op in ["add", "subtract", "divide"] {
            assert!(first.contains(op), "info text should mention {op}");
        }
    }

    #[test]
    fn test_self_check_passes() {
        let outcomes = self_check::run(&Calculator::new());

        assert_eq!(outcomes.len(), 5);
        assert!(outcomes.iter().all(|o| o.passed), "{outcomes:?}");
        assert!(outcomes[0].to_string().starts_with("[ok] add"));
    }
}
