use thiserror::Error;
use tracing::{error, info};

const INFO_TEXT: &str = "\
Calculator MCP - available operations:
1. add: adds two numbers
2. subtract: subtracts the second number from the first
3. divide: divides the first number by the second (division by zero is rejected)

All operations accept decimal numbers.";

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalculatorError {
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: f64 },
}

/// Stateless arithmetic over `f64` operands.
///
/// Each operation logs its operands before running and its outcome after.
/// The log events never influence the returned value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        info!("calculator initialized");
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        info!(a, b, "executing add");
        let result = a + b;
        info!(result, "add finished");
        result
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        info!(a, b, "executing subtract");
        let result = a - b;
        info!(result, "subtract finished");
        result
    }

    /// Divides `a` by `b`.
    ///
    /// Fails with [`CalculatorError::DivisionByZero`] when `b` is zero
    /// (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        info!(a, b, "executing divide");
        if b == 0.0 {
            let err = CalculatorError::DivisionByZero { dividend: a };
            error!(a, b, "{err}");
            return Err(err);
        }
        let result = a / b;
        info!(result, "divide finished");
        Ok(result)
    }

    pub fn info(&self) -> &'static str {
        info!("info requested");
        INFO_TEXT
    }
}
