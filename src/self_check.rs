//! Built-in smoke scenario run by `calculator-mcp self-check`.

use std::fmt;

use crate::calculator::{Calculator, CalculatorError};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "ok" } else { "FAILED" };
        write!(f, "[{mark}] {}: {}", self.name, self.detail)
    }
}

fn expect_value(name: &'static str, expr: &str, got: f64, want: f64) -> CheckOutcome {
    CheckOutcome {
        name,
        passed: got == want,
        detail: format!("{expr} = {got} (expected {want})"),
    }
}

/// Runs the scenario and reports every check, passing or not.
pub fn run(calculator: &Calculator) -> Vec<CheckOutcome> {
    let mut outcomes = vec![
        expect_value("add", "10 + 5", calculator.add(10.0, 5.0), 15.0),
        expect_value("subtract", "10 - 3", calculator.subtract(10.0, 3.0), 7.0),
    ];

    outcomes.push(match calculator.divide(15.0, 3.0) {
        Ok(got) => expect_value("divide", "15 / 3", got, 5.0),
        Err(e) => CheckOutcome {
            name: "divide",
            passed: false,
            detail: format!("15 / 3 failed: {e}"),
        },
    });

    outcomes.push(match calculator.divide(10.0, 0.0) {
        Err(e @ CalculatorError::DivisionByZero { .. }) => CheckOutcome {
            name: "divide by zero",
            passed: true,
            detail: format!("rejected: {e}"),
        },
        Ok(got) => CheckOutcome {
            name: "divide by zero",
            passed: false,
            detail: format!("10 / 0 returned {got} instead of failing"),
        },
    });

    outcomes.push(CheckOutcome {
        name: "info",
        passed: !calculator.info().trim().is_empty(),
        detail: "info text present".to_string(),
    });

    outcomes
}
