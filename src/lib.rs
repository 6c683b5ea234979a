pub mod calculator;
pub mod self_check;
pub mod server;

mod calculator_tests;

pub use calculator::{Calculator, CalculatorError};
pub use server::{CalculatorServer, OperandsRequest};
