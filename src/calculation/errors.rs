use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Inexact division: {dividend} is not divisible by {divisor}")]
    InexactDivision { dividend: i64, divisor: i64 },
    #[error("Integer overflow")]
    Overflow,
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}
