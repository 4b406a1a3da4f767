use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division leaves a remainder")]
    InexactDivision,
    #[error("Integer overflow")]
    Overflow,
}
