use log::trace;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Division that would leave a remainder
    /// - Arithmetic that overflows `i64`
    pub fn apply(self, left: i64, right: i64) -> Result<i64, ExpressionError> {
        match self {
            Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
            Operator::Sub => left.checked_sub(right).ok_or(ExpressionError::Overflow),
            Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
            Operator::Div => {
                if right == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                let remainder = left.checked_rem(right).ok_or(ExpressionError::Overflow)?;
                if remainder != 0 {
                    return Err(ExpressionError::InexactDivision);
                }
                left.checked_div(right).ok_or(ExpressionError::Overflow)
            }
        }
    }
}

impl Expression {
    /// Negative results are returned as-is; rejecting them is up to the caller.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ExpressionError`] raised by any operator in the tree.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Binary(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                let result = op.apply(left, right);
                if let Err(e) = &result {
                    trace!("{} {} {} failed: {}", left, op.symbol(), right, e);
                }
                result
            }
        }
    }
}
