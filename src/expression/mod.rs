//! Expression trees over the source numbers

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;
