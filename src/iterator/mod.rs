mod core;
mod state;

pub use self::core::ExpressionIterator;
pub use state::Evaluated;

/// Start a fresh enumeration of every tree over `numbers`
pub fn iter_expressions(numbers: &[i64]) -> ExpressionIterator<'_> {
    ExpressionIterator::new(numbers)
}
