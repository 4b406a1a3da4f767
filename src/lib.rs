//! Countdown solver - A library for solving the Countdown numbers game
//!
//! Given a target and a handful of source numbers, this library searches every
//! ordering of the numbers and every way of combining them with `+`, `-`, `*`
//! and exact `/` for an expression equal to the target, or the closest one.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use iterator::{ExpressionIterator, iter_expressions};
pub use solver::{
    Closest, CountdownSolver, Improvement, SearchOutcome, SearchReport, SolverConfig, SolverError,
    validate_solution,
};
pub use utils::{UtilsError, generate_numbers, generate_permutations, generate_target};

/// Solve a round with the default, sequential solver
///
/// # Arguments
///
/// * `target` - The value to reach
/// * `numbers` - The source numbers, each usable at most once
///
/// # Returns
///
/// * `Ok(SearchOutcome::ExactMatch(_))` - The first expression equal to `target`
/// * `Ok(SearchOutcome::Closest(_))` - The closest expression if nothing matches exactly
/// * `Err(SolverError)` - If `numbers` is empty
///
/// # Errors
///
/// This function will return an error if no source numbers are given.
///
/// # Examples
///
/// ```
/// use countdown_solver::{SearchOutcome, solve};
///
/// match solve(24, &[4, 6]) {
///     Ok(SearchOutcome::ExactMatch(expr)) => assert_eq!(expr.to_string(), "4 * 6"),
///     Ok(SearchOutcome::Closest(closest)) => println!("Closest: {}", closest.expression),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(target: i64, numbers: &[i64]) -> Result<SearchOutcome, SolverError> {
    let solver = CountdownSolver::default();
    Ok(solver.search(target, numbers)?.outcome)
}
