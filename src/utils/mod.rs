//! Permutations, number dealing and input validation

mod errors;
mod numbers;
mod permutations;
mod validation;

pub use errors::UtilsError;
pub use numbers::{
    LARGE_NUMBERS, MAX_LARGE_NUMBERS, NUMBERS_PER_ROUND, SMALL_NUMBER_RANGE, TARGET_LIMIT,
    generate_numbers, generate_target,
};
pub use permutations::{generate_permutations, johnson_trotter, johnson_trotter_signed};
pub use validation::validate_numbers;

#[cfg(test)]
mod tests;
