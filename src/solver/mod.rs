mod config;
mod core;
mod errors;
mod outcome;
mod parallel;
mod validate;

pub use config::SolverConfig;
pub use self::core::CountdownSolver;
pub use errors::SolverError;
pub use outcome::{Closest, Improvement, SearchOutcome, SearchReport};
pub use validate::validate_solution;
