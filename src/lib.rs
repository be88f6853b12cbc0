//! Countdown numbers - A library for solving the Countdown numbers game
//!
//! Given a target and a handful of numbers, this library finds every expression
//! that combines some of the numbers with addition, subtraction, multiplication
//! and exact division, and reports the ones whose value is closest to the target.

pub mod calculation;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use calculation::{Calculation, CalculationError, Operation};
pub use solver::{CountdownSolver, Solution, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_number, parse_numbers};

/// Find the calculations closest to the target using some of the given numbers
///
/// This is a convenience function that parses the inputs, creates a default
/// solver and runs it.
///
/// # Arguments
///
/// * `target` - The target value, as a decimal integer
/// * `numbers` - The numbers available, each a decimal integer
///
/// # Returns
///
/// * `Ok(Some(Solution))` - The closest difference and every calculation achieving it
/// * `Ok(None)` - If there are no numbers, so nothing can be calculated
/// * `Err(SolverError)` - If the input is malformed or too large
///
/// # Errors
///
/// This function will return an error if:
/// * The target or any number is empty or not a valid integer
/// * More numbers are given than the default solver accepts
///
/// # Examples
///
/// ```
/// use countdown_numbers::find_closest;
///
/// match find_closest("15", &["2", "3", "5"]) {
///     Ok(Some(solution)) => println!("Found: {}", solution.calculations[0]),
///     Ok(None) => println!("No numbers given"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_closest(target: &str, numbers: &[&str]) -> Result<Option<Solution>, SolverError> {
    let target = parse_number(target)?;
    let numbers = parse_numbers(numbers)?;

    let solver = CountdownSolver::default();
    solver.try_solve(target, &numbers)
}
