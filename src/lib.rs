//! Countdown numbers - An exhaustive solver for the numbers round
//!
//! This library searches every arithmetic expression over six chosen numbers
//! for one that hits a target exactly, using `+`, `-`, `×` and exact integer `÷`.

pub mod expression;
pub mod shapes;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, Operator};
pub use solver::{NumbersSolver, SearchReport, SolveMode, Solution, SolverError};
pub use utils::{ChosenNumbers, InputError, Target};

/// Solve a numbers round given as plain values
///
/// This is a convenience function that validates the input, creates a default
/// solver and runs the search in the requested mode.
///
/// # Arguments
///
/// * `target` - The number to reach, between 0 and 999
/// * `numbers` - Exactly six numbers, each 1 to 10 or one of 25, 50, 75, 100
/// * `mode` - Whether to stop at the first match, collect all, or pick the most intuitive
///
/// # Errors
///
/// This function will return an error if:
/// * The target is out of range
/// * The numbers break the round's rules
///
/// # Examples
///
/// ```
/// use countdown_numbers::{SolveMode, solve};
///
/// match solve(50, &[10, 5, 1, 2, 3, 4], SolveMode::First) {
///     Ok(report) => match report.first() {
///         Some(solution) => println!("Found: {}", solution.expression),
///         None => println!("No solution found"),
///     },
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(target: i64, numbers: &[i64], mode: SolveMode) -> Result<SearchReport, SolverError> {
    let target = Target::new(target)?;
    let numbers = ChosenNumbers::new(numbers.to_vec())?;

    let solver = NumbersSolver::new();
    solver.solve(target, &numbers, mode)
}
