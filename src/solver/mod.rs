pub mod constants;
mod errors;
mod mode;
mod report;
mod search;

pub use errors::SolverError;
pub use mode::SolveMode;
pub use report::{SearchReport, Solution};
pub use search::NumbersSolver;

#[cfg(test)]
mod tests;
