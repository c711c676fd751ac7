use thiserror::Error;

/// Errors raised while placing numbers or operators into a shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignError {
    #[error("Shape needs {needed} numbers but only {available} were supplied")]
    NotEnoughNumbers { needed: usize, available: usize },
    #[error("Shape needs {needed} operators but only {available} were supplied")]
    NotEnoughOperators { needed: usize, available: usize },
}
