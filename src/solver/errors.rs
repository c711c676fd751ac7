use thiserror::Error;

use crate::shapes::AssignError;
use crate::utils::InputError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InputError(#[from] InputError),
    #[error("Assignment error: {0}")]
    AssignError(#[from] AssignError),
}
