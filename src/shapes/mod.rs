//! Expression tree shapes and the assignment of numbers and operators into them

mod assign;
mod enumerate;
mod errors;

pub use assign::{Assigner, UNASSIGNED_NUMBER, UNASSIGNED_OPERATOR};
pub use enumerate::{Shape, enumerate_shapes};
pub use errors::AssignError;
