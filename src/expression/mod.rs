//! Expression trees: evaluation, rendering, equivalence and intuition scoring

mod ast;
mod display;
mod equivalence;
mod eval;
mod intuition;

pub use ast::{Expression, Operator};
pub use equivalence::LeafRole;
pub use eval::INVALID_DIVISION;
pub use intuition::LEAF_SCORE;
