//! Utils module split into submodules

mod errors;
mod format;
mod permutations;
mod validation;

pub use errors::InputError;
pub use format::format_count;
pub use permutations::{permutations_with_repetition, permutations_without_repetition};
pub use validation::{
    ChosenNumbers, LARGE_NUMBERS, SMALL_NUMBERS, TARGET_MAX, TARGET_MIN, Target,
};
