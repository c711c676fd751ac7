/// How many numbers are chosen for a round
pub const NUM_CHOSEN_NUMBERS: usize = 6;

/// Operator count of the largest tree that uses every chosen number
pub const MAX_OPERATORS: usize = NUM_CHOSEN_NUMBERS - 1;
