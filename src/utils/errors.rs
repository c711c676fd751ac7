use thiserror::Error;

/// Errors for input that falls outside the numbers-round rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Target must be between {min} and {max}, got {value}")]
    TargetOutOfRange { value: i64, min: i64, max: i64 },
    #[error("Exactly {expected} numbers must be chosen, got {actual}")]
    WrongNumberCount { expected: usize, actual: usize },
    #[error("Number {0} is not allowed: choose 1 to 10, 25, 50, 75 or 100")]
    InvalidNumber(i64),
    #[error("Large number {0} may only be chosen once")]
    DuplicateLargeNumber(i64),
    #[error("Unknown solve mode: {0}")]
    UnknownMode(String),
}
