use log::{debug, warn};

use crate::solver::constants::NUM_CHOSEN_NUMBERS;
use crate::utils::errors::InputError;

pub const TARGET_MIN: i64 = 0;
pub const TARGET_MAX: i64 = 999;
pub const SMALL_NUMBERS: std::ops::RangeInclusive<i64> = 1..=10;
pub const LARGE_NUMBERS: [i64; 4] = [25, 50, 75, 100];

/// A target the round allows, `0..=999`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target(i64);

impl Target {
    /// # Errors
    ///
    /// Returns an error if the value lies outside `0..=999`.
    pub fn new(value: i64) -> Result<Self, InputError> {
        if !(TARGET_MIN..=TARGET_MAX).contains(&value) {
            warn!("Target {} is out of range", value);
            return Err(InputError::TargetOutOfRange {
                value,
                min: TARGET_MIN,
                max: TARGET_MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// The six numbers picked for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenNumbers(Vec<i64>);

impl ChosenNumbers {
    /// # Errors
    ///
    /// Returns an error if there are not exactly six numbers, if a number is
    /// neither small (1 to 10) nor large (25, 50, 75, 100), or if a large
    /// number is chosen twice.
    pub fn new(values: Vec<i64>) -> Result<Self, InputError> {
        debug!("Validating chosen numbers: {:?}", values);

        if values.len() != NUM_CHOSEN_NUMBERS {
            warn!("Expected {} numbers, got {}", NUM_CHOSEN_NUMBERS, values.len());
            return Err(InputError::WrongNumberCount {
                expected: NUM_CHOSEN_NUMBERS,
                actual: values.len(),
            });
        }

        for (i, &value) in values.iter().enumerate() {
            let is_large = LARGE_NUMBERS.contains(&value);
            if !is_large && !SMALL_NUMBERS.contains(&value) {
                warn!("Number {} is not a valid choice", value);
                return Err(InputError::InvalidNumber(value));
            }
            if is_large && values.iter().take(i).any(|&earlier| earlier == value) {
                warn!("Large number {} chosen more than once", value);
                return Err(InputError::DuplicateLargeNumber(value));
            }
        }

        debug!("Chosen numbers validation successful");
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}
