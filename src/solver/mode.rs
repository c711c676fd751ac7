use std::fmt;
use std::str::FromStr;

use crate::utils::InputError;

/// When the search stops and what it reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveMode {
    /// Stop at the first exact match
    First,
    /// Collect every distinct solution
    All,
    /// Collect every distinct solution, then report the lowest intuition score
    MostIntuitive,
}

impl SolveMode {
    pub const ALL: [SolveMode; 3] = [SolveMode::First, SolveMode::All, SolveMode::MostIntuitive];

    /// One-letter code accepted in place of the full name
    pub fn response_code(self) -> &'static str {
        match self {
            SolveMode::First => "f",
            SolveMode::All => "a",
            SolveMode::MostIntuitive => "i",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SolveMode::First => "first",
            SolveMode::All => "all",
            SolveMode::MostIntuitive => "intuitive",
        }
    }

    /// Whether the search runs through every combination
    pub fn is_exhaustive(self) -> bool {
        !matches!(self, SolveMode::First)
    }
}

impl fmt::Display for SolveMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolveMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        SolveMode::ALL
            .into_iter()
            .find(|mode| {
                needle == mode.response_code()
                    || needle == mode.name()
                    || (*mode == SolveMode::MostIntuitive && needle == "most-intuitive")
            })
            .ok_or_else(|| InputError::UnknownMode(s.to_string()))
    }
}
